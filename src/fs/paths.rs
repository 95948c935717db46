//! Path and directory management.

use std::path::{Path, PathBuf};

use crate::api::Conversation;
use crate::config::{Config, TextLocation};
use crate::error::Result;
use crate::fs::naming::{caption_file_name, conversation_folder_name, validate_file_name};

/// Folder receiving a conversation's downloads.
pub fn get_conversation_folder(config: &Config, conversation: &Conversation) -> PathBuf {
    config
        .output_directory()
        .join(conversation_folder_name(conversation.display_name()))
}

/// Download destination of an attachment, keeping its original file name.
pub fn get_media_path(folder: &Path, file_name: &str) -> Result<PathBuf> {
    Ok(folder.join(validate_file_name(file_name)?))
}

/// Destination of an attachment's caption file.
pub fn get_caption_path(config: &Config, folder: &Path, file_name: &str) -> PathBuf {
    let name = caption_file_name(file_name);
    match config.options.text_location {
        TextLocation::Root => config.output_directory().join(name),
        TextLocation::Conversation => folder.join(name),
    }
}

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ConversationKind;

    fn make_test_config() -> Config {
        let mut config = Config::default();
        config.options.output_directory = Some(PathBuf::from("/exports"));
        config
    }

    fn conversation(title: &str) -> Conversation {
        Conversation {
            id: 7,
            kind: ConversationKind::Channel,
            title: Some(title.to_string()),
            username: None,
            total_messages: 0,
        }
    }

    #[test]
    fn test_get_conversation_folder() {
        let config = make_test_config();
        assert_eq!(
            get_conversation_folder(&config, &conversation("Books: 2024/25")),
            PathBuf::from("/exports/Books_ 2024_25")
        );
    }

    #[test]
    fn test_get_conversation_folder_dot_titles() {
        let config = make_test_config();
        for title in [".", ".."] {
            assert_eq!(
                get_conversation_folder(&config, &conversation(title)),
                PathBuf::from("/exports/_")
            );
        }
    }

    #[test]
    fn test_get_media_path_keeps_case() {
        let folder = PathBuf::from("/exports/Books");
        assert_eq!(
            get_media_path(&folder, "Report.PDF").unwrap(),
            PathBuf::from("/exports/Books/Report.PDF")
        );
        assert!(get_media_path(&folder, "../Report.PDF").is_err());
    }

    #[test]
    fn test_get_caption_path_locations() {
        let mut config = make_test_config();
        let folder = PathBuf::from("/exports/Books");

        assert_eq!(
            get_caption_path(&config, &folder, "Report.PDF"),
            PathBuf::from("/exports/report.txt")
        );

        config.options.text_location = TextLocation::Conversation;
        assert_eq!(
            get_caption_path(&config, &folder, "Report.PDF"),
            PathBuf::from("/exports/Books/report.txt")
        );
    }
}
