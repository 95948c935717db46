//! Filename generation and manipulation.

use crate::error::{Error, Result};

/// Characters that are replaced when a conversation title becomes a folder name.
const TITLE_RESERVED: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Placeholder shown for attachments without caption text.
pub const NO_MESSAGE: &str = "No Message";

/// Replace each reserved character of a conversation title with an underscore.
///
/// Applying this twice yields the same result as applying it once.
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .map(|c| if TITLE_RESERVED.contains(&c) { '_' } else { c })
        .collect()
}

/// Folder name for a conversation: its sanitized title, or `_` when that
/// would name the output directory itself or its parent.
pub fn conversation_folder_name(display_name: &str) -> String {
    let name = sanitize_title(display_name);
    match name.as_str() {
        "" | "." | ".." => "_".to_string(),
        _ => name,
    }
}

/// Split a file name into stem and suffix.
///
/// The suffix starts at the last dot and includes it. Leading dots never start
/// a suffix, so ".bashrc" has none and "archive.tar.gz" has ".gz".
pub fn split_extension(name: &str) -> (&str, &str) {
    let Some(dot) = name.rfind('.') else {
        return (name, "");
    };

    if name[..dot].chars().all(|c| c == '.') {
        return (name, "");
    }

    name.split_at(dot)
}

/// Lower-cased suffix of a file name, including the dot. Empty when absent.
pub fn file_extension(name: &str) -> String {
    split_extension(&name.to_lowercase()).1.to_string()
}

/// Name of the caption file for an attachment: lower-cased stem plus ".txt".
pub fn caption_file_name(file_name: &str) -> String {
    let lower = file_name.to_lowercase();
    format!("{}.txt", split_extension(&lower).0)
}

/// Check that an attachment file name stays inside its target directory.
///
/// The name is returned unchanged; it is never rewritten.
pub fn validate_file_name(name: &str) -> Result<&str> {
    if name.is_empty() || name == "." || name == ".." {
        return Err(Error::InvalidFilename(format!("Not a file name: '{}'", name)));
    }

    if name.contains('/') || name.contains('\\') {
        return Err(Error::InvalidFilename(format!(
            "Path separators not allowed in filename: '{}'",
            name
        )));
    }

    if name.contains('\0') {
        return Err(Error::InvalidFilename(format!(
            "Null bytes not allowed in filename: '{}'",
            name
        )));
    }

    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_title() {
        assert_eq!(sanitize_title("Team: Q3/Q4 <draft>"), "Team_ Q3_Q4 _draft_");
        assert_eq!(sanitize_title(r#"a"b\c|d?e*f"#), "a_b_c_d_e_f");
        assert_eq!(sanitize_title("Plain Title"), "Plain Title");
    }

    #[test]
    fn test_sanitize_title_idempotent() {
        for title in ["<>:\"/\\|?*", "Docs | 2024", "already_clean", ""] {
            let once = sanitize_title(title);
            assert_eq!(sanitize_title(&once), once);
        }
    }

    #[test]
    fn test_conversation_folder_name_stays_inside_output() {
        assert_eq!(conversation_folder_name(".."), "_");
        assert_eq!(conversation_folder_name("."), "_");
        assert_eq!(conversation_folder_name(""), "_");
        assert_eq!(conversation_folder_name("../x"), ".._x");
        assert_eq!(conversation_folder_name("..."), "...");
        assert_eq!(conversation_folder_name("Books: 2024"), "Books_ 2024");
    }

    #[test]
    fn test_split_extension() {
        assert_eq!(split_extension("Report.PDF"), ("Report", ".PDF"));
        assert_eq!(split_extension("archive.tar.gz"), ("archive.tar", ".gz"));
        assert_eq!(split_extension("README"), ("README", ""));
        assert_eq!(split_extension(".bashrc"), (".bashrc", ""));
        assert_eq!(split_extension("..hidden"), ("..hidden", ""));
        assert_eq!(split_extension("trailing."), ("trailing", "."));
        assert_eq!(split_extension("..a.b"), ("..a", ".b"));
    }

    #[test]
    fn test_file_extension_is_lower_case() {
        assert_eq!(file_extension("Report.PDF"), ".pdf");
        assert_eq!(file_extension("photo.JpEg"), ".jpeg");
        assert_eq!(file_extension("Makefile"), "");
    }

    #[test]
    fn test_caption_file_name() {
        assert_eq!(caption_file_name("Report.PDF"), "report.txt");
        assert_eq!(caption_file_name("notes"), "notes.txt");
        assert_eq!(caption_file_name("Backup.Tar.GZ"), "backup.tar.txt");
    }

    #[test]
    fn test_validate_file_name() {
        assert_eq!(validate_file_name("Report.PDF").unwrap(), "Report.PDF");
        assert!(validate_file_name("../etc/passwd").is_err());
        assert!(validate_file_name("dir\\file.txt").is_err());
        assert!(validate_file_name("..").is_err());
        assert!(validate_file_name("").is_err());
        assert!(validate_file_name("a\0b").is_err());
    }
}
