//! Attachment downloading.

use crate::api::{Conversation, MessageFilter, MessagingClient, MESSAGE_WINDOW};
use crate::config::Config;
use crate::download::state::DownloadState;
use crate::error::Result;
use crate::fs::{ensure_dir, get_conversation_folder, get_media_path};
use crate::media::Attachment;
use crate::output::create_item_bar;

/// Download every attachment with `extension` among the most recent document
/// messages of a conversation.
///
/// Files land in the conversation folder under their original names and
/// replace existing files. Names that would leave the folder are skipped.
pub async fn download_extension<C: MessagingClient + ?Sized>(
    client: &mut C,
    config: &Config,
    conversation: &Conversation,
    extension: &str,
    state: &mut DownloadState,
) -> Result<()> {
    let folder = get_conversation_folder(config, conversation);

    let messages = client
        .fetch_messages(conversation, MESSAGE_WINDOW, MessageFilter::Documents)
        .await?;

    let matching: Vec<_> = messages
        .iter()
        .filter_map(|message| Attachment::from_message(message).map(|a| (message, a)))
        .filter(|(_, attachment)| attachment.extension == extension)
        .collect();

    tracing::debug!(
        "{} {} attachments in {}",
        matching.len(),
        extension,
        conversation.display_name()
    );

    let progress = create_item_bar(
        matching.len() as u64,
        "Downloading media",
        config.options.show_progress,
    );

    for (message, attachment) in matching {
        let path = match get_media_path(&folder, &attachment.file_name) {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!("Skipping attachment of message {}: {}", message.id, e);
                state.record_skipped();
                progress.inc(1);
                continue;
            }
        };

        ensure_dir(&folder)?;
        client.download_media(conversation, message, &path).await?;
        state.record_download(attachment.size);
        progress.inc(1);

        tracing::debug!("Downloaded: {}", path.display());
    }

    progress.finish_and_clear();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{document, MockClient};
    use crate::api::{ConversationKind, Media, Message};
    use tempfile::TempDir;

    fn test_config(dir: &TempDir) -> Config {
        let mut config = Config::default();
        config.options.output_directory = Some(dir.path().to_path_buf());
        config.options.show_progress = false;
        config
    }

    fn channel(title: &str) -> Conversation {
        Conversation {
            id: 1,
            kind: ConversationKind::Channel,
            title: Some(title.into()),
            username: None,
            total_messages: 0,
        }
    }

    #[tokio::test]
    async fn test_downloads_matching_extension_with_original_name() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);
        let conversation = channel("Reports: 2024");
        let mut client = MockClient::new().with_conversation(
            conversation.clone(),
            0,
            vec![
                document(1, "Report.PDF", "quarterly"),
                document(2, "song.mp3", ""),
                Message {
                    id: 3,
                    text: "see link".into(),
                    media: Media::Web,
                },
            ],
        );

        let mut state = DownloadState::default();
        download_extension(&mut client, &config, &conversation, ".pdf", &mut state)
            .await
            .unwrap();

        let expected = dir.path().join("Reports_ 2024").join("Report.PDF");
        assert!(expected.is_file());
        assert_eq!(client.downloads, vec![expected]);
        assert_eq!(
            client.fetches,
            vec![(1, MessageFilter::Documents, MESSAGE_WINDOW)]
        );
        assert_eq!(state.downloaded, 1);
    }

    #[tokio::test]
    async fn test_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);
        let conversation = channel("Books");
        let folder = dir.path().join("Books");
        std::fs::create_dir_all(&folder).unwrap();
        std::fs::write(folder.join("a.epub"), "old").unwrap();

        let mut client = MockClient::new().with_conversation(
            conversation.clone(),
            0,
            vec![document(9, "a.epub", "")],
        );

        let mut state = DownloadState::default();
        download_extension(&mut client, &config, &conversation, ".epub", &mut state)
            .await
            .unwrap();

        assert_eq!(
            std::fs::read_to_string(folder.join("a.epub")).unwrap(),
            "media of message 9"
        );
    }

    #[tokio::test]
    async fn test_dot_titled_conversation_stays_inside_output() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out");
        let mut config = test_config(&dir);
        config.options.output_directory = Some(out.clone());

        let conversation = channel("..");
        let mut client = MockClient::new().with_conversation(
            conversation.clone(),
            0,
            vec![document(1, "a.pdf", "")],
        );

        let mut state = DownloadState::default();
        download_extension(&mut client, &config, &conversation, ".pdf", &mut state)
            .await
            .unwrap();

        assert_eq!(client.downloads, vec![out.join("_").join("a.pdf")]);
        assert!(!dir.path().join("a.pdf").exists());
    }

    #[tokio::test]
    async fn test_skips_unsafe_file_names() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);
        let conversation = channel("Books");
        let mut client = MockClient::new().with_conversation(
            conversation.clone(),
            0,
            vec![document(1, "../escape.pdf", ""), document(2, "ok.pdf", "")],
        );

        let mut state = DownloadState::default();
        download_extension(&mut client, &config, &conversation, ".pdf", &mut state)
            .await
            .unwrap();

        assert_eq!(state.downloaded, 1);
        assert_eq!(state.skipped, 1);
        assert!(!dir.path().join("escape.pdf").exists());
    }
}
