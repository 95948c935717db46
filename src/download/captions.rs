//! Caption text files for downloaded attachments.

use crate::api::{Conversation, Message};
use crate::config::Config;
use crate::download::state::DownloadState;
use crate::error::Result;
use crate::fs::{ensure_dir, get_caption_path, get_conversation_folder, validate_file_name};
use crate::media::collect_attachments;
use crate::output::create_item_bar;

/// Write the caption of every attachment with `extension` to a text file named
/// after the attachment.
///
/// Messages without a caption produce an empty file.
pub async fn write_captions(
    config: &Config,
    conversation: &Conversation,
    messages: &[Message],
    extension: &str,
    state: &mut DownloadState,
) -> Result<()> {
    let folder = get_conversation_folder(config, conversation);
    let attachments = collect_attachments(messages, &[extension.to_string()]);

    let progress = create_item_bar(
        attachments.len() as u64,
        "Generating text files",
        config.options.show_progress,
    );

    for attachment in &attachments {
        progress.inc(1);

        if let Err(e) = validate_file_name(&attachment.file_name) {
            tracing::warn!("Skipping caption of message {}: {}", attachment.message_id, e);
            state.record_skipped();
            continue;
        }

        let path = get_caption_path(config, &folder, &attachment.file_name);
        if let Some(parent) = path.parent() {
            ensure_dir(parent)?;
        }

        tokio::fs::write(&path, attachment.caption.as_bytes()).await?;
        state.record_caption();
        tracing::debug!("Wrote caption: {}", path.display());
    }

    progress.finish_and_clear();
    Ok(())
}
