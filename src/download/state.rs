//! Download state tracking.

use std::path::PathBuf;

/// Per-conversation download state.
#[derive(Debug, Default)]
pub struct DownloadState {
    pub conversation_name: Option<String>,
    pub folder: Option<PathBuf>,

    // Statistics
    pub downloaded: u64,
    pub bytes: u64,
    pub captions_written: u64,
    pub skipped: u64,
}

impl DownloadState {
    /// Create a new download state for a conversation.
    pub fn new(conversation_name: String, folder: PathBuf) -> Self {
        Self {
            conversation_name: Some(conversation_name),
            folder: Some(folder),
            ..Default::default()
        }
    }

    /// Record a finished download of `size` bytes.
    pub fn record_download(&mut self, size: u64) {
        self.downloaded += 1;
        self.bytes += size;
    }

    /// Record a written caption file.
    pub fn record_caption(&mut self) {
        self.captions_written += 1;
    }

    /// Record an attachment that was not written.
    pub fn record_skipped(&mut self) {
        self.skipped += 1;
    }
}

/// Statistics across all conversations.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GlobalState {
    pub conversations_processed: u64,
    pub downloaded: u64,
    pub bytes: u64,
    pub captions_written: u64,
    pub skipped: u64,
}

impl GlobalState {
    /// Add statistics from a conversation's download state.
    pub fn add_conversation_stats(&mut self, state: &DownloadState) {
        self.conversations_processed += 1;
        self.downloaded += state.downloaded;
        self.bytes += state.bytes;
        self.captions_written += state.captions_written;
        self.skipped += state.skipped;
    }
}
