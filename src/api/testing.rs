//! In-memory messaging client for tests.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::api::types::*;
use crate::api::MessagingClient;
use crate::error::{Error, Result};

/// A document message with a caption.
pub fn document(id: i32, file_name: &str, caption: &str) -> Message {
    Message {
        id,
        text: caption.to_string(),
        media: Media::Document(Document {
            file_name: Some(file_name.to_string()),
            size: 1024,
        }),
    }
}

/// A text message without media.
pub fn text(id: i32, body: &str) -> Message {
    Message {
        id,
        text: body.to_string(),
        media: Media::None,
    }
}

/// Messaging client serving fixed conversations and messages.
///
/// Downloads write a small marker file so tests can check destinations.
#[derive(Debug, Default)]
pub struct MockClient {
    conversations: Vec<Conversation>,
    counts: HashMap<i64, u64>,
    messages: HashMap<i64, Vec<Message>>,

    /// Limits passed to `list_conversations`.
    pub listed: Vec<usize>,
    /// Conversation ids passed to `total_messages`.
    pub counted: Vec<i64>,
    /// Conversation id, filter and limit of each fetch.
    pub fetches: Vec<(i64, MessageFilter, usize)>,
    /// Paths written by `download_media`.
    pub downloads: Vec<PathBuf>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a conversation with its message count and messages, newest first.
    pub fn with_conversation(
        mut self,
        conversation: Conversation,
        total_messages: u64,
        messages: Vec<Message>,
    ) -> Self {
        self.counts.insert(conversation.id, total_messages);
        self.messages.insert(conversation.id, messages);
        self.conversations.push(conversation);
        self
    }
}

#[async_trait]
impl MessagingClient for MockClient {
    async fn list_conversations(&mut self, limit: usize) -> Result<Vec<Conversation>> {
        self.listed.push(limit);
        Ok(self.conversations.iter().take(limit).cloned().collect())
    }

    async fn total_messages(&mut self, conversation: &Conversation) -> Result<u64> {
        self.counted.push(conversation.id);
        self.counts
            .get(&conversation.id)
            .copied()
            .ok_or(Error::ConversationNotFound(conversation.id))
    }

    async fn fetch_messages(
        &mut self,
        conversation: &Conversation,
        limit: usize,
        filter: MessageFilter,
    ) -> Result<Vec<Message>> {
        self.fetches.push((conversation.id, filter, limit));
        let messages = self
            .messages
            .get(&conversation.id)
            .ok_or(Error::ConversationNotFound(conversation.id))?;

        Ok(messages
            .iter()
            .filter(|m| filter == MessageFilter::All || m.document().is_some())
            .take(limit)
            .cloned()
            .collect())
    }

    async fn download_media(
        &mut self,
        _conversation: &Conversation,
        message: &Message,
        path: &Path,
    ) -> Result<()> {
        if message.document().is_none() {
            return Err(Error::Download(format!("Message {} has no media", message.id)));
        }

        std::fs::write(path, format!("media of message {}", message.id))?;
        self.downloads.push(path.to_path_buf());
        Ok(())
    }
}
