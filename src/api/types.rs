//! Conversation and message types exposed by a messaging client.

/// Display name used when a conversation has neither title nor username.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Kind of conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationKind {
    User,
    Group,
    Channel,
}

impl ConversationKind {
    /// Whether message count metadata is available for this kind.
    pub fn has_message_count(&self) -> bool {
        matches!(self, ConversationKind::Group | ConversationKind::Channel)
    }
}

/// A chat, group or channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    pub id: i64,
    pub kind: ConversationKind,
    pub title: Option<String>,
    pub username: Option<String>,
    /// Total messages, zero unless the conversation is a group or channel.
    pub total_messages: u64,
}

impl Conversation {
    /// Title if present, else username, else "Unknown".
    pub fn display_name(&self) -> &str {
        self.title
            .as_deref()
            .filter(|t| !t.is_empty())
            .or_else(|| self.username.as_deref().filter(|u| !u.is_empty()))
            .unwrap_or(UNKNOWN_NAME)
    }
}

/// Which messages a fetch should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageFilter {
    All,
    Documents,
}

/// A document payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// File name attribute, if the document carries one.
    pub file_name: Option<String>,
    /// Size in bytes.
    pub size: u64,
}

/// Media attached to a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Media {
    Document(Document),
    Web,
    None,
}

/// A message from a conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: i32,
    /// Caption or body text; empty when the message has none.
    pub text: String,
    pub media: Media,
}

impl Message {
    /// The document payload, if any.
    pub fn document(&self) -> Option<&Document> {
        match &self.media {
            Media::Document(document) => Some(document),
            Media::Web | Media::None => None,
        }
    }
}
