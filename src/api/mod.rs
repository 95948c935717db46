//! Messaging API module.
//!
//! This module provides:
//! - The `MessagingClient` trait the workflow talks to
//! - A Telegram implementation backed by grammers
//! - Interactive sign-in
//! - Conversation and message types

pub mod auth;
pub mod client;
#[cfg(test)]
pub mod testing;
pub mod types;

use std::path::Path;

use async_trait::async_trait;

use crate::error::Result;

pub use client::TelegramClient;
pub use types::*;

/// Maximum conversations requested from the dialog list (a single page).
pub const DIALOG_LIMIT: usize = 500;

/// Number of most recent messages scanned per conversation.
pub const MESSAGE_WINDOW: usize = 1000;

/// Operations the workflow needs from a messaging platform.
#[async_trait]
pub trait MessagingClient: Send {
    /// List up to `limit` conversations. Message counts are left at zero.
    async fn list_conversations(&mut self, limit: usize) -> Result<Vec<Conversation>>;

    /// Total number of messages in a group or channel.
    async fn total_messages(&mut self, conversation: &Conversation) -> Result<u64>;

    /// Fetch the `limit` most recent messages of a conversation, newest first.
    async fn fetch_messages(
        &mut self,
        conversation: &Conversation,
        limit: usize,
        filter: MessageFilter,
    ) -> Result<Vec<Message>>;

    /// Download the media of a previously fetched message to `path`.
    async fn download_media(
        &mut self,
        conversation: &Conversation,
        message: &Message,
        path: &Path,
    ) -> Result<()>;
}
