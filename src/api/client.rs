//! Telegram client backed by grammers.

use std::collections::HashMap;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use grammers_client::types::{Chat, Media as RawMedia, Message as RawMessage};
use grammers_client::{Client, Config as ClientConfig, InitParams};
use grammers_session::Session;
use grammers_tl_types as tl;

use crate::api::auth::ensure_authorized;
use crate::api::types::*;
use crate::api::MessagingClient;
use crate::error::{Error, Result};
use crate::prompt::Prompter;
use crate::session::ApiCredentials;

/// Telegram client with the chats and messages seen during this run.
pub struct TelegramClient {
    client: Client,
    session_path: PathBuf,
    chats: HashMap<i64, Chat>,
    messages: HashMap<(i64, i32), RawMessage>,
}

impl TelegramClient {
    /// Connect using the session file at `session_path`, creating it if absent.
    pub async fn connect(credentials: &ApiCredentials, session_path: &Path) -> Result<Self> {
        let session = Session::load_file_or_create(session_path)?;

        tracing::debug!("Connecting with session {}", session_path.display());
        let client = Client::connect(ClientConfig {
            session,
            api_id: credentials.api_id,
            api_hash: credentials.api_hash.clone(),
            params: InitParams::default(),
        })
        .await
        .map_err(|e| Error::Api(format!("Failed to connect to Telegram: {}", e)))?;

        Ok(Self {
            client,
            session_path: session_path.to_path_buf(),
            chats: HashMap::new(),
            messages: HashMap::new(),
        })
    }

    /// Sign in interactively if the session is not authorized yet, then persist it.
    pub async fn sign_in<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
        phone: Option<&str>,
    ) -> Result<()> {
        if ensure_authorized(&self.client, prompter, phone).await? {
            self.save_session()?;
        }
        Ok(())
    }

    /// Write the current session to disk.
    pub fn save_session(&self) -> Result<()> {
        self.client.session().save_to_file(&self.session_path)?;
        tracing::debug!("Session saved to {}", self.session_path.display());
        Ok(())
    }

    fn chat(&self, conversation: &Conversation) -> Result<&Chat> {
        self.chats
            .get(&conversation.id)
            .ok_or(Error::ConversationNotFound(conversation.id))
    }

    fn remember(&mut self, conversation_id: i64, raw: RawMessage) -> Message {
        let message = convert_message(&raw);
        self.messages.insert((conversation_id, message.id), raw);
        message
    }
}

#[async_trait]
impl MessagingClient for TelegramClient {
    async fn list_conversations(&mut self, limit: usize) -> Result<Vec<Conversation>> {
        let mut conversations = Vec::new();
        let mut dialogs = self.client.iter_dialogs().limit(limit);

        while let Some(dialog) = dialogs
            .next()
            .await
            .map_err(|e| Error::Api(format!("Failed to list dialogs: {}", e)))?
        {
            let chat = dialog.chat().clone();
            let conversation = convert_chat(&chat);
            self.chats.insert(conversation.id, chat);
            conversations.push(conversation);
        }

        tracing::debug!("Listed {} conversations", conversations.len());
        Ok(conversations)
    }

    async fn total_messages(&mut self, conversation: &Conversation) -> Result<u64> {
        let packed = self.chat(conversation)?.pack();
        let total = self
            .client
            .iter_messages(packed)
            .total()
            .await
            .map_err(|e| {
                Error::Api(format!(
                    "Failed to count messages in {}: {}",
                    conversation.display_name(),
                    e
                ))
            })?;
        Ok(total as u64)
    }

    async fn fetch_messages(
        &mut self,
        conversation: &Conversation,
        limit: usize,
        filter: MessageFilter,
    ) -> Result<Vec<Message>> {
        let packed = self.chat(conversation)?.pack();

        let mut raw_messages = Vec::new();
        match filter {
            MessageFilter::All => {
                let mut iter = self.client.iter_messages(packed).limit(limit);
                while let Some(raw) = iter
                    .next()
                    .await
                    .map_err(|e| fetch_error(conversation, e))?
                {
                    raw_messages.push(raw);
                }
            }
            MessageFilter::Documents => {
                let mut iter = self
                    .client
                    .search_messages(packed)
                    .filter(tl::enums::MessagesFilter::InputMessagesFilterDocument)
                    .limit(limit);
                while let Some(raw) = iter
                    .next()
                    .await
                    .map_err(|e| fetch_error(conversation, e))?
                {
                    raw_messages.push(raw);
                }
            }
        }

        let messages = raw_messages
            .into_iter()
            .map(|raw| self.remember(conversation.id, raw))
            .collect::<Vec<_>>();

        tracing::debug!(
            "Fetched {} messages from {}",
            messages.len(),
            conversation.display_name()
        );
        Ok(messages)
    }

    async fn download_media(
        &mut self,
        conversation: &Conversation,
        message: &Message,
        path: &Path,
    ) -> Result<()> {
        let raw = self
            .messages
            .get(&(conversation.id, message.id))
            .ok_or_else(|| {
                Error::Download(format!(
                    "Message {} was not fetched from {}",
                    message.id,
                    conversation.display_name()
                ))
            })?;

        let downloaded = raw.download_media(path).await?;
        if !downloaded {
            return Err(Error::Download(format!("Message {} has no media", message.id)));
        }

        Ok(())
    }
}

fn fetch_error(conversation: &Conversation, err: impl std::fmt::Display) -> Error {
    Error::Api(format!(
        "Failed to fetch messages from {}: {}",
        conversation.display_name(),
        err
    ))
}

/// Map a raw chat to a conversation.
fn convert_chat(chat: &Chat) -> Conversation {
    let (kind, title) = match chat {
        Chat::User(_) => (ConversationKind::User, None),
        Chat::Group(group) => (ConversationKind::Group, Some(group.title().to_string())),
        Chat::Channel(channel) => (ConversationKind::Channel, Some(channel.title().to_string())),
    };

    Conversation {
        id: chat.id(),
        kind,
        title,
        username: chat.username().map(String::from),
        total_messages: 0,
    }
}

/// Map a raw message to a message, keeping only the fields the workflow reads.
fn convert_message(raw: &RawMessage) -> Message {
    let media = match raw.media() {
        Some(RawMedia::Document(document)) => {
            Media::Document(convert_document(document.name(), document.size()))
        }
        Some(RawMedia::Sticker(sticker)) => Media::Document(convert_document(
            sticker.document.name(),
            sticker.document.size(),
        )),
        Some(RawMedia::WebPage(_)) => Media::Web,
        _ => Media::None,
    };

    Message {
        id: raw.id(),
        text: raw.text().to_string(),
        media,
    }
}

/// Map a document's file name attribute and size. An empty name means none.
fn convert_document(name: &str, size: i64) -> Document {
    Document {
        file_name: if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        },
        size: u64::try_from(size).unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_document_keeps_name_and_size() {
        assert_eq!(
            convert_document("sticker.webp", 2048),
            Document {
                file_name: Some("sticker.webp".into()),
                size: 2048,
            }
        );
    }

    #[test]
    fn test_convert_document_without_name() {
        let document = convert_document("", 10);
        assert!(document.file_name.is_none());
        assert_eq!(document.size, 10);
    }

    #[test]
    fn test_convert_document_negative_size() {
        assert_eq!(convert_document("a.tgs", -1).size, 0);
    }
}
