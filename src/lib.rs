//! Telegram Crawler - browse Telegram conversations and download attachments by extension
//!
//! This library drives an interactive crawl over a Telegram account.
//!
//! # Features
//!
//! - List conversations with their message counts
//! - Count attachments of the chosen conversations by file extension
//! - Download the chosen extensions into one folder per conversation
//! - Save each attachment's caption to a text file
//! - Reuse a saved login session between runs
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use telegram_crawler::{Config, CredentialStore, Prompter, TelegramClient, Workflow};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(Path::new("telegram-crawler.toml"))?;
//!     let mut prompter = Prompter::stdio();
//!
//!     let store = CredentialStore::new(config.session_directory());
//!     let credentials = store.resolve(&mut prompter, None, None)?;
//!     let mut client = TelegramClient::connect(&credentials, &store.session_path()).await?;
//!     client.sign_in(&mut prompter, None).await?;
//!
//!     let outcome = Workflow::new(&mut client, &mut prompter, &config).run().await?;
//!     println!("{:?}", outcome);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod media;
pub mod output;
pub mod prompt;
pub mod session;
pub mod workflow;

// Re-exports for convenience
pub use api::{Conversation, MessagingClient, TelegramClient};
pub use config::{Config, TextLocation};
pub use download::{download_extension, write_captions, DownloadState, GlobalState};
pub use error::{Error, Result};
pub use media::{Attachment, ExtensionTable};
pub use prompt::Prompter;
pub use session::{ApiCredentials, CredentialStore};
pub use workflow::{Outcome, Workflow};
