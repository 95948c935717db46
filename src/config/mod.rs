//! Configuration module for the telegram-crawler.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - CLI argument merging
//! - Configuration validation

pub mod loader;
pub mod modes;
pub mod validation;

pub use loader::{Config, OptionsConfig, TelegramConfig};
pub use modes::TextLocation;
pub use validation::{validate_api_hash, validate_api_id, validate_config, validate_phone};
