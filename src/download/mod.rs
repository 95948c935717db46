//! Download module for attachment materialization.
//!
//! This module provides:
//! - Download state tracking
//! - Attachment downloading per extension
//! - Caption text file generation

pub mod captions;
pub mod media;
pub mod state;

pub use captions::write_captions;
pub use media::download_extension;
pub use state::{DownloadState, GlobalState};
