//! Filesystem module.
//!
//! Provides:
//! - Path and directory management
//! - Filename generation and manipulation

pub mod naming;
pub mod paths;

pub use naming::{
    caption_file_name, conversation_folder_name, file_extension, sanitize_title, split_extension,
    validate_file_name, NO_MESSAGE,
};
pub use paths::{ensure_dir, get_caption_path, get_conversation_folder, get_media_path};
