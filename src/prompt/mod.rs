//! Interactive prompts.
//!
//! Provides:
//! - Line input with validation and yes/no confirmation
//! - One / many / all table selection

pub mod input;
pub mod selection;

pub use input::Prompter;
pub use selection::{
    choose, parse_index, parse_indices, SelectionError, SelectionMode, SelectionPrompts,
    CONVERSATION_PROMPTS, EXTENSION_PROMPTS,
};
