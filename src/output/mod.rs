//! Output module for console output and progress.
//!
//! Provides:
//! - Colored console output
//! - Progress bars
//! - Tables
//! - Statistics reporting

pub mod console;
pub mod progress;
pub mod stats;
pub mod tables;

pub use self::console::{
    print_banner, print_config_summary, print_error, print_info, print_success, print_warning,
};
pub use progress::{create_item_bar, create_spinner};
pub use stats::{print_conversation_stats, print_global_stats};
pub use tables::{attachments_table, conversations_table, extensions_table, print_table};
