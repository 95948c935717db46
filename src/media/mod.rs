//! Media module for attachment indexing.

pub mod item;
pub mod parser;

pub use item::Attachment;
pub use parser::{collect_attachments, index_extensions, ExtensionTable};
