//! Attachment view of a document message.

use crate::api::{Media, Message};
use crate::fs::naming::{file_extension, NO_MESSAGE};

/// A document attachment with a file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// Id of the message carrying the attachment.
    pub message_id: i32,

    /// File name exactly as uploaded.
    pub file_name: String,

    /// Lower-cased suffix including the dot; empty when the name has none.
    pub extension: String,

    /// Size in bytes.
    pub size: u64,

    /// Caption text; empty when the message has none.
    pub caption: String,
}

impl Attachment {
    /// Build the attachment view of a message, if it carries a named document.
    pub fn from_message(message: &Message) -> Option<Self> {
        let Media::Document(document) = &message.media else {
            return None;
        };
        let file_name = document.file_name.as_ref()?;

        Some(Self {
            message_id: message.id,
            file_name: file_name.clone(),
            extension: file_extension(file_name),
            size: document.size,
            caption: message.text.clone(),
        })
    }

    /// Caption for listings, with a placeholder when there is none.
    pub fn caption_or_placeholder(&self) -> &str {
        if self.caption.is_empty() {
            NO_MESSAGE
        } else {
            &self.caption
        }
    }

    /// Size in megabytes, formatted with two decimals.
    pub fn size_mb(&self) -> String {
        format!("{:.2} MB", self.size as f64 / 1024.0 / 1024.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Document;

    fn document_message(file_name: Option<&str>, text: &str, size: u64) -> Message {
        Message {
            id: 3,
            text: text.to_string(),
            media: Media::Document(Document {
                file_name: file_name.map(String::from),
                size,
            }),
        }
    }

    #[test]
    fn test_from_message() {
        let attachment =
            Attachment::from_message(&document_message(Some("Report.PDF"), "quarterly", 2048))
                .unwrap();
        assert_eq!(attachment.file_name, "Report.PDF");
        assert_eq!(attachment.extension, ".pdf");
        assert_eq!(attachment.caption, "quarterly");
        assert_eq!(attachment.message_id, 3);
    }

    #[test]
    fn test_from_message_without_file_name() {
        assert!(Attachment::from_message(&document_message(None, "", 10)).is_none());
    }

    #[test]
    fn test_from_message_other_media() {
        for media in [Media::Web, Media::None] {
            let message = Message {
                id: 1,
                text: "link".into(),
                media,
            };
            assert!(Attachment::from_message(&message).is_none());
        }
    }

    #[test]
    fn test_caption_placeholder() {
        let attachment =
            Attachment::from_message(&document_message(Some("a.zip"), "", 0)).unwrap();
        assert_eq!(attachment.caption_or_placeholder(), "No Message");
        assert_eq!(attachment.caption, "");
    }

    #[test]
    fn test_size_mb() {
        let attachment =
            Attachment::from_message(&document_message(Some("a.zip"), "", 3 * 1024 * 1024 / 2))
                .unwrap();
        assert_eq!(attachment.size_mb(), "1.50 MB");
    }
}
