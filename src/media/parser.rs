//! Attachment indexing by file extension.

use std::collections::HashMap;

use indicatif::ProgressBar;

use crate::api::Message;
use crate::media::item::Attachment;

/// Attachment counts per extension, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionTable {
    entries: Vec<(String, u64)>,
    positions: HashMap<String, usize>,
}

impl ExtensionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` attachments with `extension`.
    pub fn add(&mut self, extension: &str, count: u64) {
        match self.positions.get(extension) {
            Some(&i) => self.entries[i].1 += count,
            None => {
                self.positions.insert(extension.to_string(), self.entries.len());
                self.entries.push((extension.to_string(), count));
            }
        }
    }

    /// Record one attachment.
    pub fn record(&mut self, extension: &str) {
        self.add(extension, 1);
    }

    /// Fold another table into this one, keeping this table's order first.
    pub fn merge(&mut self, other: &ExtensionTable) {
        for (extension, count) in other.iter() {
            self.add(extension, count);
        }
    }

    pub fn count(&self, extension: &str) -> u64 {
        self.positions
            .get(extension)
            .map(|&i| self.entries[i].1)
            .unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Extensions in table order.
    pub fn extensions(&self) -> Vec<String> {
        self.entries.iter().map(|(ext, _)| ext.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(ext, count)| (ext.as_str(), *count))
    }
}

/// Count attachments per extension over a window of messages.
///
/// Messages without a named document contribute nothing.
pub fn index_extensions(messages: &[Message], progress: &ProgressBar) -> ExtensionTable {
    let mut table = ExtensionTable::new();

    for message in messages {
        if let Some(attachment) = Attachment::from_message(message) {
            table.record(&attachment.extension);
        }
        progress.inc(1);
    }

    table
}

/// Attachments in `messages` whose extension is one of `extensions`.
pub fn collect_attachments(messages: &[Message], extensions: &[String]) -> Vec<Attachment> {
    messages
        .iter()
        .filter_map(Attachment::from_message)
        .filter(|attachment| extensions.contains(&attachment.extension))
        .collect()
}
