//! Output placement modes.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Where generated caption files are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextLocation {
    /// Directly in the output directory, next to the conversation folders (default).
    #[default]
    Root,
    /// Inside the conversation folder, next to the downloaded attachment.
    Conversation,
}

impl fmt::Display for TextLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextLocation::Root => write!(f, "root"),
            TextLocation::Conversation => write!(f, "conversation"),
        }
    }
}

impl FromStr for TextLocation {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "root" => Ok(TextLocation::Root),
            "conversation" => Ok(TextLocation::Conversation),
            _ => Err(format!("Unknown text location: {}", s)),
        }
    }
}
