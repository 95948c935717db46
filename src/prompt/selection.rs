//! One / many / all selection over a displayed table.
//!
//! Every selection point goes through [`choose`], which re-asks on any
//! malformed answer: an unknown mode letter, a non-numeric index, an index
//! outside the table, or an empty list.

use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

use thiserror::Error;

use crate::error::Result;
use crate::prompt::input::Prompter;

/// How many rows the user wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    One,
    Many,
    All,
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionMode::One => write!(f, "one"),
            SelectionMode::Many => write!(f, "many"),
            SelectionMode::All => write!(f, "all"),
        }
    }
}

impl FromStr for SelectionMode {
    type Err = SelectionError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "o" | "one" => Ok(SelectionMode::One),
            "m" | "many" | "multiple" => Ok(SelectionMode::Many),
            "a" | "all" => Ok(SelectionMode::All),
            other => Err(SelectionError::UnknownMode(other.to_string())),
        }
    }
}

/// Why an answer was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Invalid choice '{0}'. Please answer O, M or A.")]
    UnknownMode(String),

    #[error("Invalid input '{0}'. Please enter a number.")]
    NonNumeric(String),

    #[error("Invalid choice {index}. Please enter an index between 1 and {len}.")]
    OutOfRange { index: usize, len: usize },

    #[error("No index entered.")]
    Empty,
}

/// Prompt texts for one selection point.
#[derive(Debug, Clone, Copy)]
pub struct SelectionPrompts {
    pub mode: &'static str,
    pub one: &'static str,
    pub many: &'static str,
}

/// Prompts for choosing conversations.
pub const CONVERSATION_PROMPTS: SelectionPrompts = SelectionPrompts {
    mode: "Do you want to consider (O)ne chat, (M)ultiple chats, or (A)ll chats? ",
    one: "Enter the index of the channel/group you want to choose: ",
    many: "Enter the indices of the chats you want to choose (separated by ','): ",
};

/// Prompts for choosing extensions.
pub const EXTENSION_PROMPTS: SelectionPrompts = SelectionPrompts {
    mode: "Do you want to choose (O)ne extension, (M)ultiple extensions, or (A)ll extensions? ",
    one: "Enter the index of the extension you want to choose: ",
    many: "Enter the indices of the extensions you want to choose (separated by ','): ",
};

/// Parse a 1-based index into a table of `len` rows, returning a 0-based position.
pub fn parse_index(input: &str, len: usize) -> std::result::Result<usize, SelectionError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(SelectionError::Empty);
    }

    let index: usize = input
        .parse()
        .map_err(|_| SelectionError::NonNumeric(input.to_string()))?;

    if index == 0 || index > len {
        return Err(SelectionError::OutOfRange { index, len });
    }

    Ok(index - 1)
}

/// Parse a comma-separated list of 1-based indices, keeping input order.
pub fn parse_indices(input: &str, len: usize) -> std::result::Result<Vec<usize>, SelectionError> {
    if input.trim().is_empty() {
        return Err(SelectionError::Empty);
    }

    input.split(',').map(|part| parse_index(part, len)).collect()
}

/// Rows of `items` at the given 0-based positions.
pub fn pick<T: Clone>(items: &[T], positions: &[usize]) -> Vec<T> {
    positions.iter().map(|&i| items[i].clone()).collect()
}

/// Ask the user for a selection mode and indices, then return the chosen rows.
///
/// An empty table yields an empty selection without prompting.
pub fn choose<R, W, T>(
    prompter: &mut Prompter<R, W>,
    prompts: &SelectionPrompts,
    items: &[T],
) -> Result<Vec<T>>
where
    R: BufRead,
    W: Write,
    T: Clone,
{
    if items.is_empty() {
        return Ok(Vec::new());
    }

    let mode = prompter.ask_valid(prompts.mode, |s| s.parse::<SelectionMode>())?;
    tracing::debug!("Selection mode: {}", mode);

    let positions = match mode {
        SelectionMode::One => {
            vec![prompter.ask_valid(prompts.one, |s| parse_index(s, items.len()))?]
        }
        SelectionMode::Many => {
            prompter.ask_valid(prompts.many, |s| parse_indices(s, items.len()))?
        }
        SelectionMode::All => (0..items.len()).collect(),
    };

    Ok(pick(items, &positions))
}
