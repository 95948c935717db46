//! Plain-text tables for conversations, extensions and attachments.

use console::{measure_text_width, pad_str, style, Alignment};

use crate::api::Conversation;
use crate::media::{Attachment, ExtensionTable};

/// A column header and its alignment.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub header: &'static str,
    pub align: Alignment,
}

const fn left(header: &'static str) -> Column {
    Column {
        header,
        align: Alignment::Left,
    }
}

const fn right(header: &'static str) -> Column {
    Column {
        header,
        align: Alignment::Right,
    }
}

/// Render rows under headers, separated by two spaces.
pub fn render_table(columns: &[Column], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| measure_text_width(cell))
                .chain(std::iter::once(measure_text_width(column.header)))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let format_line = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(columns.iter().zip(&widths))
            .map(|(cell, (column, &width))| pad_str(cell, width, column.align, None).into_owned())
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_line(columns.iter().map(|c| c.header).collect()));
    lines.push(
        widths
            .iter()
            .map(|&w| "-".repeat(w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    for row in rows {
        lines.push(format_line(row.iter().map(String::as_str).collect()));
    }

    lines.join("\n")
}

/// Collapse line breaks so a cell stays on one line.
fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Table of conversations: index, name, total messages.
pub fn conversations_table(conversations: &[Conversation]) -> String {
    let rows: Vec<Vec<String>> = conversations
        .iter()
        .enumerate()
        .map(|(i, c)| {
            vec![
                (i + 1).to_string(),
                single_line(c.display_name()),
                c.total_messages.to_string(),
            ]
        })
        .collect();

    render_table(
        &[right("INDEX"), left("NAME"), right("TOTAL MESSAGES")],
        &rows,
    )
}

/// Table of extensions: index, extension, total attachments.
pub fn extensions_table(table: &ExtensionTable) -> String {
    let rows: Vec<Vec<String>> = table
        .iter()
        .enumerate()
        .map(|(i, (ext, count))| vec![(i + 1).to_string(), ext.to_string(), count.to_string()])
        .collect();

    render_table(
        &[right("INDEX"), left("EXTENSION"), right("TOTAL ATTACHMENTS")],
        &rows,
    )
}

/// Table of attachments: file name, message text, size.
pub fn attachments_table(attachments: &[Attachment]) -> String {
    let rows: Vec<Vec<String>> = attachments
        .iter()
        .map(|a| {
            vec![
                a.file_name.clone(),
                single_line(a.caption_or_placeholder()),
                a.size_mb(),
            ]
        })
        .collect();

    render_table(
        &[left("FILE NAME"), left("MESSAGE"), right("SIZE (MB)")],
        &rows,
    )
}

/// Print a table with a bold title line.
pub fn print_table(title: &str, table: &str) {
    println!();
    println!("{}", style(title).bold());
    println!("{}", table);
    println!();
}
