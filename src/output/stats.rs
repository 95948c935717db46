//! Statistics reporting.

use console::style;

use crate::download::{DownloadState, GlobalState};

fn megabytes(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / 1024.0 / 1024.0)
}

/// Print statistics for a single conversation.
pub fn print_conversation_stats(state: &DownloadState) {
    let name = state.conversation_name.as_deref().unwrap_or("unknown");

    println!();
    println!("{}", style(format!("Statistics for {}:", name)).bold());
    if let Some(folder) = &state.folder {
        println!("  Folder:     {}", folder.display());
    }
    println!("  Downloaded: {} ({})", state.downloaded, megabytes(state.bytes));
    println!("  Captions:   {}", state.captions_written);
    if state.skipped > 0 {
        println!("  Skipped:    {}", style(state.skipped).yellow());
    }
}

/// Print global statistics across all conversations.
pub fn print_global_stats(state: &GlobalState) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Global Statistics:").bold());
    println!("  Conversations processed: {}", state.conversations_processed);
    println!(
        "  Downloaded: {} ({})",
        style(state.downloaded).green(),
        megabytes(state.bytes)
    );
    println!("  Captions:   {}", state.captions_written);
    if state.skipped > 0 {
        println!("  Skipped:    {}", style(state.skipped).yellow());
    }
    println!("{}", style("═".repeat(50)).dim());
}
