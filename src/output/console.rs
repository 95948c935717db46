//! Styled status lines and the startup header.

use console::{style, StyledObject};

#[derive(Debug, Clone, Copy)]
enum Status {
    Info,
    Success,
    Warning,
    Error,
}

impl Status {
    fn label(self) -> StyledObject<&'static str> {
        match self {
            Status::Info => style("INFO").cyan(),
            Status::Success => style("OK").green(),
            Status::Warning => style("WARN").yellow(),
            Status::Error => style("ERROR").red(),
        }
        .bold()
    }
}

fn status_line(status: Status, message: &str) -> String {
    format!("{} {}", status.label(), message)
}

pub fn print_info(message: &str) {
    println!("{}", status_line(Status::Info, message));
}

pub fn print_success(message: &str) {
    println!("{}", status_line(Status::Success, message));
}

pub fn print_warning(message: &str) {
    println!("{}", status_line(Status::Warning, message));
}

/// Print an error line to stderr.
pub fn print_error(message: &str) {
    eprintln!("{}", status_line(Status::Error, message));
}

/// Print the program name and version above a rule.
pub fn print_banner() {
    let title = format!("telegram-crawler {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("{}", style(&title).cyan().bold());
    println!("{}", style("attachments by extension, one chat at a time").dim());
    println!("{}", style("─".repeat(title.chars().count().max(44))).dim());
}

/// Print the directories and caption placement in effect for this run.
pub fn print_config_summary(output_dir: &str, session_dir: &str, text_location: &str) {
    let rows = [
        ("Output", output_dir),
        ("Session", session_dir),
        ("Captions", text_location),
    ];

    println!();
    for (label, value) in rows {
        println!("  {:<9} {}", style(format!("{}:", label)).bold(), value);
    }
    println!();
}
