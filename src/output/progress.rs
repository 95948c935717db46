//! Progress indicators, hidden when progress display is off.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const SPINNER_TEMPLATE: &str = "{spinner:.green} {msg}";
const ITEM_TEMPLATE: &str = "{spinner:.green} {msg} [{bar:40.cyan/blue}] {pos}/{len}";

fn style_for(template: &str) -> ProgressStyle {
    ProgressStyle::with_template(template).unwrap_or_else(|_| ProgressStyle::default_bar())
}

/// Spinner for a step of unknown length.
pub fn create_spinner(message: &str, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let spinner = ProgressBar::new_spinner()
        .with_style(style_for(SPINNER_TEMPLATE))
        .with_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Bar counting `total` items.
pub fn create_item_bar(total: u64, message: &str, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    ProgressBar::new(total)
        .with_style(style_for(ITEM_TEMPLATE).progress_chars("=> "))
        .with_message(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_when_not_visible() {
        assert!(create_spinner("Fetching", false).is_hidden());
        assert!(create_item_bar(3, "Downloading", false).is_hidden());
    }

    #[test]
    fn test_templates_parse() {
        assert!(ProgressStyle::with_template(SPINNER_TEMPLATE).is_ok());
        assert!(ProgressStyle::with_template(ITEM_TEMPLATE).is_ok());
    }
}
