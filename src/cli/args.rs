//! Command-line argument definitions using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{Config, TextLocation};

/// Telegram attachment crawler CLI.
#[derive(Parser, Debug)]
#[command(
    name = "telegram-crawler",
    version,
    about = "Browse Telegram conversations and download attachments by extension",
    long_about = "An interactive tool that lists your Telegram conversations, counts the \
                  attachments of the chosen ones by file extension, and downloads the \
                  extensions you pick.\n\n\
                  The caption of each downloaded attachment can be saved to a text file."
)]
pub struct Args {
    /// Path to configuration file.
    #[arg(short, long, default_value = "telegram-crawler.toml")]
    pub config: PathBuf,

    /// Telegram API id from my.telegram.org.
    #[arg(long = "api-id", env = "TELEGRAM_API_ID")]
    pub api_id: Option<i32>,

    /// Telegram API hash from my.telegram.org.
    #[arg(long = "api-hash", env = "TELEGRAM_API_HASH")]
    pub api_hash: Option<String>,

    /// Phone number used when signing in for the first time.
    #[arg(long)]
    pub phone: Option<String>,

    /// Base directory for downloads and caption files.
    #[arg(short = 'd', long = "output-directory")]
    pub output_directory: Option<PathBuf>,

    /// Directory holding the credentials and session files.
    #[arg(long = "session-directory")]
    pub session_directory: Option<PathBuf>,

    /// Where caption text files are written.
    #[arg(long, value_enum)]
    pub text_location: Option<TextLocationArg>,

    /// Answer yes to every confirmation.
    #[arg(short, long)]
    pub yes: bool,

    /// Don't write caption text files.
    #[arg(long)]
    pub no_text: bool,

    /// Seconds to wait before the download confirmation.
    #[arg(long)]
    pub pause: Option<u64>,

    /// Hide progress bars.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

/// CLI caption location argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TextLocationArg {
    /// Write captions directly into the output directory.
    Root,
    /// Write captions into the conversation folder.
    Conversation,
}

impl From<TextLocationArg> for TextLocation {
    fn from(arg: TextLocationArg) -> Self {
        match arg {
            TextLocationArg::Root => TextLocation::Root,
            TextLocationArg::Conversation => TextLocation::Conversation,
        }
    }
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        // Override account settings if provided
        if let Some(api_id) = self.api_id {
            config.telegram.api_id = Some(api_id);
        }

        if let Some(api_hash) = self.api_hash {
            config.telegram.api_hash = Some(api_hash);
        }

        if let Some(phone) = self.phone {
            config.telegram.phone = Some(phone);
        }

        if let Some(dir) = self.session_directory {
            config.telegram.session_directory = Some(dir);
        }

        // Override options if provided
        if let Some(dir) = self.output_directory {
            config.options.output_directory = Some(dir);
        }

        if let Some(location) = self.text_location {
            config.options.text_location = location.into();
        }

        if let Some(pause) = self.pause {
            config.options.pause_seconds = pause;
        }

        // Boolean flags (only override if set to non-default)
        if self.yes {
            config.options.assume_yes = true;
        }

        if self.no_text {
            config.options.generate_text = false;
        }

        if self.quiet {
            config.options.show_progress = false;
        }
    }
}
