//! Configuration structures and loading logic.

use crate::config::modes::TextLocation;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub telegram: TelegramConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// Telegram account and session configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TelegramConfig {
    /// API id from my.telegram.org. Prompted for when absent.
    #[serde(default)]
    pub api_id: Option<i32>,

    /// API hash from my.telegram.org. Prompted for when absent.
    #[serde(default)]
    pub api_hash: Option<String>,

    /// Phone number used for the first sign-in.
    #[serde(default)]
    pub phone: Option<String>,

    /// Directory holding `api_credentials.txt` and the session file.
    /// Defaults to the directory of the running executable.
    #[serde(default)]
    pub session_directory: Option<PathBuf>,
}

/// Workflow options configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionsConfig {
    /// Base directory for conversation folders and caption files.
    #[serde(default)]
    pub output_directory: Option<PathBuf>,

    /// Where caption text files are written.
    #[serde(default)]
    pub text_location: TextLocation,

    /// Whether to write caption text files next to downloads.
    #[serde(default = "default_true")]
    pub generate_text: bool,

    /// Answer "yes" to every confirmation prompt.
    #[serde(default)]
    pub assume_yes: bool,

    /// Pause before the download confirmation, in seconds.
    #[serde(default = "default_pause_seconds")]
    pub pause_seconds: u64,

    /// Whether to show progress bars.
    #[serde(default = "default_true")]
    pub show_progress: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            output_directory: None,
            text_location: TextLocation::default(),
            generate_text: true,
            assume_yes: false,
            pause_seconds: default_pause_seconds(),
            show_progress: true,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_pause_seconds() -> u64 {
    2
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the effective output directory.
    pub fn output_directory(&self) -> PathBuf {
        self.options
            .output_directory
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }

    /// Get the effective session directory.
    pub fn session_directory(&self) -> PathBuf {
        if let Some(dir) = &self.telegram.session_directory {
            return dir.clone();
        }

        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("crawler.toml");
        fs::write(
            &path,
            r#"
[telegram]
api_id = 12345

[options]
text_location = "conversation"
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.telegram.api_id, Some(12345));
        assert!(config.telegram.api_hash.is_none());
        assert_eq!(config.options.text_location, TextLocation::Conversation);
        assert!(config.options.generate_text);
        assert!(!config.options.assume_yes);
        assert_eq!(config.options.pause_seconds, 2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = Config::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_output_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("crawler.toml");
        fs::write(
            &path,
            r#"
[options]
output_directory = "/data/exports"
assume_yes = true
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert!(config.options.assume_yes);
        assert_eq!(config.output_directory(), PathBuf::from("/data/exports"));
    }

    #[test]
    fn test_session_directory_override() {
        let mut config = Config::default();
        config.telegram.session_directory = Some(PathBuf::from("/var/lib/crawler"));
        assert_eq!(config.session_directory(), PathBuf::from("/var/lib/crawler"));
    }
}
