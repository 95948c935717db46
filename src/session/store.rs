//! API credential and session file storage.
//!
//! Credentials are kept in plain text next to the session file. This is a
//! convenience for a personal tool, not secure secret storage.

use std::fs;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::{validate_api_hash, validate_api_id};
use crate::error::{Error, Result};
use crate::prompt::Prompter;

/// File holding the API id and API hash, one per line.
pub const CREDENTIALS_FILE: &str = "api_credentials.txt";

/// Session file checked first and created when none exists.
pub const SESSION_FILE: &str = "name.session";

/// Session file checked when the primary one is absent.
pub const SESSION_FILE_ALT: &str = "session.session";

/// Telegram application credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiCredentials {
    pub api_id: i32,
    pub api_hash: String,
}

/// Credential and session files inside one directory.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    dir: PathBuf,
}

impl CredentialStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the credentials file.
    pub fn credentials_path(&self) -> PathBuf {
        self.dir.join(CREDENTIALS_FILE)
    }

    /// Existing session file, checking the primary name then the fallback.
    pub fn find_session(&self) -> Option<PathBuf> {
        [SESSION_FILE, SESSION_FILE_ALT]
            .iter()
            .map(|name| self.dir.join(name))
            .find(|path| path.is_file())
    }

    /// Session file to open: the existing one, or the primary name.
    pub fn session_path(&self) -> PathBuf {
        self.find_session().unwrap_or_else(|| self.dir.join(SESSION_FILE))
    }

    /// Load stored credentials.
    pub fn load(&self) -> Result<ApiCredentials> {
        let path = self.credentials_path();
        let content = fs::read_to_string(&path).map_err(|e| {
            Error::Credentials(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let mut lines = content.lines();
        let api_id = validate_api_id(lines.next().unwrap_or_default())
            .map_err(|e| Error::Credentials(format!("{}: {}", path.display(), e)))?;
        let api_hash = validate_api_hash(lines.next().unwrap_or_default())
            .map_err(|e| Error::Credentials(format!("{}: {}", path.display(), e)))?;

        Ok(ApiCredentials { api_id, api_hash })
    }

    /// Persist credentials, replacing any previous file.
    pub fn save(&self, credentials: &ApiCredentials) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }

        fs::write(
            self.credentials_path(),
            format!("{}\n{}", credentials.api_id, credentials.api_hash),
        )?;
        tracing::debug!("Saved API credentials to {}", self.credentials_path().display());
        Ok(())
    }

    /// Work out which credentials to use for this run.
    ///
    /// Fully configured credentials win. Otherwise, when a session file exists the
    /// stored credentials are reused. Anything still missing is asked for and
    /// the result is saved.
    pub fn resolve<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
        api_id: Option<i32>,
        api_hash: Option<String>,
    ) -> Result<ApiCredentials> {
        if let (Some(api_id), Some(api_hash)) = (api_id, api_hash.clone()) {
            let credentials = ApiCredentials { api_id, api_hash };
            self.save(&credentials)?;
            return Ok(credentials);
        }

        if self.find_session().is_some() {
            match self.load() {
                Ok(credentials) => {
                    tracing::info!("Session file exists.");
                    return Ok(credentials);
                }
                Err(e) => {
                    tracing::warn!("Session file exists but credentials are unusable: {}", e)
                }
            }
        } else {
            tracing::info!("Session file not found. Asking for API credentials.");
        }

        let api_id = match api_id {
            Some(id) => id,
            None => prompter.ask_valid("Enter your API ID: ", validate_api_id)?,
        };
        let api_hash = match api_hash {
            Some(hash) => hash,
            None => prompter.ask_valid("Enter your API HASH: ", validate_api_hash)?,
        };

        let credentials = ApiCredentials { api_id, api_hash };
        self.save(&credentials)?;
        Ok(credentials)
    }
}
