use session_store::{default_session_path, SessionStore};
use std::env;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const API_URL_ENV_VAR: &str = "ADMIN_API_URL";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid API base URL: {url}. Must start with http:// or https://")]
    InvalidBaseUrl { url: String },
}

/// Where the console talks to and where it keeps its session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub api_base_url: String,
    pub session_file: PathBuf,
}

impl ConsoleConfig {
    /// Explicit values win, then `ADMIN_API_URL` / `ADMIN_SESSION_FILE`,
    /// then the defaults.
    pub fn new(
        api_base_url: Option<String>,
        session_file: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let url = api_base_url
            .filter(|u| !u.trim().is_empty())
            .or_else(|| env::var(API_URL_ENV_VAR).ok().filter(|u| !u.trim().is_empty()))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let url = url.trim();

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::InvalidBaseUrl {
                url: url.to_string(),
            });
        }

        Ok(Self {
            api_base_url: url.trim_end_matches('/').to_string(),
            session_file: session_file.unwrap_or_else(default_session_path),
        })
    }

    pub fn session_store(&self) -> SessionStore {
        SessionStore::new(self.session_file.clone())
    }
}
