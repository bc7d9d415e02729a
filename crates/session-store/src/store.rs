use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, warn};

/// Key under which the admin bearer token lives in the session file.
pub const TOKEN_KEY: &str = "token";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read session file: {message}")]
    FileReadError { message: String },

    #[error("Failed to write session file: {message}")]
    FileWriteError { message: String },

    #[error("Invalid JSON format: {message}")]
    JsonError { message: String },

    #[error("Session key not found: {key}")]
    KeyNotFound { key: String },
}

/// Client-side session storage: a flat JSON object of string entries,
/// written atomically.
#[derive(Debug, Clone)]
pub struct SessionStore {
    session_file: PathBuf,
}

impl SessionStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            session_file: path.into(),
        }
    }

    /// Session file from `ADMIN_SESSION_FILE`, else `~/.adminctl/session.json`,
    /// else `.adminctl/session.json` relative to the working directory.
    pub fn default_location() -> Self {
        Self::new(default_session_path())
    }

    pub fn path(&self) -> &Path {
        &self.session_file
    }

    pub fn load(&self) -> Result<BTreeMap<String, String>, StoreError> {
        if !self.session_file.exists() {
            debug!("Session file does not exist, returning empty session");
            return Ok(BTreeMap::new());
        }

        let content =
            fs::read_to_string(&self.session_file).map_err(|e| StoreError::FileReadError {
                message: format!("{}: {}", self.session_file.display(), e),
            })?;

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        let json_value: Value =
            serde_json::from_str(&content).map_err(|e| StoreError::JsonError {
                message: e.to_string(),
            })?;

        let mut entries = BTreeMap::new();
        if let Some(obj) = json_value.as_object() {
            for (key, value) in obj {
                match value.as_str() {
                    Some(s) => {
                        entries.insert(key.clone(), s.to_string());
                    }
                    None => warn!("Ignoring non-string session entry '{}'", key),
                }
            }
        }

        Ok(entries)
    }

    pub fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.session_file.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StoreError::FileWriteError {
                    message: format!("Failed to create directory {}: {}", parent.display(), e),
                })?;
            }
        }

        let obj: Map<String, Value> = entries
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();
        let json_string = serde_json::to_string_pretty(&Value::Object(obj)).map_err(|e| {
            StoreError::JsonError {
                message: e.to_string(),
            }
        })?;

        let parent_dir = match self.session_file.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut temp_file =
            NamedTempFile::new_in(parent_dir).map_err(|e| StoreError::FileWriteError {
                message: format!("Failed to create temp file: {}", e),
            })?;

        temp_file
            .write_all(json_string.as_bytes())
            .map_err(|e| StoreError::FileWriteError {
                message: format!("Failed to write to temp file: {}", e),
            })?;

        temp_file.flush().map_err(|e| StoreError::FileWriteError {
            message: format!("Failed to flush temp file: {}", e),
        })?;

        // 0600: the file holds a bearer credential
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            temp_file
                .as_file()
                .set_permissions(fs::Permissions::from_mode(0o600))
                .map_err(|e| StoreError::FileWriteError {
                    message: format!("Failed to set file permissions: {}", e),
                })?;
        }

        temp_file
            .persist(&self.session_file)
            .map_err(|e| StoreError::FileWriteError {
                message: format!("Failed to persist temp file: {}", e),
            })?;

        debug!("Session saved to {}", self.session_file.display());
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String, StoreError> {
        self.load()?
            .remove(key)
            .ok_or_else(|| StoreError::KeyNotFound {
                key: key.to_string(),
            })
    }

    pub fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    /// Removes `key`. Returns false when it was not present.
    pub fn remove(&self, key: &str) -> Result<bool, StoreError> {
        let mut entries = self.load()?;
        if entries.remove(key).is_none() {
            return Ok(false);
        }
        self.save(&entries)?;
        Ok(true)
    }
}

pub fn default_session_path() -> PathBuf {
    if let Ok(path) = std::env::var("ADMIN_SESSION_FILE") {
        if !path.trim().is_empty() {
            return PathBuf::from(path);
        }
    }
    dirs::home_dir()
        .map(|home| home.join(".adminctl").join("session.json"))
        .unwrap_or_else(|| PathBuf::from(".adminctl/session.json"))
}

/// Redact a credential for display
pub fn redact_value(value: &str) -> String {
    let char_count = value.chars().count();
    if char_count <= 6 {
        "***".to_string()
    } else {
        let prefix: String = value.chars().take(3).collect();
        format!("{}***", prefix)
    }
}
