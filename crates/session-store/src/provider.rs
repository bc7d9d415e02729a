use crate::store::{SessionStore, TOKEN_KEY};
use std::env;
use tracing::{debug, warn};

/// Environment variable that overrides the session file token.
pub const TOKEN_ENV_VAR: &str = "ADMIN_TOKEN";

/// Source of the bearer credential used for admin API calls.
///
/// `None` means the operator is not logged in; callers must not fall back to
/// an anonymous request.
pub trait CredentialProvider: Send + Sync {
    fn credential(&self) -> Option<String>;
}

/// Reads the token from the session file on every call, so a `login` or
/// `logout` in another process takes effect immediately.
pub struct SessionCredentialProvider {
    store: SessionStore,
}

impl SessionCredentialProvider {
    pub fn new(store: SessionStore) -> Self {
        Self { store }
    }
}

impl CredentialProvider for SessionCredentialProvider {
    fn credential(&self) -> Option<String> {
        match self.store.load() {
            Ok(mut entries) => entries
                .remove(TOKEN_KEY)
                .filter(|token| !token.trim().is_empty()),
            Err(e) => {
                warn!("Failed to read session file: {}", e);
                None
            }
        }
    }
}

/// `ADMIN_TOKEN` first, then the session file.
pub struct EnvSessionCredentialProvider {
    session: SessionCredentialProvider,
}

impl EnvSessionCredentialProvider {
    pub fn new(store: SessionStore) -> Self {
        Self {
            session: SessionCredentialProvider::new(store),
        }
    }
}

impl CredentialProvider for EnvSessionCredentialProvider {
    fn credential(&self) -> Option<String> {
        if let Ok(token) = env::var(TOKEN_ENV_VAR) {
            if !token.trim().is_empty() {
                debug!("Using credential from {}", TOKEN_ENV_VAR);
                return Some(token);
            }
        }
        self.session.credential()
    }
}

/// Fixed credential, or none at all.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentialProvider {
    token: Option<String>,
}

impl StaticCredentialProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    pub fn anonymous() -> Self {
        Self { token: None }
    }
}

impl CredentialProvider for StaticCredentialProvider {
    fn credential(&self) -> Option<String> {
        self.token.clone()
    }
}
