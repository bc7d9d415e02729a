//! Client-side session storage for the admin console.
//!
//! The bearer token lives in a small JSON file under the fixed key
//! [`TOKEN_KEY`]. Data-access code never reads it directly; it receives a
//! [`CredentialProvider`] at construction time.

pub mod provider;
pub mod store;

pub use provider::{
    CredentialProvider, EnvSessionCredentialProvider, SessionCredentialProvider,
    StaticCredentialProvider, TOKEN_ENV_VAR,
};
pub use store::{default_session_path, redact_value, SessionStore, StoreError, TOKEN_KEY};
