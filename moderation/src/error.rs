use crate::models::ActivationState;
use thiserror::Error;

/// Failures of a single admin API call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdminError {
    /// No credential in the session; no request was sent.
    #[error("No token found. Please log in.")]
    Unauthenticated,

    /// The backend answered `success: false`.
    #[error("{0}")]
    RemoteRejected(String),

    #[error("{0}")]
    NetworkOrParseFailure(String),
}

/// Failures of an admin-requested status change, including the client-side
/// guards that run before any request is issued.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Cannot change vendor status from {from} to {to}")]
    IllegalTransition {
        from: ActivationState,
        to: ActivationState,
    },

    #[error("A status change for {0} is already in progress")]
    InFlight(String),

    #[error("Vendor {0} was deleted and can no longer be changed")]
    Terminal(String),

    #[error("No row with id {0}")]
    UnknownRow(String),

    #[error(transparent)]
    Admin(#[from] AdminError),
}

impl TransitionError {
    /// True when the failure happened before any network call.
    pub fn is_local(&self) -> bool {
        !matches!(
            self,
            TransitionError::Admin(AdminError::RemoteRejected(_))
                | TransitionError::Admin(AdminError::NetworkOrParseFailure(_))
        )
    }
}
