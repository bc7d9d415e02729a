//! Moderation core for the marketplace admin console.
//!
//! Vendors move through a three-state activation lifecycle owned by the
//! backend; pending vendor profiles are approved or rejected. Each screen
//! keeps a local copy of its list and reconciles it after every confirmed
//! change.

pub mod action_menu;
pub mod client;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod list_view;
pub mod models;
pub mod notify;
pub mod repository;
pub mod screens;

pub use action_menu::{ActionMenu, MenuEntry};
pub use client::AuthenticatedClient;
pub use config::{ConfigError, ConsoleConfig};
pub use error::{AdminError, TransitionError};
pub use lifecycle::{Reconciliation, VendorLifecycle};
pub use list_view::{ListRender, ListState, ListView};
pub use models::{
    ActivationState, ApprovalOutcome, PendingProfile, PropertyListing, Row, UserProfile,
    VendorProfile,
};
pub use notify::{Notice, NoticeLevel, Notifier, RecordingNotifier};
pub use repository::{
    DirectoryRepository, HttpDirectory, HttpPendingApprovalRepository, HttpVendorRepository,
    PendingApprovalRepository, VendorRepository,
};
pub use screens::{DirectoryScreen, PendingApprovalScreen, VendorScreen};

use session_store::CredentialProvider;
use std::sync::{Arc, Mutex, MutexGuard};

/// Locks `mutex`, recovering the data if a previous holder panicked.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Builds the screens over one shared [`AuthenticatedClient`].
#[derive(Clone)]
pub struct Console {
    client: Arc<AuthenticatedClient>,
    notifier: Arc<dyn Notifier>,
}

impl Console {
    pub fn new(
        config: &ConsoleConfig,
        credentials: Arc<dyn CredentialProvider>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, AdminError> {
        let client = AuthenticatedClient::from_config(config, credentials)?;
        Ok(Self {
            client: Arc::new(client),
            notifier,
        })
    }

    pub fn vendors(&self) -> VendorScreen {
        VendorScreen::new(
            Arc::new(HttpVendorRepository::new(self.client.clone())),
            self.notifier.clone(),
        )
    }

    pub fn pending_approvals(&self) -> PendingApprovalScreen {
        PendingApprovalScreen::new(
            Arc::new(HttpPendingApprovalRepository::new(self.client.clone())),
            self.notifier.clone(),
        )
    }

    pub fn users(&self) -> DirectoryScreen<UserProfile> {
        DirectoryScreen::new(
            Arc::new(HttpDirectory::users(self.client.clone())),
            screens::NO_USERS,
        )
    }

    pub fn properties(&self) -> DirectoryScreen<PropertyListing> {
        DirectoryScreen::new(
            Arc::new(HttpDirectory::properties(self.client.clone())),
            screens::NO_PROPERTIES,
        )
    }
}
