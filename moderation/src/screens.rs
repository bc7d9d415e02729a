//! Screens: a list view, its action menu, and the calls behind the menu.
//!
//! Shared state sits behind short-lived `Mutex` locks that are never held
//! across an `.await`, so transitions on different rows can run
//! concurrently.

use crate::action_menu::{pending_entries, vendor_entries, ActionMenu, MenuEntry};
use crate::error::TransitionError;
use crate::lifecycle::{InFlight, Reconciliation, VendorLifecycle};
use crate::list_view::ListView;
use crate::lock;
use crate::models::{ActivationState, ApprovalOutcome, PendingProfile, Row, VendorProfile};
use crate::notify::{Notice, Notifier};
use crate::repository::{DirectoryRepository, PendingApprovalRepository, VendorRepository};
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

pub const NO_VENDORS: &str = "No Vendors Found";
pub const NO_PENDING: &str = "No vendor profile found for approval";
pub const NO_USERS: &str = "No Users Found";
pub const NO_PROPERTIES: &str = "No Properties Found";

/// Approved vendors. Confirmed transitions are reconciled locally: a delete
/// drops the row, anything else patches its activation state.
pub struct VendorScreen {
    repo: Arc<dyn VendorRepository>,
    lifecycle: VendorLifecycle,
    view: Mutex<ListView<VendorProfile>>,
    menu: Mutex<ActionMenu>,
    notifier: Arc<dyn Notifier>,
}

impl VendorScreen {
    pub fn new(repo: Arc<dyn VendorRepository>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            lifecycle: VendorLifecycle::new(repo.clone()),
            repo,
            view: Mutex::new(ListView::new(NO_VENDORS)),
            menu: Mutex::new(ActionMenu::default()),
            notifier,
        }
    }

    pub async fn mount(&self) {
        lock(&self.view).begin_load();
        let result = self.repo.list().await;
        if let Err(e) = &result {
            warn!("Failed to load vendors: {}", e);
        }
        lock(&self.view).finish_load(result);
    }

    pub fn view(&self) -> ListView<VendorProfile> {
        lock(&self.view).clone()
    }

    pub fn with_view<R>(&self, read: impl FnOnce(&ListView<VendorProfile>) -> R) -> R {
        read(&lock(&self.view))
    }

    pub fn menu(&self) -> ActionMenu {
        lock(&self.menu).clone()
    }

    pub fn toggle_menu(&self, row_id: &str) {
        lock(&self.menu).toggle(row_id);
    }

    pub fn open_menu(&self, row_id: &str) {
        lock(&self.menu).open(row_id);
    }

    pub fn menu_entries(&self, row_id: &str) -> Vec<MenuEntry<ActivationState>> {
        self.with_view(|view| {
            view.find(row_id)
                .map(|vendor| vendor_entries(vendor.activation_state))
                .unwrap_or_default()
        })
    }

    pub fn lifecycle(&self) -> &VendorLifecycle {
        &self.lifecycle
    }

    /// Handles a menu selection. The menu closes before the request is
    /// issued; the list changes only if the backend confirms.
    pub async fn select(
        &self,
        row_id: &str,
        target: ActivationState,
    ) -> Result<Reconciliation, TransitionError> {
        lock(&self.menu).close();

        let result = match self.with_view(|view| view.find(row_id).cloned()) {
            Some(vendor) => self.lifecycle.request(&vendor, target).await,
            None if self.lifecycle.is_deleted(row_id) => {
                Err(TransitionError::Terminal(row_id.to_string()))
            }
            None => Err(TransitionError::UnknownRow(row_id.to_string())),
        };

        match &result {
            Ok(reconciliation) => {
                if !reconciliation.apply(&mut lock(&self.view)) {
                    debug!("Vendor {} left the list before reconciliation", row_id);
                }
            }
            Err(e) => self.notifier.notify(Notice::alert(e.to_string())),
        }
        result
    }
}

/// Profiles awaiting review. A confirmed decision reloads the whole list
/// from the backend instead of editing it locally.
pub struct PendingApprovalScreen {
    repo: Arc<dyn PendingApprovalRepository>,
    view: Mutex<ListView<PendingProfile>>,
    menu: Mutex<ActionMenu>,
    in_flight: InFlight,
    notifier: Arc<dyn Notifier>,
}

impl PendingApprovalScreen {
    pub fn new(repo: Arc<dyn PendingApprovalRepository>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            repo,
            view: Mutex::new(ListView::new(NO_PENDING)),
            menu: Mutex::new(ActionMenu::default()),
            in_flight: InFlight::default(),
            notifier,
        }
    }

    pub async fn mount(&self) {
        lock(&self.view).begin_load();
        let result = self.repo.list().await;
        if let Err(e) = &result {
            warn!("Failed to load pending approvals: {}", e);
        }
        lock(&self.view).finish_load(result);
    }

    pub fn view(&self) -> ListView<PendingProfile> {
        lock(&self.view).clone()
    }

    pub fn with_view<R>(&self, read: impl FnOnce(&ListView<PendingProfile>) -> R) -> R {
        read(&lock(&self.view))
    }

    pub fn menu(&self) -> ActionMenu {
        lock(&self.menu).clone()
    }

    pub fn toggle_menu(&self, row_id: &str) {
        lock(&self.menu).toggle(row_id);
    }

    pub fn open_menu(&self, row_id: &str) {
        lock(&self.menu).open(row_id);
    }

    pub fn menu_entries(&self) -> [MenuEntry<ApprovalOutcome>; 2] {
        pending_entries()
    }

    pub fn is_in_flight(&self, row_id: &str) -> bool {
        self.in_flight.contains(row_id)
    }

    pub async fn resolve(
        &self,
        row_id: &str,
        outcome: ApprovalOutcome,
    ) -> Result<(), TransitionError> {
        lock(&self.menu).close();

        let result = self.issue(row_id, outcome).await;
        match &result {
            Ok(()) => {
                self.notifier.notify(Notice::info(outcome.confirmation()));
                self.mount().await;
            }
            Err(e) => self.notifier.notify(Notice::alert(e.to_string())),
        }
        result
    }

    async fn issue(&self, row_id: &str, outcome: ApprovalOutcome) -> Result<(), TransitionError> {
        let target = self
            .with_view(|view| view.find(row_id).map(|p| p.approval_target().to_string()))
            .ok_or_else(|| TransitionError::UnknownRow(row_id.to_string()))?;

        let _guard = self
            .in_flight
            .try_begin(row_id)
            .ok_or_else(|| TransitionError::InFlight(row_id.to_string()))?;

        debug!("Requesting {} for pending profile {}", outcome, row_id);
        match self.repo.transition(&target, outcome).await {
            Ok(()) => {
                info!("Pending profile {} resolved: {}", row_id, outcome);
                Ok(())
            }
            Err(e) => {
                warn!("Resolving pending profile {} failed: {}", row_id, e);
                Err(e.into())
            }
        }
    }
}

/// A read-only list (users, properties).
pub struct DirectoryScreen<T> {
    repo: Arc<dyn DirectoryRepository<T>>,
    view: Mutex<ListView<T>>,
}

impl<T: Row + Clone> DirectoryScreen<T> {
    pub fn new(repo: Arc<dyn DirectoryRepository<T>>, empty_message: &'static str) -> Self {
        Self {
            repo,
            view: Mutex::new(ListView::new(empty_message)),
        }
    }

    pub async fn mount(&self) {
        lock(&self.view).begin_load();
        let result = self.repo.list().await;
        if let Err(e) = &result {
            warn!("Failed to load list: {}", e);
        }
        lock(&self.view).finish_load(result);
    }

    pub fn view(&self) -> ListView<T> {
        lock(&self.view).clone()
    }
}
