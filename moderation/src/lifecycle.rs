//! Vendor activation lifecycle.
//!
//! ```text
//! Active      -> Deactivated | Deleted
//! Deactivated -> Active      | Deleted
//! Deleted     -> (terminal)
//! ```
//!
//! Transitions are requested by the operator and confirmed by the backend.
//! The checks here are a client-side guard only; the backend may still
//! reject a request that passes them.

use crate::error::TransitionError;
use crate::list_view::ListView;
use crate::lock;
use crate::models::{ActivationState, VendorProfile};
use crate::repository::VendorRepository;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

impl ActivationState {
    pub fn allowed_targets(self) -> &'static [ActivationState] {
        match self {
            ActivationState::Active => &[ActivationState::Deactivated, ActivationState::Deleted],
            ActivationState::Deactivated => &[ActivationState::Active, ActivationState::Deleted],
            ActivationState::Deleted => &[],
        }
    }

    pub fn can_transition_to(self, target: ActivationState) -> bool {
        self.allowed_targets().contains(&target)
    }
}

/// Local edit to apply once the backend confirmed a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconciliation {
    Remove { id: String },
    Patch { id: String, state: ActivationState },
}

impl Reconciliation {
    pub fn for_target(id: &str, target: ActivationState) -> Self {
        if target.is_terminal() {
            Reconciliation::Remove { id: id.to_string() }
        } else {
            Reconciliation::Patch {
                id: id.to_string(),
                state: target,
            }
        }
    }

    /// Removes the row, or replaces only its activation state. Returns false
    /// when the row is no longer in the view.
    pub fn apply(&self, view: &mut ListView<VendorProfile>) -> bool {
        match self {
            Reconciliation::Remove { id } => view.remove(id),
            Reconciliation::Patch { id, state } => {
                view.patch(id, |vendor| vendor.activation_state = *state)
            }
        }
    }
}

/// Ids with a request outstanding.
#[derive(Debug, Default)]
pub struct InFlight {
    ids: Mutex<HashSet<String>>,
}

impl InFlight {
    /// Marks `id` busy until the returned guard is dropped. `None` when a
    /// request for `id` is already outstanding.
    pub fn try_begin(&self, id: &str) -> Option<InFlightGuard<'_>> {
        if lock(&self.ids).insert(id.to_string()) {
            Some(InFlightGuard {
                owner: self,
                id: id.to_string(),
            })
        } else {
            None
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        lock(&self.ids).contains(id)
    }

    pub fn len(&self) -> usize {
        lock(&self.ids).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug)]
pub struct InFlightGuard<'a> {
    owner: &'a InFlight,
    id: String,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        lock(&self.owner.ids).remove(&self.id);
    }
}

pub struct VendorLifecycle {
    repo: Arc<dyn VendorRepository>,
    in_flight: InFlight,
    deleted: Mutex<HashSet<String>>,
}

impl VendorLifecycle {
    pub fn new(repo: Arc<dyn VendorRepository>) -> Self {
        Self {
            repo,
            in_flight: InFlight::default(),
            deleted: Mutex::new(HashSet::new()),
        }
    }

    pub fn validate(
        &self,
        vendor: &VendorProfile,
        target: ActivationState,
    ) -> Result<(), TransitionError> {
        if self.is_deleted(&vendor.id) {
            return Err(TransitionError::Terminal(vendor.id.clone()));
        }
        if !vendor.activation_state.can_transition_to(target) {
            return Err(TransitionError::IllegalTransition {
                from: vendor.activation_state,
                to: target,
            });
        }
        Ok(())
    }

    /// Validates, issues the transition, and on confirmation returns the
    /// reconciliation to apply. The vendor is busy until this returns.
    pub async fn request(
        &self,
        vendor: &VendorProfile,
        target: ActivationState,
    ) -> Result<Reconciliation, TransitionError> {
        self.validate(vendor, target)?;

        let _guard = self
            .in_flight
            .try_begin(&vendor.id)
            .ok_or_else(|| TransitionError::InFlight(vendor.id.clone()))?;

        debug!(
            "Requesting {} -> {} for vendor {}",
            vendor.activation_state, target, vendor.id
        );
        if let Err(e) = self.repo.transition(&vendor.id, target).await {
            warn!("Status change for vendor {} failed: {}", vendor.id, e);
            return Err(e.into());
        }

        if target.is_terminal() {
            lock(&self.deleted).insert(vendor.id.clone());
        }
        info!(
            "Vendor {} changed from {} to {}",
            vendor.id, vendor.activation_state, target
        );
        Ok(Reconciliation::for_target(&vendor.id, target))
    }

    pub fn is_in_flight(&self, id: &str) -> bool {
        self.in_flight.contains(id)
    }

    /// True once a delete for `id` was confirmed in this session.
    pub fn is_deleted(&self, id: &str) -> bool {
        lock(&self.deleted).contains(id)
    }
}
