//! Data access for the admin screens. No UI state lives here.

use crate::client::AuthenticatedClient;
use crate::error::AdminError;
use crate::models::{
    ActivationState, ApprovalOutcome, PendingProfile, ProfileActivationBody, PropertyListing,
    UserProfile, VendorProfile,
};
use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::debug;

pub const VENDORS_PATH: &str = "/api/admin/vendors";
pub const VENDOR_STATUS_PATH: &str = "/api/admin/adminVandorStatus";
pub const PENDING_APPROVALS_PATH: &str = "/api/admin/pendingApprovals";
pub const APPROVE_VENDOR_PATH: &str = "/api/admin/approveVendor";
pub const USERS_PATH: &str = "/api/admin/users";
pub const PROPERTIES_PATH: &str = "/api/admin/properties";

#[async_trait]
pub trait VendorRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<VendorProfile>, AdminError>;

    async fn transition(&self, vendor_id: &str, target: ActivationState)
        -> Result<(), AdminError>;
}

#[async_trait]
pub trait PendingApprovalRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<PendingProfile>, AdminError>;

    async fn transition(&self, vendor_id: &str, outcome: ApprovalOutcome)
        -> Result<(), AdminError>;
}

/// Read-only collections (users, properties).
#[async_trait]
pub trait DirectoryRepository<T>: Send + Sync {
    async fn list(&self) -> Result<Vec<T>, AdminError>;
}

async fn fetch_list<T: DeserializeOwned>(
    client: &AuthenticatedClient,
    path: &str,
    fallback: &str,
) -> Result<Vec<T>, AdminError> {
    let envelope = client.fetch::<Vec<T>>(Method::GET, path, None).await?;
    if !envelope.success {
        return Err(AdminError::RemoteRejected(envelope.message_or(fallback)));
    }
    let rows = envelope.data.unwrap_or_default();
    debug!("Fetched {} rows from {}", rows.len(), path);
    Ok(rows)
}

async fn post_activation<S: Serialize + Send + Sync>(
    client: &AuthenticatedClient,
    path: &str,
    code: S,
    fallback: &str,
) -> Result<(), AdminError> {
    let body = serde_json::to_value(ProfileActivationBody {
        profile_activation: code,
    })
    .map_err(|e| AdminError::NetworkOrParseFailure(format!("Failed to encode request: {}", e)))?;

    let envelope = client
        .fetch::<serde_json::Value>(Method::POST, path, Some(&body))
        .await?;
    if envelope.success {
        Ok(())
    } else {
        Err(AdminError::RemoteRejected(envelope.message_or(fallback)))
    }
}

pub struct HttpVendorRepository {
    client: Arc<AuthenticatedClient>,
}

impl HttpVendorRepository {
    pub fn new(client: Arc<AuthenticatedClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl VendorRepository for HttpVendorRepository {
    async fn list(&self) -> Result<Vec<VendorProfile>, AdminError> {
        fetch_list(&self.client, VENDORS_PATH, "Failed to fetch Vendors.").await
    }

    async fn transition(
        &self,
        vendor_id: &str,
        target: ActivationState,
    ) -> Result<(), AdminError> {
        let path = format!("{}/{}", VENDOR_STATUS_PATH, vendor_id);
        post_activation(&self.client, &path, target, "Action failed.").await
    }
}

pub struct HttpPendingApprovalRepository {
    client: Arc<AuthenticatedClient>,
}

impl HttpPendingApprovalRepository {
    pub fn new(client: Arc<AuthenticatedClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PendingApprovalRepository for HttpPendingApprovalRepository {
    async fn list(&self) -> Result<Vec<PendingProfile>, AdminError> {
        fetch_list(
            &self.client,
            PENDING_APPROVALS_PATH,
            "Failed to fetch ApproveVendorProfile.",
        )
        .await
    }

    async fn transition(
        &self,
        vendor_id: &str,
        outcome: ApprovalOutcome,
    ) -> Result<(), AdminError> {
        let path = format!("{}/{}", APPROVE_VENDOR_PATH, vendor_id);
        post_activation(&self.client, &path, outcome, "Failed to perform action.").await
    }
}

/// GET-only collection at a fixed path.
pub struct HttpDirectory<T> {
    client: Arc<AuthenticatedClient>,
    path: &'static str,
    fallback: &'static str,
    _rows: PhantomData<fn() -> T>,
}

impl<T> HttpDirectory<T> {
    pub fn new(
        client: Arc<AuthenticatedClient>,
        path: &'static str,
        fallback: &'static str,
    ) -> Self {
        Self {
            client,
            path,
            fallback,
            _rows: PhantomData,
        }
    }
}

impl HttpDirectory<UserProfile> {
    pub fn users(client: Arc<AuthenticatedClient>) -> Self {
        Self::new(client, USERS_PATH, "Failed to fetch users.")
    }
}

impl HttpDirectory<PropertyListing> {
    pub fn properties(client: Arc<AuthenticatedClient>) -> Self {
        Self::new(client, PROPERTIES_PATH, "Failed to fetch properties.")
    }
}

#[async_trait]
impl<T> DirectoryRepository<T> for HttpDirectory<T>
where
    T: DeserializeOwned + Send + 'static,
{
    async fn list(&self) -> Result<Vec<T>, AdminError> {
        fetch_list(&self.client, self.path, self.fallback).await
    }
}
