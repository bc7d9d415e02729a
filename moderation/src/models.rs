//! Wire models for the admin API.
//!
//! The backend uses the same `"0" | "1" | "2"` literals for two unrelated
//! fields: a vendor's activation state and the outcome of a pending
//! approval. They are kept as separate enums so one cannot be passed where
//! the other is expected.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Lifecycle flag of an approved vendor (`profileActivation`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivationState {
    #[serde(rename = "0")]
    Deactivated,
    #[serde(rename = "1")]
    Active,
    #[serde(rename = "2")]
    Deleted,
}

impl ActivationState {
    pub fn wire_code(self) -> &'static str {
        match self {
            ActivationState::Deactivated => "0",
            ActivationState::Active => "1",
            ActivationState::Deleted => "2",
        }
    }

    pub fn is_terminal(self) -> bool {
        self == ActivationState::Deleted
    }
}

impl fmt::Display for ActivationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivationState::Deactivated => write!(f, "Deactivated"),
            ActivationState::Active => write!(f, "Active"),
            ActivationState::Deleted => write!(f, "Deleted"),
        }
    }
}

/// Decision on a pending vendor profile (`/approveVendor` endpoint).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApprovalOutcome {
    #[serde(rename = "1")]
    Approve,
    #[serde(rename = "2")]
    Reject,
}

impl ApprovalOutcome {
    pub fn wire_code(self) -> &'static str {
        match self {
            ApprovalOutcome::Approve => "1",
            ApprovalOutcome::Reject => "2",
        }
    }

    /// Acknowledgment shown to the operator once the backend confirms.
    pub fn confirmation(self) -> &'static str {
        match self {
            ApprovalOutcome::Approve => "Vendor Approved Successfully",
            ApprovalOutcome::Reject => "Vendor Deleted Successfully",
        }
    }
}

impl fmt::Display for ApprovalOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApprovalOutcome::Approve => write!(f, "Approve"),
            ApprovalOutcome::Reject => write!(f, "Reject"),
        }
    }
}

/// Body of both status-change POSTs.
#[derive(Debug, Serialize)]
pub(crate) struct ProfileActivationBody<S: Serialize> {
    #[serde(rename = "profileActivation")]
    pub profile_activation: S,
}

/// `{ success, data?, message? }` returned by every admin endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Server message, or `fallback` when it is missing or blank.
    pub fn message_or(&self, fallback: &str) -> String {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(fallback)
            .to_string()
    }
}

/// Anything rendered as a keyed row in a list.
pub trait Row {
    fn row_id(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorProfile {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(default)]
    pub contact_number: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub profile_pic: String,
    #[serde(rename = "profileActivation")]
    pub activation_state: ActivationState,
    #[serde(default)]
    pub created_at: String,
    /// Fields this console does not interpret, kept verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl VendorProfile {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn contact(&self) -> String {
        match &self.country_code {
            Some(code) => format!("{} {}", code, self.contact_number),
            None => self.contact_number.clone(),
        }
    }
}

impl Row for VendorProfile {
    fn row_id(&self) -> &str {
        &self.id
    }
}

/// A vendor profile awaiting review. Rows are keyed by `_id`; the approval
/// call is addressed by `vandorId`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingProfile {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(default)]
    pub contact_number: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(rename = "vandorId", default, skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<String>,
    #[serde(default)]
    pub profile_pic: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl PendingProfile {
    /// Id sent to `/approveVendor/{id}`; the row id when no vendor id is set.
    pub fn approval_target(&self) -> &str {
        self.vendor_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .unwrap_or(&self.id)
    }

    pub fn contact(&self) -> String {
        match &self.country_code {
            Some(code) => format!("{} {}", code, self.contact_number),
            None => self.contact_number.clone(),
        }
    }
}

impl Row for PendingProfile {
    fn row_id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "nameprefix", default, skip_serializing_if = "Option::is_none")]
    pub name_prefix: Option<String>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(default)]
    pub contact_number: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub profile_pic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_identification_pic: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

impl UserProfile {
    pub fn display_name(&self) -> String {
        let parts = [
            self.name_prefix.as_deref().unwrap_or(""),
            self.first_name.as_str(),
            self.last_name.as_str(),
        ];
        parts
            .iter()
            .filter(|p| !p.is_empty())
            .cloned()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Row for UserProfile {
    fn row_id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorContact {
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyListing {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub status: String,
    pub vendor_details: Option<VendorContact>,
}

impl Row for PropertyListing {
    fn row_id(&self) -> &str {
        &self.id
    }
}
