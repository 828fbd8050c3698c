//! Facility approval records.

use serde::{Deserialize, Serialize};

use opsdesk_core::filter::Searchable;
use opsdesk_core::types::{DateOnly, RecordId, Timestamp};

/// A record from the `/facility-approvals` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacilityApproval {
    pub id: RecordId,
    #[serde(default)]
    pub facility_name: String,
    #[serde(default)]
    pub approval_type: String,
    #[serde(default)]
    pub authority: String,
    #[serde(default)]
    pub issued_on: Option<DateOnly>,
    #[serde(default)]
    pub expires_on: Option<DateOnly>,
    #[serde(default)]
    pub status: String,
    /// Secondary approvals attached to the same facility, each with its
    /// own expiry.
    #[serde(default)]
    pub other_approvals: Vec<OtherApproval>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

/// A secondary approval sub-record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtherApproval {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub expires_on: Option<DateOnly>,
}

impl Searchable for FacilityApproval {
    fn haystacks(&self) -> Vec<&str> {
        vec![&self.facility_name, &self.approval_type, &self.authority]
    }

    fn facet(&self, name: &str) -> Option<&str> {
        match name {
            "approval_type" => Some(&self.approval_type),
            "authority" => Some(&self.authority),
            "status" => Some(&self.status),
            _ => None,
        }
    }
}
