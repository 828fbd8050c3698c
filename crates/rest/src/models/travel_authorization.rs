//! Travel authorization records.

use serde::{Deserialize, Serialize};

use opsdesk_core::filter::Searchable;
use opsdesk_core::types::{DateOnly, RecordId, Timestamp};

/// A record from the `/travel-authorizations` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelAuthorization {
    pub id: RecordId,
    /// The travel request this authorization decides.
    #[serde(default)]
    pub request_id: String,
    #[serde(default)]
    pub approver: String,
    #[serde(default)]
    pub decided_on: Option<DateOnly>,
    #[serde(default)]
    pub expires_on: Option<DateOnly>,
    #[serde(default)]
    pub remarks: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

impl Searchable for TravelAuthorization {
    fn haystacks(&self) -> Vec<&str> {
        vec![&self.request_id, &self.approver, &self.remarks]
    }

    fn facet(&self, name: &str) -> Option<&str> {
        match name {
            "status" => Some(&self.status),
            "approver" => Some(&self.approver),
            _ => None,
        }
    }
}
