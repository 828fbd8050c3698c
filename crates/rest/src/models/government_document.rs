//! Government document records (licenses, permits, registrations).

use serde::{Deserialize, Serialize};

use opsdesk_core::filter::Searchable;
use opsdesk_core::types::{DateOnly, RecordId, Timestamp};

/// A record from the `/government-documents` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GovernmentDocument {
    pub id: RecordId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub reference_number: String,
    #[serde(default)]
    pub authority: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub issued_on: Option<DateOnly>,
    #[serde(default)]
    pub expires_on: Option<DateOnly>,
    #[serde(default)]
    pub renewal_fee: Option<f64>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

impl Searchable for GovernmentDocument {
    fn haystacks(&self) -> Vec<&str> {
        vec![&self.title, &self.reference_number, &self.authority]
    }

    fn facet(&self, name: &str) -> Option<&str> {
        match name {
            "category" => Some(&self.category),
            "authority" => Some(&self.authority),
            "status" => Some(&self.status),
            _ => None,
        }
    }
}
