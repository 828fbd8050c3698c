//! Vehicle registration records.

use serde::{Deserialize, Serialize};

use opsdesk_core::filter::Searchable;
use opsdesk_core::types::{DateOnly, RecordId, Timestamp};

/// A record from the `/vehicles` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: RecordId,
    #[serde(default)]
    pub plate_number: String,
    #[serde(default)]
    pub make: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub year: Option<i64>,
    /// Employee currently assigned to this vehicle, if any. Feeds the
    /// readiness tracker's vehicle check.
    #[serde(default)]
    pub assigned_employee_id: Option<RecordId>,
    #[serde(default)]
    pub registration_expires_on: Option<DateOnly>,
    #[serde(default)]
    pub insurance_expires_on: Option<DateOnly>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

impl Searchable for Vehicle {
    fn haystacks(&self) -> Vec<&str> {
        vec![&self.plate_number, &self.make, &self.model]
    }

    fn facet(&self, name: &str) -> Option<&str> {
        match name {
            "status" => Some(&self.status),
            "make" => Some(&self.make),
            _ => None,
        }
    }
}
