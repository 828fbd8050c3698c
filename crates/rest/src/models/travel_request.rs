//! Travel request records.

use serde::{Deserialize, Serialize};

use opsdesk_core::filter::Searchable;
use opsdesk_core::types::{DateOnly, RecordId, Timestamp};

/// Travel request status values.
pub const STATUS_PENDING: &str = "pending";
pub const STATUS_APPROVED: &str = "approved";
pub const STATUS_REJECTED: &str = "rejected";

/// A record from the `/travel-requests` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelRequest {
    pub id: RecordId,
    #[serde(default)]
    pub employee_id: String,
    #[serde(default)]
    pub employee_name: String,
    #[serde(default)]
    pub destination_country: String,
    #[serde(default)]
    pub destination_city: String,
    #[serde(default)]
    pub purpose: String,
    #[serde(default)]
    pub starts_on: Option<DateOnly>,
    #[serde(default)]
    pub ends_on: Option<DateOnly>,
    #[serde(default)]
    pub estimated_cost: Option<f64>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub itinerary: Vec<ItineraryLeg>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

/// One leg of a trip's itinerary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItineraryLeg {
    #[serde(default)]
    pub from_location: String,
    #[serde(default)]
    pub to_location: String,
    #[serde(default)]
    pub departs_on: Option<DateOnly>,
    #[serde(default)]
    pub mode: String,
}

impl Searchable for TravelRequest {
    fn haystacks(&self) -> Vec<&str> {
        vec![
            &self.employee_name,
            &self.destination_country,
            &self.destination_city,
            &self.purpose,
        ]
    }

    fn facet(&self, name: &str) -> Option<&str> {
        match name {
            "destination_country" => Some(&self.destination_country),
            "status" => Some(&self.status),
            _ => None,
        }
    }
}
