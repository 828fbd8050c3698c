//! Correspondence records (incoming and outgoing letters).

use serde::{Deserialize, Serialize};

use opsdesk_core::filter::Searchable;
use opsdesk_core::types::{DateOnly, RecordId, Timestamp};

pub const DIRECTION_INCOMING: &str = "incoming";
pub const DIRECTION_OUTGOING: &str = "outgoing";

/// A record from the `/correspondence` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Correspondence {
    pub id: RecordId,
    #[serde(default)]
    pub subject: String,
    /// `incoming` or `outgoing`.
    #[serde(default)]
    pub direction: String,
    #[serde(default)]
    pub counterparty: String,
    #[serde(default)]
    pub reference_number: String,
    #[serde(default)]
    pub sent_on: Option<DateOnly>,
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

impl Searchable for Correspondence {
    fn haystacks(&self) -> Vec<&str> {
        vec![&self.subject, &self.counterparty, &self.reference_number]
    }

    fn facet(&self, name: &str) -> Option<&str> {
        match name {
            "direction" => Some(&self.direction),
            "priority" => Some(&self.priority),
            "status" => Some(&self.status),
            _ => None,
        }
    }
}
