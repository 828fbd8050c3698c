//! Internal guideline records (policies and procedures).

use serde::{Deserialize, Serialize};

use opsdesk_core::filter::Searchable;
use opsdesk_core::types::{DateOnly, RecordId, Timestamp};

/// A record from the `/guidelines` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guideline {
    pub id: RecordId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub effective_on: Option<DateOnly>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

impl Searchable for Guideline {
    fn haystacks(&self) -> Vec<&str> {
        vec![&self.title, &self.body]
    }

    fn facet(&self, name: &str) -> Option<&str> {
        match name {
            "category" => Some(&self.category),
            "status" => Some(&self.status),
            _ => None,
        }
    }
}
