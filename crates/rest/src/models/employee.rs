//! Employee records.

use serde::{Deserialize, Serialize};

use opsdesk_core::filter::Searchable;
use opsdesk_core::types::{DateOnly, RecordId, Timestamp};

/// Employment kind discriminant. A citizen carries a civil id, a
/// foreigner a residency number.
pub const KIND_CITIZEN: &str = "citizen";
pub const KIND_FOREIGNER: &str = "foreigner";

/// All valid employee kinds.
pub const VALID_KINDS: &[&str] = &[KIND_CITIZEN, KIND_FOREIGNER];

/// Employee status values.
pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_ON_LEAVE: &str = "on_leave";
pub const STATUS_TERMINATED: &str = "terminated";

/// All valid employee statuses.
pub const VALID_STATUSES: &[&str] = &[STATUS_ACTIVE, STATUS_ON_LEAVE, STATUS_TERMINATED];

/// A record from the `/employees` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: RecordId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub job_title: String,
    /// `citizen` or `foreigner`.
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub civil_id: Option<String>,
    #[serde(default)]
    pub residency_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub hired_on: Option<DateOnly>,
    #[serde(default)]
    pub monthly_salary: Option<f64>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub license_expires_on: Option<DateOnly>,
    #[serde(default)]
    pub training_completed: bool,
    #[serde(default)]
    pub medical_fitness_until: Option<DateOnly>,
    #[serde(default)]
    pub emergency_contacts: Vec<EmergencyContact>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub passes: Vec<SitePass>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

/// An emergency contact sub-record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyContact {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub relationship: String,
    #[serde(default)]
    pub phone: String,
}

/// A site access pass sub-record. Passes expire and feed the dashboard
/// alert list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SitePass {
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub expires_on: Option<DateOnly>,
}

impl Searchable for Employee {
    fn haystacks(&self) -> Vec<&str> {
        let mut fields = vec![
            self.name.as_str(),
            self.department.as_str(),
            self.job_title.as_str(),
        ];
        if let Some(civil_id) = self.civil_id.as_deref() {
            fields.push(civil_id);
        }
        if let Some(residency) = self.residency_number.as_deref() {
            fields.push(residency);
        }
        fields
    }

    fn facet(&self, name: &str) -> Option<&str> {
        match name {
            "department" => Some(&self.department),
            "status" => Some(&self.status),
            "kind" => Some(&self.kind),
            _ => None,
        }
    }
}
