//! Daily attendance records.
//!
//! Attendance is driven by action verbs (check-in, check-out, mark-leave)
//! rather than form CRUD; the records here are what those verbs produce.

use serde::{Deserialize, Serialize};

use opsdesk_core::types::{DateOnly, RecordId, Timestamp};

/// Attendance status values.
pub const STATUS_PRESENT: &str = "present";
pub const STATUS_ON_LEAVE: &str = "on_leave";
pub const STATUS_ABSENT: &str = "absent";

/// All valid attendance statuses.
pub const VALID_STATUSES: &[&str] = &[STATUS_PRESENT, STATUS_ON_LEAVE, STATUS_ABSENT];

/// A record from the `/attendance` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: RecordId,
    #[serde(default)]
    pub employee_id: String,
    #[serde(default)]
    pub day: Option<DateOnly>,
    #[serde(default)]
    pub checked_in_at: Option<Timestamp>,
    #[serde(default)]
    pub checked_out_at: Option<Timestamp>,
    #[serde(default)]
    pub status: String,
}
