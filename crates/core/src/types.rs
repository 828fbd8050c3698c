/// Record identifiers are opaque strings assigned by the backend service.
/// The client never generates one.
pub type RecordId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Date-only fields (expiry dates, hire dates, travel dates) carry no
/// time component on the wire.
pub type DateOnly = chrono::NaiveDate;
