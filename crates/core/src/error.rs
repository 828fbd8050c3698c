#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Field '{field}' has an unparseable value: '{value}'")]
    Parse { field: String, value: String },

    #[error("No sub-record with key '{0}'")]
    UnknownKey(String),
}
