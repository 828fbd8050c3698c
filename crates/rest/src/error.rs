/// Errors from the REST client layer.
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server returned a non-2xx status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the error payload, or a generic fallback.
        message: String,
    },

    /// A request body could not be encoded.
    #[error("Failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),
}

impl RestError {
    /// The string shown in an inline error banner.
    ///
    /// Server-provided messages pass through verbatim; transport failures
    /// collapse to a generic line since their detail only helps in logs.
    pub fn user_message(&self) -> String {
        match self {
            RestError::Api { message, .. } => message.clone(),
            RestError::Request(_) => "Could not reach the server".to_string(),
            RestError::Encode(_) => "Could not prepare the request".to_string(),
        }
    }
}
