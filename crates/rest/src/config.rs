/// Client configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development; override via
/// environment variables (a `.env` file is honored).
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the backend API (default: `http://localhost:8080/api`).
    pub base_url: String,
    /// Optional bearer token attached to every request.
    pub auth_token: Option<String>,
}

/// Default backend base URL for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

impl ApiConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var             | Default                     |
    /// |---------------------|-----------------------------|
    /// | `OPSDESK_API_URL`   | `http://localhost:8080/api` |
    /// | `OPSDESK_API_TOKEN` | unset                       |
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let base_url =
            std::env::var("OPSDESK_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let auth_token = std::env::var("OPSDESK_API_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty());

        Self {
            base_url,
            auth_token,
        }
    }

    /// Configuration pointing at an explicit base URL, no auth.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth_token: None,
        }
    }
}
