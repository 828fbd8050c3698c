//! Shared HTTP client for the backend REST API.
//!
//! [`ApiClient`] wraps one [`reqwest::Client`] plus the configured base
//! URL and auth token, and exposes the verb helpers every resource uses.
//! Two failure kinds exist at this layer: request/status failures become
//! [`RestError`]; unexpected response *shapes* on list endpoints coerce to
//! an empty list with a warning, since the dominant cause is "no data
//! yet", not corruption.

use reqwest::multipart::Form;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::RestError;

/// HTTP client for the backend service.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Create a client from configuration. One underlying connection pool
    /// is shared by every resource talking through this client.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match &self.config.auth_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    // -----------------------------------------------------------------------
    // Collection verbs
    // -----------------------------------------------------------------------

    /// GET a collection.
    ///
    /// Accepts either a bare JSON array or a `{"data": [...]}` envelope.
    /// Any other body shape, including elements that do not decode as `T`,
    /// coerces to an empty list with a warning.
    pub async fn list_records<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Vec<T>, RestError> {
        self.list_records_where(path, &[]).await
    }

    /// GET a collection with query parameters.
    pub async fn list_records_where<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, RestError> {
        let mut builder = self.request(Method::GET, path);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        let body = Self::read_json(Self::check(builder.send().await?).await?).await;

        let items = match body {
            Value::Array(items) => items,
            Value::Object(mut map) => match map.remove("data") {
                Some(Value::Array(items)) => items,
                other => {
                    tracing::warn!(path, ?other, "List response had no data array");
                    Vec::new()
                }
            },
            other => {
                tracing::warn!(path, ?other, "List response was not an array");
                Vec::new()
            }
        };

        match serde_json::from_value(Value::Array(items)) {
            Ok(records) => Ok(records),
            Err(e) => {
                tracing::warn!(path, error = %e, "List elements did not match the record shape");
                Ok(Vec::new())
            }
        }
    }

    /// POST a new record to a collection, returning the server's response
    /// body (the created record, envelope and all, when the server sends
    /// one).
    pub async fn create_record(&self, path: &str, payload: &Value) -> Result<Value, RestError> {
        let response = self
            .request(Method::POST, path)
            .json(payload)
            .send()
            .await?;
        Ok(Self::read_json(Self::check(response).await?).await)
    }

    /// PUT an updated record by id.
    pub async fn update_record(
        &self,
        path: &str,
        id: &str,
        payload: &Value,
    ) -> Result<(), RestError> {
        let response = self
            .request(Method::PUT, &format!("{path}/{id}"))
            .json(payload)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// DELETE a record by id.
    pub async fn delete_record(&self, path: &str, id: &str) -> Result<(), RestError> {
        let response = self
            .request(Method::DELETE, &format!("{path}/{id}"))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// POST an action verb with no body (check-in and friends).
    pub async fn post_action(&self, path: &str) -> Result<(), RestError> {
        let response = self.request(Method::POST, path).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    /// POST a multipart form (uploads).
    pub async fn post_multipart(&self, path: &str, form: Form) -> Result<Value, RestError> {
        let response = self
            .request(Method::POST, path)
            .multipart(form)
            .send()
            .await?;
        Ok(Self::read_json(Self::check(response).await?).await)
    }

    /// GET a binary body (downloads).
    pub async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, RestError> {
        let response = self.request(Method::GET, path).send().await?;
        let response = Self::check(response).await?;
        Ok(response.bytes().await?.to_vec())
    }

    // -----------------------------------------------------------------------
    // Response handling
    // -----------------------------------------------------------------------

    /// Turn a non-2xx response into [`RestError::Api`], extracting the
    /// server's message verbatim when the body carries one.
    async fn check(response: Response) -> Result<Response, RestError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(RestError::Api {
            status: status.as_u16(),
            message: extract_error_message(status, &body),
        })
    }

    /// Read a body as JSON; a non-JSON body is a shape mismatch and reads
    /// as null.
    async fn read_json(response: Response) -> Value {
        let text = response.text().await.unwrap_or_default();
        serde_json::from_str(&text).unwrap_or(Value::Null)
    }
}

/// Pull a human-readable message out of an error payload.
///
/// The backend answers errors as `{"error": "..."}`; some deployments use
/// `message` instead. Anything else falls back to a generic line.
fn extract_error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            ["error", "message"].iter().find_map(|key| {
                v.get(key)
                    .and_then(Value::as_str)
                    .map(|s| s.to_string())
            })
        })
        .unwrap_or_else(|| format!("The server responded with status {}", status.as_u16()))
}
