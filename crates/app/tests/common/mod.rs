//! In-process mock of the backend REST API.
//!
//! Serves the conventional collection verbs over an in-memory store so
//! integration tests exercise the real client stack end to end: GET list
//! (with exact-match query filtering), POST create (server-assigned ids),
//! PUT update, DELETE, the attendance action verbs, and the attachment
//! upload/download endpoints. A few reserved resource names answer with
//! broken shapes for the empty-state tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Once};

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde_json::{json, Value};

use opsdesk_rest::client::ApiClient;
use opsdesk_rest::config::ApiConfig;

/// Resource names answering with deliberately broken list shapes.
pub const RESOURCE_NULL_BODY: &str = "broken-null";
pub const RESOURCE_OBJECT_BODY: &str = "broken-object";
pub const RESOURCE_SERVER_ERROR: &str = "broken-500";

static TRACING: Once = Once::new();

/// Install a test tracing subscriber once per process.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "opsdesk_app=debug,opsdesk_rest=debug".into()),
            )
            .with_test_writer()
            .try_init();
    });
}

#[derive(Clone, Default)]
pub struct MockState {
    /// Records per collection path.
    pub collections: Arc<Mutex<HashMap<String, Vec<Value>>>>,
    /// Raw content of uploaded attachments, by document id.
    pub blobs: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    next_id: Arc<AtomicU64>,
}

impl MockState {
    fn assign_id(&self, resource: &str) -> String {
        let n = self.next_id.fetch_add(1, Ordering::SeqCst);
        format!("{resource}-{n}")
    }

    /// Seed a record directly, bypassing HTTP.
    pub fn seed(&self, resource: &str, mut record: Value) -> String {
        let id = self.assign_id(resource);
        record["id"] = json!(id);
        self.collections
            .lock()
            .unwrap()
            .entry(resource.to_string())
            .or_default()
            .push(record);
        id
    }

    /// Snapshot of one collection.
    pub fn records(&self, resource: &str) -> Vec<Value> {
        self.collections
            .lock()
            .unwrap()
            .get(resource)
            .cloned()
            .unwrap_or_default()
    }
}

pub struct MockApi {
    pub base_url: String,
    pub state: MockState,
}

impl MockApi {
    pub fn client(&self) -> ApiClient {
        ApiClient::new(ApiConfig::new(self.base_url.clone()))
    }
}

/// Bind the mock API on an ephemeral port.
pub async fn spawn() -> MockApi {
    init_tracing();

    let state = MockState::default();
    let app = Router::new()
        .route("/documents/upload", post(upload_documents))
        .route("/documents/{id}/download", get(download_document))
        .route("/employees/{id}/check-in", post(check_in))
        .route("/employees/{id}/check-out", post(check_out))
        .route("/employees/{id}/mark-leave", post(mark_leave))
        .route("/{resource}", get(list_records).post(create_record))
        .route(
            "/{resource}/{id}",
            axum::routing::put(update_record).delete(delete_record),
        )
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock listener");
    let addr = listener.local_addr().expect("mock local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve mock api");
    });

    MockApi {
        base_url: format!("http://{addr}"),
        state,
    }
}

// ---------------------------------------------------------------------------
// Collection verbs
// ---------------------------------------------------------------------------

async fn list_records(
    State(state): State<MockState>,
    Path(resource): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    match resource.as_str() {
        RESOURCE_NULL_BODY => return Json(Value::Null).into_response(),
        RESOURCE_OBJECT_BODY => return Json(json!({"unexpected": true})).into_response(),
        RESOURCE_SERVER_ERROR => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Storage backend unavailable"})),
            )
                .into_response();
        }
        _ => {}
    }

    let records: Vec<Value> = state
        .records(&resource)
        .into_iter()
        .filter(|record| {
            params.iter().all(|(key, wanted)| {
                record
                    .get(key)
                    .map(|v| match v {
                        Value::String(s) => s == wanted,
                        other => other.to_string() == *wanted,
                    })
                    .unwrap_or(false)
            })
        })
        .collect();
    Json(json!({"data": records})).into_response()
}

async fn create_record(
    State(state): State<MockState>,
    Path(resource): Path<String>,
    Json(mut payload): Json<Value>,
) -> Response {
    if !payload.is_object() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Body must be an object"})),
        )
            .into_response();
    }
    let id = state.assign_id(&resource);
    payload["id"] = json!(id);
    payload["created_at"] = json!(Utc::now().to_rfc3339());
    state
        .collections
        .lock()
        .unwrap()
        .entry(resource)
        .or_default()
        .push(payload.clone());
    (StatusCode::CREATED, Json(json!({"data": payload}))).into_response()
}

async fn update_record(
    State(state): State<MockState>,
    Path((resource, id)): Path<(String, String)>,
    Json(payload): Json<Value>,
) -> Response {
    let mut collections = state.collections.lock().unwrap();
    let records = collections.entry(resource).or_default();
    match records
        .iter_mut()
        .find(|r| r.get("id").and_then(Value::as_str) == Some(id.as_str()))
    {
        Some(record) => {
            if let (Some(target), Some(fields)) = (record.as_object_mut(), payload.as_object()) {
                for (key, value) in fields {
                    target.insert(key.clone(), value.clone());
                }
                target.insert("id".to_string(), json!(id));
                target.insert("updated_at".to_string(), json!(Utc::now().to_rfc3339()));
            }
            let snapshot = record.clone();
            Json(json!({"data": snapshot})).into_response()
        }
        None => record_not_found(&id),
    }
}

async fn delete_record(
    State(state): State<MockState>,
    Path((resource, id)): Path<(String, String)>,
) -> Response {
    let mut collections = state.collections.lock().unwrap();
    let records = collections.entry(resource).or_default();
    let before = records.len();
    records.retain(|r| r.get("id").and_then(Value::as_str) != Some(id.as_str()));
    if records.len() == before {
        return record_not_found(&id);
    }
    Json(json!({"data": null})).into_response()
}

fn record_not_found(id: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"error": format!("Record {id} not found")})),
    )
        .into_response()
}

// ---------------------------------------------------------------------------
// Attendance action verbs
// ---------------------------------------------------------------------------

fn push_attendance(state: &MockState, employee_id: &str, status: &str, checked_in: bool) -> Value {
    let id = state.assign_id("attendance");
    let mut record = json!({
        "id": id,
        "employee_id": employee_id,
        "day": Utc::now().date_naive().to_string(),
        "status": status,
        "checked_in_at": Value::Null,
        "checked_out_at": Value::Null,
    });
    if checked_in {
        record["checked_in_at"] = json!(Utc::now().to_rfc3339());
    }
    state
        .collections
        .lock()
        .unwrap()
        .entry("attendance".to_string())
        .or_default()
        .push(record.clone());
    record
}

async fn check_in(State(state): State<MockState>, Path(id): Path<String>) -> Response {
    let record = push_attendance(&state, &id, "present", true);
    Json(json!({"data": record})).into_response()
}

async fn check_out(State(state): State<MockState>, Path(id): Path<String>) -> Response {
    let today = Utc::now().date_naive().to_string();
    {
        let mut collections = state.collections.lock().unwrap();
        if let Some(records) = collections.get_mut("attendance") {
            if let Some(record) = records.iter_mut().find(|r| {
                r.get("employee_id").and_then(Value::as_str) == Some(id.as_str())
                    && r.get("day").and_then(Value::as_str) == Some(today.as_str())
            }) {
                record["checked_out_at"] = json!(Utc::now().to_rfc3339());
                let snapshot = record.clone();
                return Json(json!({"data": snapshot})).into_response();
            }
        }
    }
    let record = push_attendance(&state, &id, "present", false);
    Json(json!({"data": record})).into_response()
}

async fn mark_leave(State(state): State<MockState>, Path(id): Path<String>) -> Response {
    let record = push_attendance(&state, &id, "on_leave", false);
    Json(json!({"data": record})).into_response()
}

// ---------------------------------------------------------------------------
// Attachments
// ---------------------------------------------------------------------------

async fn upload_documents(State(state): State<MockState>, mut multipart: Multipart) -> Response {
    let mut metadata = json!({});
    let mut files: Vec<(String, String, Vec<u8>)> = Vec::new();

    while let Some(field) = multipart.next_field().await.unwrap_or(None) {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("metadata") => {
                let text = field.text().await.unwrap_or_default();
                metadata = serde_json::from_str(&text).unwrap_or(json!({}));
            }
            Some("files") => {
                let file_name = field.file_name().unwrap_or("unnamed").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field.bytes().await.map(|b| b.to_vec()).unwrap_or_default();
                files.push((file_name, content_type, bytes));
            }
            _ => {}
        }
    }

    if files.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "No files in upload"})),
        )
            .into_response();
    }

    let mut created = Vec::new();
    for (file_name, content_type, bytes) in files {
        let id = state.assign_id("documents");
        let mut record = metadata.clone();
        record["id"] = json!(id);
        record["file_name"] = json!(file_name);
        record["content_type"] = json!(content_type);
        record["file_size"] = json!(bytes.len());
        record["uploaded_at"] = json!(Utc::now().to_rfc3339());
        state.blobs.lock().unwrap().insert(id.clone(), bytes);
        state
            .collections
            .lock()
            .unwrap()
            .entry("documents".to_string())
            .or_default()
            .push(record.clone());
        created.push(record);
    }
    (StatusCode::CREATED, Json(json!({"data": created}))).into_response()
}

async fn download_document(State(state): State<MockState>, Path(id): Path<String>) -> Response {
    match state.blobs.lock().unwrap().get(&id) {
        Some(bytes) => bytes.clone().into_response(),
        None => record_not_found(&id),
    }
}
