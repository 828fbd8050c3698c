//! The generic CRUD-screen controller.
//!
//! One [`ResourceController`] owns the full lifecycle of one screen: load
//! the collection, buffer edits in a schema-driven draft, submit via POST
//! or PUT, delete behind an explicit confirmation step, and derive
//! filtered views and CSV exports from the loaded list. Every mutation is
//! followed by a full refetch; the list store is never patched in place.
//!
//! All async operations here are terminal error boundaries: failures are
//! caught, logged, and turned into banner state. Nothing is re-thrown.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use opsdesk_core::export;
use opsdesk_core::filter::{narrow, Criteria, Searchable};
use opsdesk_core::forms::{Draft, FormSchema};
use opsdesk_core::types::RecordId;
use opsdesk_rest::client::ApiClient;

use crate::banner::Banner;

/// The static definition of one admin screen.
pub trait ModuleDef {
    /// The record shape of this screen's collection.
    type Record: Searchable + Clone + Serialize + DeserializeOwned + Send + Sync;

    /// Collection path under the API base URL.
    const RESOURCE: &'static str;

    /// Singular human name, used in banner messages.
    const TITLE: &'static str;

    /// The screen's form definition.
    fn schema() -> &'static FormSchema;

    /// Server-assigned id of a record.
    fn record_id(record: &Self::Record) -> &RecordId;
}

/// List, form, and dialog state for one screen instance.
///
/// State is local to the screen's lifetime; nothing survives a reload.
pub struct ResourceController<M: ModuleDef> {
    client: ApiClient,
    /// The most recent successful fetch of the collection.
    pub records: Vec<M::Record>,
    /// The draft backing the create/edit dialog.
    pub draft: Draft,
    /// Id of the record being edited, or `None` while creating.
    pub editing: Option<RecordId>,
    pub dialog_open: bool,
    /// Id awaiting delete confirmation.
    pub pending_delete: Option<RecordId>,
    /// Whether a network call is in flight.
    pub loading: bool,
    pub banner: Banner,
}

impl<M: ModuleDef> ResourceController<M> {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            records: Vec::new(),
            draft: M::schema().empty_draft(),
            editing: None,
            dialog_open: false,
            pending_delete: None,
            loading: false,
            banner: Banner::None,
        }
    }

    // -----------------------------------------------------------------------
    // Fetching
    // -----------------------------------------------------------------------

    /// Fetch the collection, replacing the list store wholesale.
    ///
    /// On failure the list resets to empty so a stale or partial list is
    /// never rendered against.
    pub async fn load(&mut self) {
        self.loading = true;
        match self.client.list_records::<M::Record>(M::RESOURCE).await {
            Ok(records) => {
                self.records = records;
            }
            Err(e) => {
                tracing::error!(resource = M::RESOURCE, error = %e, "List fetch failed");
                self.records = Vec::new();
                self.banner = Banner::error(e.user_message());
            }
        }
        self.loading = false;
    }

    // -----------------------------------------------------------------------
    // Dialog lifecycle
    // -----------------------------------------------------------------------

    /// Open the dialog with a fresh draft for a new record.
    pub fn open_create(&mut self) {
        self.draft = M::schema().empty_draft();
        self.editing = None;
        self.dialog_open = true;
        self.banner.clear();
    }

    /// Open the dialog pre-filled from an existing record.
    pub fn open_edit(&mut self, record: &M::Record) {
        let value = serde_json::to_value(record).unwrap_or(Value::Null);
        self.draft = M::schema().draft_from_record(&value);
        self.editing = Some(M::record_id(record).clone());
        self.dialog_open = true;
        self.banner.clear();
    }

    /// Close the dialog, discarding the draft.
    pub fn close_dialog(&mut self) {
        self.dialog_open = false;
        self.editing = None;
        self.draft = M::schema().empty_draft();
    }

    /// Set one draft field from an input widget.
    pub fn set_field(&mut self, name: &str, value: Value) {
        self.draft.insert(name.to_string(), value);
    }

    /// Read one draft field back.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.draft.get(name)
    }

    // -----------------------------------------------------------------------
    // Submission
    // -----------------------------------------------------------------------

    /// Validate the draft and send it to the server.
    ///
    /// Create or update is chosen by whether an edit is in progress. On
    /// success the dialog closes and the list refetches; on failure the
    /// dialog stays open with the error shown so the user can correct
    /// input without re-entering it.
    pub async fn submit(&mut self) {
        let payload = match M::schema().payload(&self.draft) {
            Ok(payload) => payload,
            Err(e) => {
                self.banner = Banner::error(e.to_string());
                return;
            }
        };

        self.loading = true;
        let result = match &self.editing {
            Some(id) => self.client.update_record(M::RESOURCE, id, &payload).await,
            None => self
                .client
                .create_record(M::RESOURCE, &payload)
                .await
                .map(|_| ()),
        };
        self.loading = false;

        match result {
            Ok(()) => {
                tracing::info!(resource = M::RESOURCE, editing = ?self.editing, "Record saved");
                self.banner = Banner::success(format!("{} saved", M::TITLE));
                self.close_dialog();
                self.load().await;
            }
            Err(e) => {
                tracing::error!(resource = M::RESOURCE, error = %e, "Save failed");
                self.banner = Banner::error(e.user_message());
            }
        }
    }

    // -----------------------------------------------------------------------
    // Deletion
    // -----------------------------------------------------------------------

    /// First step of the destructive flow: remember the id and wait for
    /// an explicit confirmation. No network call happens here.
    pub fn request_delete(&mut self, id: impl Into<RecordId>) {
        self.pending_delete = Some(id.into());
    }

    /// Abandon a pending delete.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Second step: DELETE, refetch, and clear the pending id regardless
    /// of outcome so the confirmation dialog can never get stuck.
    pub async fn confirm_delete(&mut self) {
        let Some(id) = self.pending_delete.take() else {
            return;
        };
        match self.client.delete_record(M::RESOURCE, &id).await {
            Ok(()) => {
                tracing::info!(resource = M::RESOURCE, id = %id, "Record deleted");
                self.banner = Banner::success(format!("{} deleted", M::TITLE));
            }
            Err(e) => {
                tracing::error!(resource = M::RESOURCE, id = %id, error = %e, "Delete failed");
                self.banner = Banner::error(e.user_message());
            }
        }
        self.load().await;
    }

    // -----------------------------------------------------------------------
    // Derived views
    // -----------------------------------------------------------------------

    /// The records currently visible under the given filter criteria.
    pub fn visible(&self, criteria: &Criteria) -> Vec<&M::Record> {
        narrow(&self.records, criteria)
    }

    /// Render the visible records as a CSV document, one column per
    /// schema field, headed by the field labels.
    pub fn export_csv(&self, criteria: &Criteria) -> String {
        let schema = M::schema();
        let header = schema.labels();
        let rows: Vec<Vec<String>> = self
            .visible(criteria)
            .into_iter()
            .map(|record| {
                let value = serde_json::to_value(record).unwrap_or(Value::Null);
                schema
                    .fields
                    .iter()
                    .map(|field| export::display_value(value.get(field.name)))
                    .collect()
            })
            .collect();
        export::csv_document(&header, &rows)
    }
}
