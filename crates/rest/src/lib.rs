//! Wire models and REST resource clients for the opsdesk backend service.
//!
//! The backend is an external collaborator: a REST API returning JSON
//! lists and records, accepting object payloads for create/update, and
//! answering delete calls by id. This crate owns the HTTP plumbing
//! ([`client::ApiClient`]), the record shapes (`models`), and the typed
//! per-resource call surfaces (`resources`).

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod resources;
