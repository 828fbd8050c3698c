//! Pure domain logic for the opsdesk back-office client.
//!
//! This crate contains no I/O: every function here evaluates against
//! pre-loaded data passed in by the caller. Network fetching lives in
//! `opsdesk-rest`, screen lifecycle in `opsdesk-app`.

pub mod error;
pub mod expiry;
pub mod export;
pub mod filter;
pub mod forms;
pub mod payments;
pub mod readiness;
pub mod rollup;
pub mod subrecords;
pub mod types;
