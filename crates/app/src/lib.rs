//! Screen-level state machinery for the opsdesk back-office client.
//!
//! Every admin screen is an instance of the same shape: a list store, a
//! form buffer, dialog flags, and a submit/delete lifecycle against one
//! REST collection. [`controller::ResourceController`] implements that
//! shape once; the `modules` directory declares each screen's fields.
//! Rendering is left to whatever front end binds to this state.

pub mod attendance;
pub mod banner;
pub mod controller;
pub mod dashboard;
pub mod directory;
pub mod documents;
pub mod modules;
