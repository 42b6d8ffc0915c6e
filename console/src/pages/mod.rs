//! Per-page controllers.
//!
//! Each page owns its form state and drives the [`crate::net::api::Backend`]
//! for the operations that would hit a server. Pages never render; a
//! front-end (or the CLI) reads their state and calls their methods.

pub mod dashboard;
pub mod import_export;
pub mod login;
pub mod server_form;
