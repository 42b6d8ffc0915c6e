//! Backend boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the async [`api::Backend`] trait every page awaits, plus the
//! in-process mock; `types` holds the payloads crossing that boundary.

pub mod api;
pub mod types;
