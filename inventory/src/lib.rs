//! Server inventory domain model and derivation helpers for rackdesk.
//!
//! This crate is UI-framework agnostic: it owns the record types, the list
//! query pipeline, validation rules, seed data, and the import/export plans,
//! so the console crate (and anything that renders it) can consume them
//! directly.

pub mod catalog;
pub mod facet;
pub mod query;
pub mod record;
pub mod seed;
pub mod stats;
pub mod store;
pub mod transfer;
pub mod users;
pub mod validate;

pub use facet::{Facet, FacetOption, FilterState, facet_options};
pub use query::{ListQuery, ListView, PageRange, PageState, SortDirection, SortState, page_window};
pub use record::{ServerDraft, ServerField, ServerId, ServerRecord, ServerStatus, format_timestamp};
pub use store::{ServerStore, StoreError};
pub use validate::FieldErrors;
