//! Application layer of the rackdesk console.
//!
//! SYSTEM CONTEXT
//! ==============
//! `inventory` owns the domain; this crate owns everything that happens
//! around it in a session: who is logged in, persisted preferences, the
//! simulated backend, and the per-page controllers a front-end drives.
//!
//! Modules:
//! - `config`: latencies and limits read from `RACKDESK_*` variables
//! - `net`: the async [`net::api::Backend`] boundary and its mock
//! - `util`: preference storage, theme, sidebar, search debounce
//! - `state`: session, inventory page and user admin state
//! - `pages`: login, server form, import/export and dashboard controllers

pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

pub use config::ConsoleConfig;
pub use net::api::{ApiError, Backend, MockBackend};
pub use net::types::{Credentials, CurrentUser};
pub use state::session::Session;
