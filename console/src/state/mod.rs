//! Long-lived console state.
//!
//! DESIGN
//! ======
//! `session` is shared by every page (user, theme, sidebar); `inventory` and
//! `users` hold one page's working set each and are rebuilt when the page
//! is reopened.

pub mod inventory;
pub mod session;
pub mod users;
