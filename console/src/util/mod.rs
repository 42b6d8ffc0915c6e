//! Session-level helpers that are not tied to one page.

pub mod debounce;
pub mod preferences;
pub mod sidebar;
pub mod theme;
