use super::*;
use crate::util::preferences::MemoryPreferences;

const WIDE: u32 = 1440;
const NARROW: u32 = 768;

// =============================================================================
// Load
// =============================================================================

#[test]
fn unsaved_state_collapses_only_on_narrow_viewports() {
    let store = MemoryPreferences::new();
    assert!(SidebarState::load(&store, NARROW).collapsed());
    assert!(!SidebarState::load(&store, WIDE).collapsed());
    assert!(!SidebarState::load(&store, DESKTOP_MIN_WIDTH).collapsed());
}

#[test]
fn saved_flag_wins_over_viewport() {
    let mut store = MemoryPreferences::new();
    store.set(SIDEBAR_KEY, "false").unwrap();
    assert!(!SidebarState::load(&store, NARROW).collapsed());
}

// =============================================================================
// Toggle
// =============================================================================

#[test]
fn wide_toggle_flips_and_persists() {
    let mut store = MemoryPreferences::new();
    let mut sidebar = SidebarState::load(&store, WIDE);
    sidebar.toggle(&mut store, WIDE).unwrap();
    assert!(sidebar.collapsed());
    assert_eq!(store.get(SIDEBAR_KEY).as_deref(), Some("true"));
}

#[test]
fn narrow_toggle_opens_overlay_without_persisting() {
    let mut store = MemoryPreferences::new();
    let mut sidebar = SidebarState::load(&store, NARROW);
    sidebar.toggle(&mut store, NARROW).unwrap();
    assert!(sidebar.mobile_open());
    assert!(sidebar.collapsed());
    assert_eq!(store.get(SIDEBAR_KEY), None);
    sidebar.toggle(&mut store, NARROW).unwrap();
    assert!(!sidebar.mobile_open());
}

#[test]
fn widening_closes_overlay() {
    let mut store = MemoryPreferences::new();
    let mut sidebar = SidebarState::load(&store, NARROW);
    sidebar.toggle(&mut store, NARROW).unwrap();
    sidebar.resized(900);
    assert!(sidebar.mobile_open());
    sidebar.resized(WIDE);
    assert!(!sidebar.mobile_open());
}

// =============================================================================
// Navigation
// =============================================================================

#[test]
fn user_management_is_admin_only() {
    let labels = |role| visible_items(role).map(|item| item.label).collect::<Vec<_>>();
    assert!(labels(UserRole::Admin).contains(&"User Management"));
    assert!(!labels(UserRole::User).contains(&"User Management"));
    assert_eq!(labels(UserRole::User).len(), 4);
}
