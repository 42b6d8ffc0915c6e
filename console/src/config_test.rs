use super::*;

// =============================================================================
// env_parse
// =============================================================================

#[test]
fn env_parse_missing_returns_default() {
    let val: u64 = env_parse("__RACKDESK_TEST_MISSING__", 42);
    assert_eq!(val, 42);
}

#[test]
fn env_parse_present_valid() {
    unsafe { std::env::set_var("__RACKDESK_TEST_VALID__", " 99 ") };
    let val: u32 = env_parse("__RACKDESK_TEST_VALID__", 0);
    assert_eq!(val, 99);
    unsafe { std::env::remove_var("__RACKDESK_TEST_VALID__") };
}

#[test]
fn env_parse_present_invalid_returns_default() {
    unsafe { std::env::set_var("__RACKDESK_TEST_INVALID__", "soon") };
    let val: u64 = env_parse("__RACKDESK_TEST_INVALID__", 7);
    assert_eq!(val, 7);
    unsafe { std::env::remove_var("__RACKDESK_TEST_INVALID__") };
}

// =============================================================================
// Defaults
// =============================================================================

#[test]
fn defaults_match_console_timings() {
    let config = ConsoleConfig::default();
    assert_eq!(config.latencies.login, Duration::from_millis(1500));
    assert_eq!(config.latencies.server_save, Duration::from_millis(500));
    assert_eq!(config.latencies.import_steps, 5);
    assert_eq!(config.latencies.import_commit, Duration::from_secs(2));
    assert_eq!(config.max_login_attempts, 5);
    assert_eq!(config.search_debounce, Duration::from_millis(300));
    assert_eq!(config.dashboard_refresh, Duration::from_secs(300));
}

#[test]
fn instant_zeroes_latency_but_keeps_limits() {
    let config = ConsoleConfig { max_login_attempts: 3, ..ConsoleConfig::default() }.instant();
    assert_eq!(config.latencies.login, Duration::ZERO);
    assert_eq!(config.latencies.import_commit, Duration::ZERO);
    assert_eq!(config.max_login_attempts, 3);
}
