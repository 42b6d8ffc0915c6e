use super::*;

const DELAY: Duration = Duration::from_millis(300);

#[test]
fn releases_after_quiet_period() {
    let start = Instant::now();
    let mut debouncer = Debouncer::new(DELAY);
    debouncer.push("we", start);
    assert_eq!(debouncer.poll(start + Duration::from_millis(299)), None);
    assert_eq!(debouncer.poll(start + DELAY), Some("we"));
    assert!(!debouncer.is_pending());
}

#[test]
fn each_keystroke_restarts_the_timer() {
    let start = Instant::now();
    let mut debouncer = Debouncer::new(DELAY);
    debouncer.push("w", start);
    debouncer.push("we", start + Duration::from_millis(200));
    assert_eq!(debouncer.poll(start + Duration::from_millis(400)), None);
    assert_eq!(debouncer.deadline(), Some(start + Duration::from_millis(500)));
    assert_eq!(debouncer.poll(start + Duration::from_millis(500)), Some("we"));
}

#[test]
fn flush_skips_the_wait() {
    let start = Instant::now();
    let mut debouncer = Debouncer::new(DELAY);
    debouncer.push(String::from("web"), start);
    assert_eq!(debouncer.flush().as_deref(), Some("web"));
    assert_eq!(debouncer.poll(start + DELAY), None);
}

#[test]
fn unrepresentable_deadline_is_none_and_never_fires() {
    let start = Instant::now();
    let mut debouncer = Debouncer::new(Duration::MAX);
    debouncer.push("web", start);
    assert_eq!(debouncer.deadline(), None);
    assert_eq!(debouncer.poll(start + Duration::from_secs(3600)), None);
    assert!(debouncer.is_pending());
}
