//! Source-level checks on the inventory crate.
//!
//! The crate is pure domain code: no I/O, no environment access, no panics
//! outside static regex construction. Budgets may go down, never up.

use std::fs;
use std::path::{Path, PathBuf};

struct Source {
    path: PathBuf,
    text: String,
}

impl Source {
    fn is_test(&self) -> bool {
        self.path.to_string_lossy().ends_with("_test.rs")
    }

    fn lines_matching<'a>(&'a self, pattern: &'a str) -> impl Iterator<Item = (usize, &'a str)> + 'a {
        self.text
            .lines()
            .enumerate()
            .filter(move |(_, line)| line.contains(pattern))
            .map(|(i, line)| (i + 1, line))
    }
}

fn walk(dir: &Path, out: &mut Vec<Source>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            if let Ok(text) = fs::read_to_string(&path) {
                out.push(Source { path, text });
            }
        }
    }
}

fn sources() -> Vec<Source> {
    let mut out = Vec::new();
    walk(Path::new("src"), &mut out);
    assert!(!out.is_empty(), "no sources found; run from the crate root");
    out
}

fn production() -> Vec<Source> {
    sources().into_iter().filter(|s| !s.is_test()).collect()
}

fn report(pattern: &str, max: usize) {
    let offenders: Vec<String> = production()
        .iter()
        .flat_map(|s| s.lines_matching(pattern).map(|(n, _)| format!("  {}:{n}", s.path.display())).collect::<Vec<_>>())
        .collect();
    assert!(
        offenders.len() <= max,
        "`{pattern}` found {} times (max {max}):\n{}",
        offenders.len(),
        offenders.join("\n")
    );
}

// =============================================================================
// Budgets
// =============================================================================

#[test]
fn panicking_calls_stay_within_budget() {
    for (pattern, max) in [(".expect(", 0), ("panic!(", 0), ("todo!(", 0), ("unimplemented!(", 0)] {
        report(pattern, max);
    }
}

#[test]
fn errors_are_not_silently_dropped() {
    for pattern in ["let _ =", ".ok()", "#[allow(dead_code)]"] {
        report(pattern, 0);
    }
}

/// Every `.unwrap()` builds a static regex from a literal.
#[test]
fn unwraps_only_build_static_regexes() {
    let mut stray = Vec::new();
    let mut total = 0;
    for source in production() {
        let lines: Vec<&str> = source.text.lines().collect();
        for (n, _) in source.lines_matching(".unwrap()") {
            total += 1;
            // The LazyLock may wrap onto the previous line.
            let window = lines[n.saturating_sub(3)..n].join(" ");
            if !(window.contains("LazyLock::new") && window.contains("Regex::new")) {
                stray.push(format!("  {}:{n}", source.path.display()));
            }
        }
    }
    assert!(stray.is_empty(), "unwrap outside static regex construction:\n{}", stray.join("\n"));
    assert!(total <= 4, "static regex count grew to {total}");
}

// =============================================================================
// Purity
// =============================================================================

#[test]
fn domain_code_does_no_io() {
    for pattern in ["std::fs", "std::env", "std::net", "println!(", "eprintln!(", "tokio::"] {
        report(pattern, 0);
    }
}

// =============================================================================
// Test layout
// =============================================================================

#[test]
fn every_test_file_is_attached() {
    let all = sources();
    for test in all.iter().filter(|s| s.is_test()) {
        let name = test.path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
        let attach = format!("#[path = \"{name}\"]");
        assert!(
            all.iter().any(|s| !s.is_test() && s.text.contains(&attach)),
            "{} is not attached to any module",
            test.path.display()
        );
    }
}
