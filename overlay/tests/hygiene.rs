//! Hygiene: source-level rules for the overlay core, checked at test time.
//!
//! Production files under `src/` (test files excluded) are scanned for
//! patterns the crate does not allow. Budgets are zero and only go down.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `overlay/src/`, skipping `*_test.rs`.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

/// Lines containing `pattern`, per file. Comment lines are ignored.
fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file
                .content
                .lines()
                .filter(|line| !line.trim_start().starts_with("//"))
                .filter(|line| line.contains(pattern))
                .count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn assert_budget(pattern: &str, max: usize, why: &str) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found; run from the overlay crate root");
    let found = hits(&files, pattern);
    let count: usize = found.iter().map(|(_, c)| c).sum();
    let listing = found.iter().map(|(p, c)| format!("  {p}: {c}")).collect::<Vec<_>>().join("\n");
    assert!(count <= max, "`{pattern}` budget exceeded ({why}): found {count}, max {max}.\n{listing}");
}

// ── Panics ──────────────────────────────────────────────────────

#[test]
fn no_unwrap() {
    assert_budget(".unwrap()", 0, "panics");
}

#[test]
fn no_expect() {
    assert_budget(".expect(", 0, "panics");
}

#[test]
fn no_panic_macros() {
    for pattern in ["panic!(", "unreachable!(", "todo!(", "unimplemented!("] {
        assert_budget(pattern, 0, "panics");
    }
}

// ── Silent loss ─────────────────────────────────────────────────

#[test]
fn no_silent_discard() {
    assert_budget("let _ =", 0, "discards errors without inspecting");
}

#[test]
fn no_dot_ok() {
    assert_budget(".ok()", 0, "discards errors without inspecting");
}

// ── Structure ───────────────────────────────────────────────────

#[test]
fn no_allow_dead_code() {
    assert_budget("#[allow(dead_code)]", 0, "dead code");
}

#[test]
fn core_stays_host_agnostic() {
    for pattern in ["web_sys", "wasm_bindgen", "js_sys", "gloo_"] {
        assert_budget(pattern, 0, "browser APIs belong in the client crate");
    }
}

#[test]
fn core_stays_single_threaded() {
    for pattern in ["Arc<", "Mutex<", "std::thread"] {
        assert_budget(pattern, 0, "the overlay runs on one event loop");
    }
}
