//! Hygiene: source-level budgets for the crate
//!
//! These tests scan `src/` for patterns that panic or silently drop errors in
//! code that runs on a visitor's page. Every budget is zero. A new hit has to be
//! rewritten, not budgeted.
#![cfg(not(target_arch = "wasm32"))]
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

// Panics: a panic in a listener kills every behavior on the page.
const MAX_UNWRAP: usize = 0;
const MAX_EXPECT: usize = 0;
const MAX_PANIC: usize = 0;
const MAX_UNREACHABLE: usize = 0;
const MAX_TODO: usize = 0;
const MAX_UNIMPLEMENTED: usize = 0;

// Silent loss: discards errors without inspecting.
const MAX_SILENT_DISCARD: usize = 0;
const MAX_DOT_OK: usize = 0;

// Style / structure.
const MAX_ALLOW_DEAD_CODE: usize = 0;

/// `dyn_into` failures are type mismatches, not errors, so `.ok()` on them is allowed.
const DOT_OK_EXEMPT: &str = "dyn_into";

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `src/`, excluding `*_test.rs`.
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
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str, exempt: Option<&str>) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file
                .content
                .lines()
                .filter(|line| line.contains(pattern))
                .filter(|line| exempt.is_none_or(|e| !line.contains(e)))
                .count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn assert_budget(pattern: &str, exempt: Option<&str>, max: usize) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found; run from the crate root");
    let found = hits(&files, pattern, exempt);
    let count: usize = found.iter().map(|(_, c)| c).sum();
    let listing = found
        .iter()
        .map(|(path, c)| format!("  {path}: {c}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(count <= max, "{pattern} budget exceeded: found {count}, max {max}.\n{listing}");
}

#[test]
fn unwrap_budget() {
    assert_budget(".unwrap()", None, MAX_UNWRAP);
}

#[test]
fn expect_budget() {
    assert_budget(".expect(", None, MAX_EXPECT);
}

#[test]
fn panic_budget() {
    assert_budget("panic!(", None, MAX_PANIC);
}

#[test]
fn unreachable_budget() {
    assert_budget("unreachable!(", None, MAX_UNREACHABLE);
}

#[test]
fn todo_budget() {
    assert_budget("todo!(", None, MAX_TODO);
}

#[test]
fn unimplemented_budget() {
    assert_budget("unimplemented!(", None, MAX_UNIMPLEMENTED);
}

#[test]
fn silent_discard_budget() {
    assert_budget("let _ =", None, MAX_SILENT_DISCARD);
}

#[test]
fn dot_ok_budget() {
    assert_budget(".ok()", Some(DOT_OK_EXEMPT), MAX_DOT_OK);
}

#[test]
fn allow_dead_code_budget() {
    assert_budget("#[allow(dead_code)]", None, MAX_ALLOW_DEAD_CODE);
}
