//! Integration tests for `mcb inspect` and `mcb candidates`.
#![allow(clippy::expect_used)]

use std::io::Write as _;
use std::path::PathBuf;
use std::process::{Command, Output};

fn mcb_bin() -> PathBuf {
    let mut path = std::env::current_exe().expect("current exe");
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("mcb");
    path
}

fn run_on(json: &str, args: &[&str]) -> Output {
    let mut f = tempfile::NamedTempFile::new().expect("temp file");
    f.write_all(json.as_bytes()).expect("write graph");
    let path = f.path().to_str().expect("path").to_owned();
    let mut full = args.to_vec();
    full.insert(1, path.as_str());
    Command::new(mcb_bin())
        .args(&full)
        .env_remove("MCB_LOG")
        .env_remove("MCB_MAX_FILE_SIZE")
        .output()
        .expect("run mcb")
}

/// Cubane: eight vertices, twelve edges, five independent rings.
const CUBANE: &str = r#"{"edges": [
    [0, 1], [1, 2], [2, 3], [3, 0],
    [4, 5], [5, 6], [6, 7], [7, 4],
    [0, 4], [1, 5], [2, 6], [3, 7]
]}"#;

// ---------------------------------------------------------------------------
// inspect
// ---------------------------------------------------------------------------

#[test]
fn inspect_human_shows_counts() {
    let out = run_on(CUBANE, &["inspect"]);
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("vertices:          8"), "stdout: {stdout}");
    assert!(stdout.contains("edges:             12"), "stdout: {stdout}");
    assert!(stdout.contains("cyclomatic_number: 5"), "stdout: {stdout}");
}

#[test]
fn inspect_json_counts_isolated_vertices_as_components() {
    let out = run_on(
        r#"{"vertices": 6, "edges": [[0, 1], [1, 2], [2, 0]]}"#,
        &["inspect", "--format", "json"],
    );
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json");
    assert_eq!(v["components"], 4);
    assert_eq!(v["cyclomatic_number"], 1);
}

#[test]
fn inspect_rejects_asymmetric_adjacency() {
    let out = run_on(r#"{"adjacency": [[1, 2], [0], [1]]}"#, &["inspect"]);
    assert_eq!(out.status.code(), Some(2));
}

// ---------------------------------------------------------------------------
// candidates
// ---------------------------------------------------------------------------

#[test]
fn candidates_are_listed_shortest_first() {
    let out = run_on(CUBANE, &["candidates"]);
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    let stdout = String::from_utf8_lossy(&out.stdout);
    let lengths: Vec<usize> = stdout
        .lines()
        .map(|l| {
            l.split('\t')
                .next()
                .and_then(|n| n.parse().ok())
                .expect("length column")
        })
        .collect();
    assert!(lengths.len() >= 5, "stdout: {stdout}");
    assert!(lengths.windows(2).all(|w| w[0] <= w[1]), "{lengths:?}");
    assert_eq!(lengths[0], 4);
}

#[test]
fn candidates_limit_truncates() {
    let out = run_on(CUBANE, &["candidates", "--limit", "2", "--format", "json"]);
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json");
    let entries = v.as_array().expect("array");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["length"], 4);
}
