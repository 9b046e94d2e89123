//!
//! Tests for the benchmark history analyzer.
//!

#![cfg(test)]

use std::str::FromStr;

const COLLECTIONS: &str = r#"window.BENCHMARK_DATA = {
  "lastUpdate": 1616000000000,
  "repoUrl": "https://github.com/unicode-org/icu4x",
  "entries": {
    "Rust Benchmark": [
      {
        "commit": {
          "author": { "email": "sffc@google.com", "name": "Shane F. Carr", "username": "sffc" },
          "committer": { "email": "noreply@github.com", "name": "GitHub", "username": "web-flow" },
          "distinct": true,
          "id": "aaaaaaa1aaaaaaa1aaaaaaa1aaaaaaa1aaaaaaa1",
          "message": "Add CodePointTrie (#500)",
          "timestamp": "2021-03-01T10:00:00-08:00",
          "tree_id": "1c1a87a7f25c4274b33bb9240b355444586557db",
          "url": "https://github.com/unicode-org/icu4x/commit/aaaaaaa1aaaaaaa1aaaaaaa1aaaaaaa1aaaaaaa1"
        },
        "date": 1614621600000,
        "tool": "cargo",
        "benches": [
          { "name": "cpt/get/small/eng", "value": 100, "range": "± 3", "unit": "ns/iter" },
          { "name": "cpt/get/fast/eng", "value": 80, "range": "± 3", "unit": "ns/iter" },
          { "name": "uniset/contains", "value": 40, "range": "± 1", "unit": "ns/iter" }
        ]
      },
      {
        "commit": {
          "author": { "email": "sffc@google.com", "name": "Shane F. Carr", "username": "sffc" },
          "committer": { "email": "noreply@github.com", "name": "GitHub", "username": "web-flow" },
          "distinct": true,
          "id": "bbbbbbb2bbbbbbb2bbbbbbb2bbbbbbb2bbbbbbb2",
          "message": "Refactor CodePointTrie (#510)",
          "timestamp": "2021-03-10T10:00:00-08:00",
          "tree_id": "1c1a87a7f25c4274b33bb9240b355444586557db",
          "url": "https://github.com/unicode-org/icu4x/commit/bbbbbbb2bbbbbbb2bbbbbbb2bbbbbbb2bbbbbbb2"
        },
        "date": 1615399200000,
        "tool": "cargo",
        "benches": [
          { "name": "cpt/get/small/eng", "value": 90, "range": "± 3", "unit": "ns/iter" },
          { "name": "cpt/get/fast/eng", "value": 80, "range": "± 3", "unit": "ns/iter" },
          { "name": "uniset/contains", "value": 41, "range": "± 1", "unit": "ns/iter" }
        ]
      },
      {
        "commit": {
          "author": { "email": "sffc@google.com", "name": "Shane F. Carr", "username": "sffc" },
          "committer": { "email": "noreply@github.com", "name": "GitHub", "username": "web-flow" },
          "distinct": true,
          "id": "ccccccc3ccccccc3ccccccc3ccccccc3ccccccc3",
          "message": "Use a fast trie for lookups (#520)",
          "timestamp": "2021-03-16T10:00:00-07:00",
          "tree_id": "1c1a87a7f25c4274b33bb9240b355444586557db",
          "url": "https://github.com/unicode-org/icu4x/commit/ccccccc3ccccccc3ccccccc3ccccccc3ccccccc3"
        },
        "date": 1615914000000,
        "tool": "cargo",
        "benches": [
          { "name": "cpt/get/small/eng", "value": 300, "range": "± 3", "unit": "ns/iter" },
          { "name": "cpt/get/fast/eng", "value": 40, "range": "± 3", "unit": "ns/iter" },
          { "name": "uniset/contains", "value": 41, "range": "± 1", "unit": "ns/iter" }
        ]
      }
    ]
  }
}"#;

fn history() -> benchmark_history::History {
    benchmark_history::History::from_str(COLLECTIONS).expect("Always valid")
}

#[test]
fn compare_last_two() {
    let history = history();
    let alerts = crate::compare(&history, None, None, None, 2.0, 10, None, true)
        .expect("Always valid");
    assert_eq!(alerts, 1);
}

#[test]
fn compare_selected() {
    let history = history();
    let alerts = crate::compare(
        &history,
        Some("Rust Benchmark"),
        Some("aaaaaaa"),
        Some("bbbbbbb"),
        2.0,
        10,
        None,
        true,
    )
    .expect("Always valid");
    assert_eq!(alerts, 0);

    let alerts = crate::compare(&history, None, Some("bbbbbbb"), None, 4.0, 10, None, true)
        .expect("Always valid");
    assert_eq!(alerts, 0);
}

#[test]
fn compare_to_file() {
    let directory = tempfile::tempdir().expect("Always valid");
    let output_path = directory.path().join("comparison.txt");
    let history = history();
    crate::compare(
        &history,
        None,
        None,
        None,
        2.0,
        10,
        Some(output_path.clone()),
        true,
    )
    .expect("Always valid");

    let contents = std::fs::read_to_string(output_path).expect("Always valid");
    assert!(contents.contains(benchmark_history::ALL_GROUP_NAME));
    assert!(contents.contains("cpt"));
    assert!(contents.contains("uniset"));
}

#[test]
fn compare_unknown_commit() {
    let history = history();
    assert!(crate::compare(&history, None, Some("fffffff"), None, 2.0, 10, None, true).is_err());
    assert!(crate::compare(&history, Some("Heap"), None, None, 2.0, 10, None, true).is_err());
}

#[test]
fn summary() {
    colored::control::set_override(false);
    let history = history();
    let mut buffer = Vec::new();
    crate::summary(&mut buffer, &history, None, Some("^cpt/")).expect("Always valid");

    let text = String::from_utf8(buffer).expect("Always valid");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "Rust Benchmark");
    assert!(lines[2].starts_with("cpt/get/fast/eng"));
    assert!(lines[2].ends_with("-50.00%"));
    assert!(lines[3].starts_with("cpt/get/small/eng"));
    assert!(lines[3].ends_with("+200.00%"));
}
