// tests/cli_exit.rs
//
// The binary end to end: payload on stdin, exit status, stdout summary.
//
#![cfg(feature = "cli")]

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

const PAGE: &str = "<ul>\n<!-- BEGIN DAILY -->\n<!-- END DAILY -->\n</ul>\n<!-- BEGIN HISTORY -->\n<!-- END HISTORY -->\n";

fn run_bin(doc: &Path, stdin: &str, extra: &[&str]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_update_daily_picks"))
        .arg("--document")
        .arg(doc)
        .args(extra)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn update_daily_picks");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn success_prints_summary_and_exits_zero() {
    let dir = TempDir::new().unwrap();
    let doc = dir.path().join("index.html");
    fs::write(&doc, PAGE).unwrap();

    let out = run_bin(&doc, r#"{"date":"2024-01-02","picks":[{"title":"a","url":"b"}]}"#, &[]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("Updated "));
    assert!(stdout.contains("2024-01-02, 1 picks"));
    assert!(fs::read_to_string(&doc).unwrap().contains(">a</a>"));
}

#[test]
fn not_json_exits_non_zero_and_keeps_page() {
    let dir = TempDir::new().unwrap();
    let doc = dir.path().join("index.html");
    fs::write(&doc, PAGE).unwrap();

    let out = run_bin(&doc, "not json", &[]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("invalid input JSON"));
    assert_eq!(fs::read_to_string(&doc).unwrap(), PAGE);
}

#[test]
fn missing_markers_exit_non_zero() {
    let dir = TempDir::new().unwrap();
    let doc = dir.path().join("index.html");
    fs::write(&doc, "<html></html>").unwrap();

    let out = run_bin(&doc, "{}", &[]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("daily markers not found"));
    assert_eq!(fs::read_to_string(&doc).unwrap(), "<html></html>");
}

#[test]
fn dry_run_prints_page() {
    let dir = TempDir::new().unwrap();
    let doc = dir.path().join("index.html");
    fs::write(&doc, PAGE).unwrap();

    let out = run_bin(&doc, "", &["--dry-run"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("No picks today (yet)."));
    assert_eq!(fs::read_to_string(&doc).unwrap(), PAGE);
}
