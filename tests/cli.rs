use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn reprtrunc() -> Command {
    Command::cargo_bin("reprtrunc").unwrap()
}

#[test]
fn test_short_value_unchanged() {
    reprtrunc()
        .arg("hello")
        .assert()
        .success()
        .stdout("\"hello\"\n");
}

#[test]
fn test_long_value_truncated() {
    let value = "x".repeat(300);
    let expected = format!("\"{}...{}\"\n", "x".repeat(79), "x".repeat(79));
    reprtrunc().arg(&value).assert().success().stdout(predicate::str::diff(expected));
}

#[test]
fn test_custom_limit() {
    let value = "abcdefgh".repeat(6);
    reprtrunc()
        .args(["--limit", "10", value.as_str()])
        .assert()
        .success()
        .stdout("\"abcd...efgh\"\n");
}

#[test]
fn test_raw_style_at_boundary() {
    // limit 10: 29 chars stay, 30 chars are cut
    reprtrunc()
        .args(["-l", "10", "-s", "raw", "a".repeat(29).as_str(), "b".repeat(30).as_str()])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{}\nbbbbb...bbbbb\n", "a".repeat(29))));
}

#[test]
fn test_negative_limit_fails() {
    reprtrunc()
        .args(["--limit", "-1", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid limit -1"));
}

#[test]
fn test_reads_stdin() {
    reprtrunc()
        .args(["-s", "raw"])
        .write_stdin("one\ntwo\n")
        .assert()
        .success()
        .stdout("one\ntwo\n");
}

#[test]
fn test_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "42").unwrap();
    writeln!(file, "[1, 2, 3]").unwrap();

    reprtrunc()
        .args(["-s", "json", "--file"])
        .arg(file.path())
        .assert()
        .success()
        .stdout("42\n[1,2,3]\n");
}

#[test]
fn test_missing_file_fails() {
    reprtrunc()
        .args(["--file", "/nonexistent/reprtrunc/values.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn test_invalid_json_reports_line() {
    reprtrunc()
        .args(["-s", "json"])
        .write_stdin("{}\n{oops\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2: invalid JSON"));
}

#[test]
fn test_json_output() {
    let output = reprtrunc()
        .args(["--format", "json", "-l", "4", "-s", "raw", "ok", "z".repeat(30).as_str()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["text"], "ok");
    assert_eq!(json[0]["truncated"], false);
    assert_eq!(json[1]["text"], "zz...zz");
    assert_eq!(json[1]["original_len"], 30);
}

#[test]
fn test_compare_table() {
    reprtrunc()
        .args(["-C", "4,100", "-s", "raw", "m".repeat(40).as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Comparing value 1 across limits"))
        .stdout(predicate::str::contains("mm...mm"))
        .stdout(predicate::str::contains("40 -> 7"));
}

#[test]
fn test_file_and_values_conflict() {
    reprtrunc()
        .args(["--file", "x.txt", "value"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--file cannot be combined"));
}

#[test]
fn test_verbose_summary() {
    reprtrunc()
        .args(["-v", "-l", "0", "-s", "raw", "q".repeat(25).as_str()])
        .assert()
        .success()
        .stdout("...\n")
        .stderr(predicate::str::contains("1 of 1 value(s) truncated"));
}

#[test]
fn test_compare_rejects_ignored_flags() {
    reprtrunc()
        .args(["-C", "4,100", "--format", "json", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--compare cannot be used with --format json"));

    reprtrunc()
        .args(["-C", "4,100", "-l", "10", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--compare cannot be used with --limit"));
}
