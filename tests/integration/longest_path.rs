// tests/integration/longest_path.rs
use predicates::prelude::*;
use serde_json::Value;

#[path = "../common/mod.rs"]
mod common;
use common::{Fixtures, longest_path};

#[test]
fn ties_are_listed_in_source_then_line_order() {
    let fx = Fixtures::new();
    let first = fx.file("first.txt", "a\nbb\n");
    let second = fx.file("second.txt", "cc\nd\n");

    longest_path()
        .arg(&first)
        .arg(&second)
        .assert()
        .success()
        .stdout("\nLONGEST PATH(S)\nbb\ncc\n\nLongest Length = 2 characters\n");
}

#[test]
fn unreadable_source_is_reported_and_skipped() {
    let fx = Fixtures::new();
    let good = fx.file("good.txt", "/usr/local/bin\n/etc\n");
    let missing = fx.path("missing.txt");

    longest_path()
        .arg(&missing)
        .arg(&good)
        .assert()
        .success()
        .stderr(predicate::str::contains("missing.txt"))
        .stdout(predicate::str::contains("/usr/local/bin\n"))
        .stdout(predicate::str::contains("Longest Length = 14 characters"));
}

#[test]
fn only_blank_lines_means_no_paths() {
    let fx = Fixtures::new();
    let blank = fx.file("blank.txt", "\n\r\n\n");

    longest_path()
        .arg(&blank)
        .assert()
        .success()
        .stdout("No paths found.\n");
}

#[test]
fn every_source_missing_still_exits_cleanly() {
    let fx = Fixtures::new();

    longest_path()
        .arg(fx.path("one.txt"))
        .arg(fx.path("two.txt"))
        .assert()
        .success()
        .stdout("No paths found.\n")
        .stderr(predicate::str::contains("one.txt"))
        .stderr(predicate::str::contains("two.txt"));
}

#[test]
fn strict_mode_fails_on_missing_source() {
    let fx = Fixtures::new();
    let good = fx.file("good.txt", "abc\n");

    longest_path()
        .arg("--strict")
        .arg(fx.path("gone.txt"))
        .arg(&good)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("gone.txt"))
        .stdout(predicate::str::contains("LONGEST").not());
}

#[test]
fn strict_mode_reports_the_failure_once() {
    let fx = Fixtures::new();

    let output = longest_path()
        .arg("--strict")
        .arg(fx.path("gone.txt"))
        .output()
        .expect("run longest_path");
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    let mentions = stderr.lines().filter(|line| line.contains("gone.txt")).count();
    assert_eq!(mentions, 1, "stderr was: {stderr}");
}

#[test]
fn interactive_mode_prompts_for_files() {
    let fx = Fixtures::new();
    let first = fx.file("x.txt", "short\n");
    let second = fx.file("y.txt", "much longer\r\n");

    longest_path()
        .write_stdin(format!("2\n{}\n{}\n", first.display(), second.display()))
        .assert()
        .success()
        .stderr(predicate::str::contains("Enter number of input files: "))
        .stdout(predicate::str::contains("LONGEST PATH(S)\nmuch longer\n"))
        .stdout(predicate::str::contains("Longest Length = 11 characters"));
}

#[test]
fn interactive_zero_files_exits_successfully() {
    longest_path()
        .write_stdin("0\n")
        .assert()
        .success()
        .stdout("No input files. Exiting.\n");
}

#[test]
fn interactive_non_numeric_count_fails() {
    longest_path()
        .write_stdin("lots\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid number provided."));
}

#[test]
fn interactive_input_ending_early_skips_remaining_slots() {
    let fx = Fixtures::new();
    let only = fx.file("only.txt", "lonely line\n");

    longest_path()
        .write_stdin(format!("3\n{}\n", only.display()))
        .assert()
        .success()
        .stderr(predicate::str::contains("No input."))
        .stdout(predicate::str::contains("lonely line"));
}

#[test]
fn json_output_includes_failures() {
    let fx = Fixtures::new();
    let good = fx.file("good.txt", "xyz\nabc\n");
    let missing = fx.path("missing.txt");

    let output = longest_path()
        .args(["--format", "json"])
        .arg(&good)
        .arg(&missing)
        .output()
        .expect("run longest_path");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(json["max_length"], 3);
    assert_eq!(json["lines"], serde_json::json!(["xyz", "abc"]));
    let failed = json["failed_sources"].as_array().expect("array");
    assert_eq!(failed.len(), 1);
    assert!(failed[0].as_str().unwrap().ends_with("missing.txt"));
}
