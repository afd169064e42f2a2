// tests/integration/word_count.rs
use predicates::prelude::*;
use serde_json::Value;

#[path = "../common/mod.rs"]
mod common;
use common::{Fixtures, word_count};

#[test]
fn counts_text_flag_in_first_seen_order() {
    word_count()
        .args(["--text", "The the THE cat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("===== WORD COUNT RESULT =====\nthe : 3\ncat : 1\n"));
}

#[test]
fn counts_file_flag() {
    let fx = Fixtures::new();
    let path = fx.file("poem.txt", "Roses are red.\nViolets are blue;\n(Sugar is sweet!)\n");

    word_count()
        .arg("--file")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("roses : 1\nare : 2\nred : 1\nviolets : 1\n"))
        .stdout(predicate::str::contains("sweet : 1\n"));
}

#[test]
fn missing_file_is_fatal() {
    let fx = Fixtures::new();
    let missing = fx.path("absent.txt");

    word_count()
        .arg("--file")
        .arg(&missing)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Cannot open file"))
        .stderr(predicate::str::contains("absent.txt"));
}

#[test]
fn interactive_menu_types_text() {
    word_count()
        .write_stdin("1\nHello, hello WORLD!\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("hello : 2\nworld : 1\n"))
        .stderr(predicate::str::contains("Choose option:"));
}

#[test]
fn interactive_menu_reads_a_file() {
    let fx = Fixtures::new();
    let path = fx.file("in.txt", "a-b a\tb a");

    word_count()
        .write_stdin(format!("2\n{}\n", path.display()))
        .assert()
        .success()
        .stdout(predicate::str::contains("a : 3\nb : 2\n"));
}

#[test]
fn interactive_menu_rejects_invalid_choice() {
    word_count()
        .write_stdin("7\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid option!"))
        .stdout(predicate::str::contains("WORD COUNT RESULT").not());
}

#[test]
fn interactive_menu_with_unreadable_file_fails() {
    let fx = Fixtures::new();
    let missing = fx.path("nothing.txt");

    word_count()
        .write_stdin(format!("2\n{}\n", missing.display()))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("nothing.txt"));
}

#[test]
fn empty_text_prints_no_entries() {
    word_count()
        .args(["--text", " ,.;: "])
        .assert()
        .success()
        .stdout("\n===== WORD COUNT RESULT =====\n");
}

#[test]
fn json_sorted_by_count_with_top() {
    let output = word_count()
        .args(["--text", "x y z y z z", "--format", "json", "--sort", "count", "--top", "2"])
        .output()
        .expect("run word_count");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(
        json,
        serde_json::json!([{"token": "z", "count": 3}, {"token": "y", "count": 2}])
    );
}

#[test]
fn reverse_flips_count_order() {
    word_count()
        .args(["--text", "a b b c c c", "--sort", "count", "--reverse"])
        .assert()
        .success()
        .stdout("\n===== WORD COUNT RESULT =====\na : 1\nb : 2\nc : 3\n");
}

#[test]
fn unicode_fold_merges_accented_capitals() {
    word_count()
        .args(["--text", "ÉTÉ été", "--fold", "unicode"])
        .assert()
        .success()
        .stdout(predicate::str::contains("été : 2\n"));

    word_count()
        .args(["--text", "ÉTÉ été"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ÉtÉ : 1\nété : 1\n"));
}
