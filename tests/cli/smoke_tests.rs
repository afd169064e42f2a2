use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn word_count_shows_help() {
    Command::new(env!("CARGO_BIN_EXE_word_count"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("word_count"))
        .stdout(predicate::str::contains("--fold"));
}

#[test]
fn longest_path_shows_help() {
    Command::new(env!("CARGO_BIN_EXE_longest_path"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("longest_path"))
        .stdout(predicate::str::contains("--strict"));
}

#[test]
fn version_matches_package() {
    Command::new(env!("CARGO_BIN_EXE_word_count"))
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn rejects_unknown_flag() {
    Command::new(env!("CARGO_BIN_EXE_longest_path"))
        .arg("--no-such-flag")
        .assert()
        .failure();
}
