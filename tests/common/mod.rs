// tests/common/mod.rs
//! 共通テストユーティリティ
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

pub fn word_count() -> Command {
    Command::new(env!("CARGO_BIN_EXE_word_count"))
}

pub fn longest_path() -> Command {
    Command::new(env!("CARGO_BIN_EXE_longest_path"))
}

/// Scratch directory holding input files for one test.
#[derive(Debug)]
pub struct Fixtures {
    dir: TempDir,
}

impl Fixtures {
    pub fn new() -> Self {
        Self { dir: TempDir::new().expect("create temp dir") }
    }

    /// Write `contents` to `name` and return its full path.
    pub fn file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, contents)
            .unwrap_or_else(|e| panic!("Failed to create test file at {path:?}: {e}"));
        path
    }

    /// Path inside the fixture directory that is never created.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
