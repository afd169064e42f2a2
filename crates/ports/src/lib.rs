//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`filesystem`]: opening and reading text sources
//! - [`progress`]: per-source progress and failure reporting
//!
//! These ports keep the use cases independent of where text comes from.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod progress;
