//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates domain logic and the source-reading port:
//!
//! - [`count_words`]: tally tokens from typed text or a whole file
//! - [`find_longest`]: scan many sources for their co-maximal lines
//! - [`dto`]: data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod count_words;
pub mod dto;
pub mod find_longest;

pub use count_words::CountWords;
pub use dto::{LongestLinesOutput, SourceFailure};
pub use find_longest::{FailurePolicy, FindLongestLines};
