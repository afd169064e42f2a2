//! # Domain
//!
//! Pure text-tallying logic with no I/O:
//!
//! - [`tokenize`]: delimiter set, case folding and the token iterator
//! - [`model`]: the first-seen ordered [`model::TokenTally`] and the
//!   tie-preserving [`model::LongestLines`] selector
//! - [`analytics`]: presentation orderings over a finished tally

#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod model;
pub mod tokenize;

pub use model::{LongestLines, Observation, Token, TokenEntry, TokenTally};
pub use tokenize::{FoldMode, Tokenizer};
