// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;

pub use counts::{LineLength, TokenCount};
