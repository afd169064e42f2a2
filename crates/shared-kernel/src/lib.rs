// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    DomainError, DomainResult, ErrorContext, InfraResult, InfrastructureError, PresentationError,
    PresentationResult, Result, TextTallyError,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{LineLength, TokenCount};
