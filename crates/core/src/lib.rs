//! `market-core`: domain building blocks shared by the catalog and the API.
//!
//! Pure domain primitives only (no IO, no HTTP).

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::ProductId;
