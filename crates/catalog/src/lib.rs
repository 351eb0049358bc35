//! Product catalog module.
//!
//! Holds the product record, the immutable catalog built once per process
//! and the read-only queries over it. Deterministic domain logic only (no
//! IO, no HTTP).

pub mod catalog;
pub mod product;
pub mod query;
mod sample;

pub use catalog::Catalog;
pub use product::Product;
pub use query::{ProductFilter, get_by_id, list};
