//! `stockroom-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod name;

pub use error::{DomainError, DomainResult};
pub use name::ProductName;
