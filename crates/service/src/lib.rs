//! Application layer: shared access to the inventory store.
//!
//! The domain crates stay pure; this crate adds the concerns a long-lived
//! caller needs on top of them: a mutual-exclusion lock around the store and
//! structured logging of every operation outcome.

pub mod shared;

pub use shared::{ServiceError, SharedInventory};
