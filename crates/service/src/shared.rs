use std::sync::RwLock;

use thiserror::Error;
use tracing::{info, warn};

use stockroom_core::{DomainError, ProductName};
use stockroom_inventory::{Inventory, ProductRecord, StockOutcome};

/// Application-layer error.
///
/// Benign stock outcomes are not errors (they come back as [`StockOutcome`]);
/// this only covers boundary failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The raw name failed value-object validation.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A thread panicked while holding the inventory lock.
    #[error("inventory lock poisoned")]
    LockPoisoned,
}

/// Lock-guarded inventory handle for long-lived, multi-caller use.
///
/// Each operation normalizes its name argument, takes the lock once, and runs
/// to completion inside that single critical section. The check-then-act
/// sequence inside add/remove therefore cannot interleave across callers.
/// Reads take the shared lock; mutations take the exclusive lock.
#[derive(Debug, Default)]
pub struct SharedInventory {
    inner: RwLock<Inventory>,
}

impl SharedInventory {
    /// Create a handle around an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units of `name`, logging the outcome.
    pub fn add(&self, name: &str, quantity: u64) -> Result<StockOutcome, ServiceError> {
        let name = ProductName::new(name)?;
        let mut inventory = self.inner.write().map_err(|_| ServiceError::LockPoisoned)?;
        let outcome = inventory.add(name.clone(), quantity);

        match outcome {
            StockOutcome::Created => info!(product = %name, quantity, "added to inventory"),
            StockOutcome::Updated => info!(product = %name, quantity, "quantity updated"),
            _ => {}
        }

        Ok(outcome)
    }

    /// Remove `quantity` units of `name`, logging the outcome.
    pub fn remove(&self, name: &str, quantity: u64) -> Result<StockOutcome, ServiceError> {
        let name = ProductName::new(name)?;
        let mut inventory = self.inner.write().map_err(|_| ServiceError::LockPoisoned)?;
        let outcome = inventory.remove(&name, quantity);

        match outcome {
            StockOutcome::Removed { remaining } => {
                info!(product = %name, remaining, "stock removed");
            }
            StockOutcome::InsufficientStock { remaining } => {
                warn!(product = %name, requested = quantity, remaining, "not enough stock");
            }
            StockOutcome::NotFound => warn!(product = %name, "product not found"),
            _ => {}
        }

        Ok(outcome)
    }

    /// Position of `name` in the store's insertion order, if present.
    pub fn find(&self, name: &str) -> Result<Option<usize>, ServiceError> {
        let name = ProductName::new(name)?;
        let inventory = self.inner.read().map_err(|_| ServiceError::LockPoisoned)?;
        Ok(inventory.find(&name))
    }

    /// A copy of the record for `name`, if present.
    pub fn get(&self, name: &str) -> Result<Option<ProductRecord>, ServiceError> {
        let name = ProductName::new(name)?;
        let inventory = self.inner.read().map_err(|_| ServiceError::LockPoisoned)?;
        Ok(inventory.get(&name).cloned())
    }

    /// A copy of all records in first-seen insertion order.
    pub fn snapshot(&self) -> Result<Vec<ProductRecord>, ServiceError> {
        let inventory = self.inner.read().map_err(|_| ServiceError::LockPoisoned)?;
        Ok(inventory.records().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operations_round_trip_through_the_lock() {
        let shared = SharedInventory::new();

        assert!(matches!(shared.add("Milk", 10), Ok(StockOutcome::Created)));
        assert!(matches!(shared.add("milk", 5), Ok(StockOutcome::Updated)));
        assert_eq!(shared.find("MILK").unwrap(), Some(0));
        assert_eq!(shared.get("milk").unwrap().unwrap().quantity, 15);

        assert!(matches!(
            shared.remove("MILK", 15),
            Ok(StockOutcome::Removed { remaining: 0 })
        ));
        assert!(shared.snapshot().unwrap().is_empty());
        assert!(matches!(shared.remove("milk", 1), Ok(StockOutcome::NotFound)));
    }

    #[test]
    fn invalid_name_is_rejected_before_touching_the_store() {
        let shared = SharedInventory::new();
        let err = shared.add("   ", 1).unwrap_err();
        match err {
            ServiceError::Domain(DomainError::Validation(_)) => {}
            other => panic!("Expected Domain(Validation), got {other:?}"),
        }
        assert!(shared.snapshot().unwrap().is_empty());
    }

    #[test]
    fn concurrent_adds_merge_into_one_record() {
        use std::sync::Arc;
        use std::thread;

        let shared = Arc::new(SharedInventory::new());
        let mut handles = Vec::new();

        for _ in 0..8 {
            let shared = Arc::clone(&shared);
            handles.push(thread::spawn(move || {
                for _ in 0..100 {
                    shared.add("widget", 1).unwrap();
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        let snapshot = shared.snapshot().unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].quantity, 800);
    }

    #[test]
    fn concurrent_removals_never_oversell() {
        use std::sync::Arc;
        use std::thread;

        let shared = Arc::new(SharedInventory::new());
        shared.add("widget", 50).unwrap();

        let mut handles = Vec::new();
        for _ in 0..8 {
            let shared = Arc::clone(&shared);
            handles.push(thread::spawn(move || {
                let mut removed = 0u64;
                for _ in 0..100 {
                    if let Ok(StockOutcome::Removed { .. }) = shared.remove("widget", 1) {
                        removed += 1;
                    }
                }
                removed
            }));
        }

        let total: u64 = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(total, 50);
        assert!(shared.snapshot().unwrap().is_empty());
    }
}
