use serde::{Deserialize, Serialize};

use stockroom_core::ProductName;

/// One stored product: normalized name plus units on hand.
///
/// A record only exists while its quantity is positive; the store deletes it
/// the moment a removal drains it to exactly zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub name: ProductName,
    pub quantity: u64,
}

/// Structured outcome of a stock operation.
///
/// Every condition the store can report is a normal outcome, not a fault.
/// Callers branch on the variant instead of parsing message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum StockOutcome {
    /// A new record was appended for a first-seen name.
    Created,
    /// An existing record absorbed the added quantity.
    Updated,
    /// Stock was removed; `remaining` is what is left (zero means the record
    /// was deleted).
    Removed { remaining: u64 },
    /// The removal asked for more than is held; nothing changed.
    InsufficientStock { remaining: u64 },
    /// No record with that name exists; nothing changed.
    NotFound,
}

/// In-memory inventory store.
///
/// Holds an ordered sequence of [`ProductRecord`]s, at most one per normalized
/// name. First-seen insertion order is preserved across updates; lookup is a
/// linear scan, which is fine at the scale this store is built for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    records: Vec<ProductRecord>,
}

impl Inventory {
    /// Create an empty store. Callers control its lifetime; there is no
    /// implicit teardown.
    pub fn new() -> Self {
        Self::default()
    }

    /// Position of the first record matching `name`, if any.
    ///
    /// Pure query, no side effects: calling it twice with no mutation in
    /// between returns the same answer.
    pub fn find(&self, name: &ProductName) -> Option<usize> {
        self.records.iter().position(|r| r.name == *name)
    }

    /// The record for `name`, if one exists.
    pub fn get(&self, name: &ProductName) -> Option<&ProductRecord> {
        self.find(name).map(|idx| &self.records[idx])
    }

    /// Add `quantity` units of `name`.
    ///
    /// Merges into the existing record when one is present (so at most one
    /// record per name ever exists), otherwise appends a new record at the
    /// end of the sequence.
    pub fn add(&mut self, name: ProductName, quantity: u64) -> StockOutcome {
        match self.find(&name) {
            Some(idx) => {
                self.records[idx].quantity += quantity;
                StockOutcome::Updated
            }
            None => {
                self.records.push(ProductRecord { name, quantity });
                StockOutcome::Created
            }
        }
    }

    /// Remove `quantity` units of `name`.
    ///
    /// Over-removal is rejected whole: either the full quantity comes out or
    /// nothing changes. A removal that drains the record to exactly zero
    /// deletes it from the sequence.
    pub fn remove(&mut self, name: &ProductName, quantity: u64) -> StockOutcome {
        let Some(idx) = self.find(name) else {
            return StockOutcome::NotFound;
        };

        let held = self.records[idx].quantity;
        if held < quantity {
            return StockOutcome::InsufficientStock { remaining: held };
        }

        let remaining = held - quantity;
        if remaining == 0 {
            self.records.remove(idx);
        } else {
            self.records[idx].quantity = remaining;
        }

        StockOutcome::Removed { remaining }
    }

    /// Number of distinct products held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in first-seen insertion order.
    pub fn records(&self) -> impl Iterator<Item = &ProductRecord> {
        self.records.iter()
    }
}
