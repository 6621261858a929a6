//! In-memory inventory keyed by canonical product name.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use stockbook_core::{DomainError, DomainResult};
use stockbook_products::{CanonicalName, Price, Product, Quantity};

/// Result of a successful price update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceUpdate {
    pub old_price: Price,
    pub new_price: Price,
    /// Unchanged by the update; returned for reporting.
    pub quantity: Quantity,
}

/// The inventory: an ordered map from canonical name to product record.
///
/// Exists for the lifetime of one program run. Created empty, mutated in
/// place by the single thread of control, discarded at exit. Ordering by
/// canonical key makes listings deterministic.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    records: BTreeMap<CanonicalName, Product>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn contains(&self, key: &CanonicalName) -> bool {
        self.records.contains_key(key)
    }

    pub fn get(&self, key: &CanonicalName) -> Option<&Product> {
        self.records.get(key)
    }

    /// Insert a new record.
    ///
    /// A canonical-key collision is a conflict; the existing record is left
    /// untouched.
    pub fn add(&mut self, product: Product) -> DomainResult<()> {
        let key = product.key();
        if self.records.contains_key(&key) {
            return Err(DomainError::conflict(format!(
                "product '{key}' already exists"
            )));
        }
        self.records.insert(key, product);
        Ok(())
    }

    /// Replace a record's price, preserving its quantity.
    pub fn update_price(
        &mut self,
        key: &CanonicalName,
        new_price: Price,
    ) -> DomainResult<PriceUpdate> {
        let product = self.records.get_mut(key).ok_or_else(DomainError::not_found)?;
        let old_price = product.replace_price(new_price);
        Ok(PriceUpdate {
            old_price,
            new_price,
            quantity: product.quantity(),
        })
    }

    /// Remove a record, returning it.
    pub fn remove(&mut self, key: &CanonicalName) -> DomainResult<Product> {
        self.records.remove(key).ok_or_else(DomainError::not_found)
    }

    /// Σ price × quantity over all records, in cents.
    pub fn total_value_cents(&self) -> u128 {
        self.records.values().map(Product::line_value_cents).sum()
    }

    /// Records in canonical-key order.
    pub fn iter(&self) -> impl Iterator<Item = (&CanonicalName, &Product)> {
        self.records.iter()
    }
}
