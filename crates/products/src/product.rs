//! The product record.

use serde::{Deserialize, Serialize};

use crate::canonical::CanonicalName;
use crate::money::Price;
use crate::name::ProductName;
use crate::quantity::Quantity;

/// A single inventory record: validated display name, price, and units in
/// stock.
///
/// All fields are validated value objects, so a constructed record always
/// satisfies the domain bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    name: ProductName,
    price: Price,
    quantity: Quantity,
}

impl Product {
    pub fn new(name: ProductName, price: Price, quantity: Quantity) -> Self {
        Self {
            name,
            price,
            quantity,
        }
    }

    pub fn name(&self) -> &ProductName {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// The canonical key this record is stored under.
    pub fn key(&self) -> CanonicalName {
        self.name.canonical()
    }

    /// Replace the price, keeping quantity unchanged. Returns the old price.
    pub fn replace_price(&mut self, new_price: Price) -> Price {
        core::mem::replace(&mut self.price, new_price)
    }

    /// price × quantity, in cents. Widened to `u128`: the maximum record
    /// value already sits near the top of `u64`.
    pub fn line_value_cents(&self) -> u128 {
        u128::from(self.price.cents()) * u128::from(self.quantity.units())
    }
}
