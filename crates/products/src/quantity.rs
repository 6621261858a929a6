//! Quantity value object.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use stockbook_core::ValueObject;

/// Upper bound on units in stock for a single record.
pub const MAX_QUANTITY: u32 = 100_000_000;

/// Why a raw quantity was rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QuantityError {
    /// Not parseable as an integer (decimals included).
    #[error("not a whole number")]
    NotAnInteger,

    #[error("quantity must be greater than zero")]
    NotPositive,

    #[error("quantity exceeds the maximum allowed")]
    TooLarge,
}

/// A positive whole number of units in stock.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    /// Parse a raw integer input line into a quantity.
    pub fn parse(raw: &str) -> Result<Self, QuantityError> {
        let value: i64 = raw.trim().parse().map_err(|_| QuantityError::NotAnInteger)?;
        if value <= 0 {
            return Err(QuantityError::NotPositive);
        }
        if value > i64::from(MAX_QUANTITY) {
            return Err(QuantityError::TooLarge);
        }
        Ok(Self(value as u32))
    }

    pub fn units(&self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Quantity {
    type Err = QuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl ValueObject for Quantity {}
