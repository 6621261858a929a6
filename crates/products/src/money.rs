//! Price value object.
//!
//! Prices are stored in the smallest currency unit (cents) as integers, so
//! two-decimal precision is exact and arithmetic needs no float rounding.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use stockbook_core::ValueObject;

/// Upper bound: $1,000,000,000.00 in cents.
pub const MAX_PRICE_CENTS: u64 = 100_000_000_000;

/// Why a raw price was rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PriceError {
    #[error("not a number")]
    NotANumber,

    /// Zero or negative after rounding to cents.
    #[error("price must be greater than zero")]
    NotPositive,

    #[error("price exceeds the maximum allowed")]
    TooLarge,
}

/// A positive product price with two-decimal precision.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// Parse a raw decimal input line into a price.
    ///
    /// The value is rounded to cents **before** the bound checks, so
    /// `1000000000.004` rounds down into range and is accepted, while
    /// `0.004` rounds to zero and is rejected as not positive.
    pub fn parse(raw: &str) -> Result<Self, PriceError> {
        let value: f64 = raw.trim().parse().map_err(|_| PriceError::NotANumber)?;
        if value.is_nan() {
            return Err(PriceError::NotANumber);
        }
        let cents = (value * 100.0).round();
        if cents > MAX_PRICE_CENTS as f64 {
            return Err(PriceError::TooLarge);
        }
        if cents <= 0.0 {
            return Err(PriceError::NotPositive);
        }
        Ok(Self(cents as u64))
    }

    pub fn cents(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for Price {
    /// Always two decimals, no currency symbol.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl ValueObject for Price {}

/// Format an amount of cents as a two-decimal string.
///
/// Totals are `u128`: the per-record maximum (max price × max quantity) is
/// already near the top of `u64`, so sums are widened.
pub fn format_cents(cents: u128) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}
