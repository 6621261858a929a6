//! Retry-until-valid input drivers.
//!
//! The parse rules are pure functions in `stockbook-products`; each driver
//! here owns the interactive loop around one of them: prompt, parse, report
//! a classified message, repeat. Only valid input exits a loop; only an IO
//! failure aborts one.

use std::io::{self, BufRead, Write};

use stockbook_products::{NameError, Price, PriceError, ProductName, Quantity, QuantityError};

use crate::console::Console;
use crate::style;

/// Prompt until a valid product name is entered.
pub fn product_name<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> io::Result<ProductName> {
    loop {
        let raw = console.prompt("\n📝 Enter the product name: ")?;
        match ProductName::parse(&raw) {
            Ok(name) => return Ok(name),
            Err(NameError::TooLong) => console.say(&style::error(
                "❌ The product name must not exceed 25 characters.",
            ))?,
            Err(NameError::Invalid) => console.say(&style::warn(
                "⚠️ Only letters and spaces are allowed (including accents like á, é, ñ).",
            ))?,
        }
    }
}

/// Prompt until a valid price is entered.
pub fn price<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<Price> {
    loop {
        let raw = console.prompt("\n💰 Enter the product price: ")?;
        match Price::parse(&raw) {
            Ok(price) => return Ok(price),
            Err(PriceError::NotANumber) => console.say(&style::warn(
                "⚠️ Invalid input. Please enter a valid number (e.g., 19.99).",
            ))?,
            Err(PriceError::NotPositive) => console.say(&style::error(
                "❌ Invalid price. The value must be greater than zero.",
            ))?,
            Err(PriceError::TooLarge) => console.say(&style::error(
                "❌ Price exceeds the maximum allowed ($1,000,000,000).",
            ))?,
        }
    }
}

/// Prompt until a valid quantity is entered.
pub fn quantity<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<Quantity> {
    loop {
        let raw = console.prompt("\n📦 Enter the available product quantity: ")?;
        match Quantity::parse(&raw) {
            Ok(quantity) => return Ok(quantity),
            Err(QuantityError::NotAnInteger) => console.say(&style::warn(
                "⚠️ Invalid input. Please enter a whole number (e.g., 15).",
            ))?,
            Err(QuantityError::NotPositive) => {
                console.say(&style::error("❌ Quantity must be greater than zero."))?
            }
            Err(QuantityError::TooLarge) => console.say(&style::error(
                "❌ Quantity exceeds the maximum allowed (100,000,000).",
            ))?,
        }
    }
}
