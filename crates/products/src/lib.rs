//! Products domain module.
//!
//! This crate contains the validated value objects a product record is made
//! of, implemented purely as deterministic domain logic (no IO, no terminal,
//! no storage).

pub mod canonical;
pub mod money;
pub mod name;
pub mod product;
pub mod quantity;

pub use canonical::CanonicalName;
pub use money::{format_cents, Price, PriceError, MAX_PRICE_CENTS};
pub use name::{NameError, ProductName, MAX_NAME_CHARS};
pub use product::Product;
pub use quantity::{Quantity, QuantityError, MAX_QUANTITY};
