//! Inventory store module.
//!
//! The process-local mapping from canonical product name to product record,
//! plus the operations that mutate and aggregate it. No IO; callers own all
//! interaction.

pub mod store;

pub use store::{Inventory, PriceUpdate};
