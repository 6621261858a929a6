//! Interactive terminal frontend for the stockbook inventory tracker.
//!
//! All IO goes through [`Console`], which is generic over its reader and
//! writer so the whole session can be driven by scripted input in tests.
//! Validation rules live in `stockbook-products`; this crate only owns the
//! prompt/retry loops and presentation.

pub mod console;
pub mod flows;
pub mod menu;
pub mod prompt;
pub mod style;

pub use console::Console;
pub use menu::run;
