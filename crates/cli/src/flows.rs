//! Interactive CRUD flows over the inventory store.
//!
//! Every flow is the same two-state loop: perform one action against the
//! store, then ask whether to go around again. All retries are
//! user-initiated; domain conflicts are informational, never fatal.

use std::io::{self, BufRead, Write};

use tracing::debug;

use stockbook_inventory::Inventory;
use stockbook_products::{format_cents, Price, Product, Quantity};

use crate::console::Console;
use crate::prompt;
use crate::style;

/// Add products until the user declines to continue.
///
/// A name whose canonical key is already taken reports the conflict and
/// skips the price/quantity prompts; the existing record is untouched.
pub fn add_products<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &mut Inventory,
) -> io::Result<()> {
    loop {
        let name = prompt::product_name(console)?;
        let key = name.canonical();
        if inventory.contains(&key) {
            console.say(&style::warn("⚠️ The product already exists."))?;
        } else {
            let price = prompt::price(console)?;
            let quantity = prompt::quantity(console)?;
            let display = name.capitalized();
            match inventory.add(Product::new(name, price, quantity)) {
                Ok(()) => {
                    debug!(key = %key, "product added");
                    console.say(&style::success(&format!(
                        "\n➕ The Product '{display}': (Price: ${price}, Quantity: {quantity} unit(s)) added successfully!"
                    )))?;
                }
                Err(err) => console.say(&style::warn(&format!("⚠️ {err}")))?,
            }
        }

        if !console.confirm(&style::warn(
            "\n➕ Add another product?\n(Press 'y' to add more / any other key to return to menu): ",
        ))? {
            return Ok(());
        }
    }
}

/// Search products until the user declines to continue.
///
/// Returns the price and quantity of the last record found, `None` if no
/// lookup succeeded.
pub fn search_products<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &Inventory,
) -> io::Result<Option<(Price, Quantity)>> {
    let mut last_found = None;
    loop {
        let name = prompt::product_name(console)?;
        match inventory.get(&name.canonical()) {
            Some(product) => {
                last_found = Some((product.price(), product.quantity()));
                console.say(&style::status("🔍 Product found!"))?;
                console.say(&style::success(&format!(
                    "-------------------------\n🛒 Name: {}\n💰 Price: ${}\n📦 Quantity available: {}",
                    product.name().capitalized(),
                    product.price(),
                    product.quantity()
                )))?;
            }
            None => console.say(&style::error(&format!(
                "❌ The product '{}' is not in the inventory.",
                name.as_str()
            )))?,
        }

        if !console.confirm(&style::warn(
            "\n🔍 Search for another product?\n(Press 'y' to continue / any other key to return to menu): ",
        ))? {
            return Ok(last_found);
        }
    }
}

/// Update product prices until the user declines to continue.
///
/// The new price is prompted only once the product is known to exist; a
/// missing name reports not-found and goes straight to the continue prompt.
pub fn update_prices<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &mut Inventory,
) -> io::Result<()> {
    loop {
        let name = prompt::product_name(console)?;
        let key = name.canonical();
        if inventory.contains(&key) {
            let new_price = prompt::price(console)?;
            match inventory.update_price(&key, new_price) {
                Ok(change) => {
                    debug!(key = %key, "price updated");
                    console.say(&style::status("💲 Product price updated!"))?;
                    console.say(&style::success(&format!(
                        "-------------------------\n🛒 Name: {}\n💸 Old price: ${}\n💰 New price: ${}\n📦 Quantity available: {}",
                        name.capitalized(),
                        change.old_price,
                        change.new_price,
                        change.quantity
                    )))?;
                }
                Err(err) => console.say(&style::error(&format!("❌ {err}")))?,
            }
        } else {
            console.say(&style::error(&format!(
                "\n❌ The product '{}' is not in the inventory.",
                name.as_str()
            )))?;
        }

        if !console.confirm(&style::warn(
            "\n💲 Update another product's price?\n(Press 'y' to continue / any other key to return to menu): ",
        ))? {
            return Ok(());
        }
    }
}

/// Delete products until the user declines to continue.
///
/// Removal requires an explicit `y` on the confirmation; anything else
/// leaves the record in place.
pub fn delete_products<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &mut Inventory,
) -> io::Result<()> {
    loop {
        let name = prompt::product_name(console)?;
        let key = name.canonical();
        if inventory.contains(&key) {
            if console.confirm(&style::warn(
                "\n👉 Do you really want to permanently delete this product? (y/n): ",
            ))? {
                match inventory.remove(&key) {
                    Ok(removed) => {
                        debug!(key = %key, "product deleted");
                        console.say(&style::success(&format!(
                            "🗑️ The product '{}' has been permanently deleted from the inventory.",
                            removed.name().capitalized()
                        )))?;
                    }
                    Err(err) => console.say(&style::error(&format!("❌ {err}")))?,
                }
            } else {
                console.say(&style::info(&format!(
                    "👉 The product '{}' was not deleted.",
                    name.capitalized()
                )))?;
            }
        } else {
            console.say(&style::error(&format!(
                "❌ The product '{}' is not in the inventory.",
                name.capitalized()
            )))?;
        }

        if !console.confirm(&style::warn(
            "\n🗑️ Delete another product?\n(Press 'y' to continue / any other key to return to menu): ",
        ))? {
            return Ok(());
        }
    }
}

/// Print the total inventory value (Σ price × quantity).
pub fn report_total_value<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &Inventory,
) -> io::Result<()> {
    let total = inventory.total_value_cents();
    console.say(&style::success(&format!(
        "\n💰 Total inventory value: ${}",
        format_cents(total)
    )))
}

/// Print the full inventory as a table, or an empty notice.
pub fn list_inventory<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &Inventory,
) -> io::Result<()> {
    if inventory.is_empty() {
        return console.say(&style::warn("\n⚠️ The inventory is empty."));
    }

    console.say(&style::warn(&format!(
        "\n{:<25}  {:<14}  {:<12}",
        "📋 Product Name", "💵 Price", "📦 Quantity"
    )))?;
    console.say(&"-".repeat(65))?;
    for (_, product) in inventory.iter() {
        console.say(&style::success(&format!(
            "{:<25}  $ {:<15}  {:<15}",
            product.name().capitalized(),
            product.price().to_string(),
            product.quantity().to_string()
        )))?;
    }
    Ok(())
}
