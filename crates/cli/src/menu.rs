//! Top-level menu loop and dispatch.

use std::io::{self, BufRead, Write};

use tracing::debug;

use stockbook_inventory::Inventory;

use crate::console::Console;
use crate::flows;
use crate::style;

const OPTIONS: &str = "
1.➕ Add product
2.🔍 Search product
3.💲 Update product price
4.🗑️ Delete product
5.🧮 Calculate total inventory value
6.📦 View full inventory
7.🚪 Exit
";

/// Run the menu loop until the user picks exit.
///
/// Dispatch is an exact string match on the entered line; anything outside
/// `"1"`..`"7"` reports an invalid option and redisplays the menu. This is
/// the only way the program ends normally.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &mut Inventory,
) -> io::Result<()> {
    loop {
        console.say(&style::heading(
            "\n---------- 📊 Inventory Management Menu ----------",
        ))?;
        console.say(OPTIONS)?;
        let option =
            console.prompt("👉 Enter the number of the action you want to perform: ")?;
        debug!(option = option.as_str(), "menu choice");

        match option.as_str() {
            "1" => {
                console.say(&style::heading(
                    "\n➕ -------------------- ADD PRODUCT --------------------",
                ))?;
                flows::add_products(console, inventory)?;
            }
            "2" => {
                console.say(&style::heading(
                    "\n🔍 ----------------- SEARCH PRODUCT ------------------",
                ))?;
                let _ = flows::search_products(console, inventory)?;
            }
            "3" => {
                console.say(&style::heading(
                    "\n💲 ------------------ UPDATE PRICE -------------------",
                ))?;
                flows::update_prices(console, inventory)?;
            }
            "4" => {
                console.say(&style::heading(
                    "\n🗑️ ------------------ DELETE PRODUCT ------------------",
                ))?;
                flows::delete_products(console, inventory)?;
            }
            "5" => {
                console.say(&style::heading(
                    "\n🧮 -------- CALCULATE TOTAL INVENTORY VALUE --------",
                ))?;
                flows::report_total_value(console, inventory)?;
            }
            "6" => {
                console.say(&style::heading(
                    "\n📦 ------------------- VIEW INVENTORY ------------------",
                ))?;
                flows::list_inventory(console, inventory)?;
            }
            "7" => {
                console.say(&style::success(
                    "\n👋 Thank you for using the inventory management program. Goodbye!",
                ))?;
                return Ok(());
            }
            _ => console.say(&style::error(
                "\n❌ Invalid option. Please enter a number between 1 and 7.",
            ))?,
        }
    }
}
