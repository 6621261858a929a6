use anyhow::Result;

use stockbook_cli::Console;
use stockbook_inventory::Inventory;

fn main() -> Result<()> {
    stockbook_observability::init();

    // Explicit store, built once and passed through the menu loop; no global
    // state. Dropped (no-op) on exit.
    let mut inventory = Inventory::new();
    let mut console = Console::stdio();

    stockbook_cli::run(&mut console, &mut inventory)?;
    Ok(())
}
