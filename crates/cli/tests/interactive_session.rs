//! Black-box tests: drive the assembled menu loop with scripted input and
//! assert on the rendered output plus the final store state.

use std::io::Cursor;

use stockbook_cli::Console;
use stockbook_inventory::Inventory;
use stockbook_products::{CanonicalName, Price, Quantity};

/// Run one full session over `script` (one input line per prompt) and return
/// the final inventory plus everything written to the terminal.
fn run_session(script: &str) -> (Inventory, String) {
    let mut inventory = Inventory::new();
    let output = run_session_with(&mut inventory, script);
    (inventory, output)
}

fn run_session_with(inventory: &mut Inventory, script: &str) -> String {
    let mut console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
    stockbook_cli::run(&mut console, inventory).expect("session should run to completion");
    String::from_utf8(console.into_output()).expect("output should be utf-8")
}

#[test]
fn add_then_total_value_reports_price_times_quantity() {
    // Add "Red Apple" at 1.5 x 10, then compute total value.
    let (inventory, output) = run_session("1\nRed Apple\n1.5\n10\nn\n5\n7\n");

    assert!(output.contains("added successfully"));
    assert!(output.contains("Total inventory value: $15.00"));
    assert_eq!(inventory.len(), 1);
}

#[test]
fn search_is_accent_and_case_insensitive() {
    // Add "café", then search for "CAFE".
    let (_, output) = run_session("1\ncafé\n2.5\n3\nn\n2\nCAFE\nn\n7\n");

    assert!(output.contains("Product found!"));
    assert!(output.contains("Name: Café"));
    assert!(output.contains("Price: $2.50"));
    assert!(output.contains("Quantity available: 3"));
}

#[test]
fn search_miss_reports_not_found() {
    let (_, output) = run_session("2\nWidget\nn\n7\n");
    assert!(output.contains("The product 'Widget' is not in the inventory."));
}

#[test]
fn duplicate_add_reports_conflict_and_keeps_the_original() {
    // Add "Café" at 2.00 x 5, then try adding "CAFE" again: the conflict is
    // reported before any price/quantity prompt and nothing changes.
    let (inventory, output) =
        run_session("1\nCafé\n2\n5\ny\nCAFE\nn\n7\n");

    assert!(output.contains("The product already exists."));
    assert_eq!(inventory.len(), 1);

    let kept = inventory.get(&CanonicalName::of("cafe")).unwrap();
    assert_eq!(kept.price(), Price::parse("2").unwrap());
    assert_eq!(kept.quantity(), Quantity::parse("5").unwrap());
}

#[test]
fn update_price_preserves_quantity() {
    let (inventory, output) =
        run_session("1\nBread\n1.10\n4\nn\n3\nbread\n1.35\nn\n7\n");

    assert!(output.contains("Product price updated!"));
    assert!(output.contains("Old price: $1.10"));
    assert!(output.contains("New price: $1.35"));
    assert!(output.contains("Quantity available: 4"));

    let stored = inventory.get(&CanonicalName::of("bread")).unwrap();
    assert_eq!(stored.price(), Price::parse("1.35").unwrap());
    assert_eq!(stored.quantity(), Quantity::parse("4").unwrap());
}

#[test]
fn update_price_of_missing_product_prompts_no_price_and_changes_nothing() {
    // "Widget" does not exist: the flow must go from the name straight to
    // the continue prompt, never asking for a price.
    let (inventory, output) = run_session("3\nWidget\nn\n7\n");

    assert!(output.contains("The product 'Widget' is not in the inventory."));
    assert!(!output.contains("Enter the product price"));
    assert!(inventory.is_empty());
}

#[test]
fn delete_declined_keeps_the_record() {
    // Confirm prompt answered "n": the record must survive.
    let (inventory, output) =
        run_session("1\nRed Apple\n1.5\n10\nn\n4\nRed Apple\nn\nn\n7\n");

    assert!(output.contains("was not deleted"));
    assert!(inventory.contains(&CanonicalName::of("red apple")));
}

#[test]
fn delete_confirmed_removes_the_record() {
    let (inventory, output) =
        run_session("1\nRed Apple\n1.5\n10\nn\n4\nred APPLE\ny\nn\n7\n");

    assert!(output.contains("has been permanently deleted"));
    assert!(inventory.is_empty());
}

#[test]
fn delete_of_missing_product_reports_not_found() {
    let (_, output) = run_session("4\nWidget\nn\n7\n");
    assert!(output.contains("is not in the inventory"));
}

#[test]
fn listing_shows_capitalized_names_and_empty_notice() {
    let (_, output) = run_session("6\n7\n");
    assert!(output.contains("The inventory is empty."));

    let (_, output) = run_session("1\nred apple\n1.5\n10\ny\nCafé\n2\n3\nn\n6\n7\n");
    assert!(output.contains("Product Name"));
    assert!(output.contains("Red apple"));
    assert!(output.contains("Café"));
}

#[test]
fn invalid_menu_option_redisplays_the_menu() {
    let (_, output) = run_session("9\n7\n");
    assert!(output.contains("Invalid option. Please enter a number between 1 and 7."));
    // Menu shown twice: once before the invalid choice, once after.
    assert_eq!(output.matches("Inventory Management Menu").count(), 2);
}

#[test]
fn exit_prints_a_farewell() {
    let (_, output) = run_session("7\n");
    assert!(output.contains("Goodbye!"));
}

#[test]
fn invalid_input_is_retried_until_valid_within_a_flow() {
    // Bad name, bad price, bad quantity; each re-prompts, then the add lands.
    let (inventory, output) =
        run_session("1\nApple 99\nApple\nabc\n-2\n1.5\n0\n10\nn\n7\n");

    assert!(output.contains("Only letters and spaces are allowed"));
    assert!(output.contains("valid number"));
    assert!(output.contains("greater than zero"));
    assert!(output.contains("added successfully"));
    assert_eq!(inventory.len(), 1);
}

#[test]
fn total_value_sums_across_records() {
    let mut inventory = Inventory::new();
    run_session_with(&mut inventory, "1\nRed Apple\n1.5\n10\ny\nBread\n2\n2\nn\n7\n");
    let output = run_session_with(&mut inventory, "5\n7\n");
    assert!(output.contains("Total inventory value: $19.00"));
}
