use anyhow::Result;

use stockroom_service::SharedInventory;

/// Console session: exercise the store and print a final snapshot.
fn main() -> Result<()> {
    stockroom_observability::init();

    let inventory = SharedInventory::new();

    inventory.add("Milk", 10)?;
    inventory.add("milk", 5)?;
    inventory.add("Bread", 3)?;
    inventory.add("Cheese", 7)?;

    inventory.remove("MILK", 15)?;
    inventory.remove("milk", 1)?;
    inventory.remove("bread", 10)?;
    inventory.remove("cheese", 2)?;

    let snapshot = inventory.snapshot()?;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}
