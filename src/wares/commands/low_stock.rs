use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Inventory, Product};

pub fn run(inventory: &Inventory) -> Result<CmdResult> {
    let listed: Vec<Product> = inventory.low_stock().cloned().collect();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info(
            "No items are below their stock threshold.",
        ));
    }
    Ok(result.with_listed(listed))
}
