use crate::commands::{persist, CmdMessage, CmdResult};
use crate::error::{Result, WaresError};
use crate::model::{Inventory, StockAction};
use crate::store::InventoryStore;

pub fn run<S: InventoryStore>(
    store: &mut S,
    inventory: &mut Inventory,
    name: &str,
    action: StockAction,
    amount: i64,
) -> Result<CmdResult> {
    if amount <= 0 {
        return Err(WaresError::InvalidAmount(amount));
    }

    let name = name.trim();
    let product = inventory
        .find_mut(name)
        .ok_or_else(|| WaresError::ProductNotFound(name.to_string()))?;

    let message = match action {
        StockAction::Sell => {
            if amount > product.quantity {
                return Err(WaresError::InsufficientStock {
                    requested: amount,
                    available: product.quantity,
                });
            }
            product.quantity -= amount;
            product.sold_count += amount;
            format!(
                "Sold {} of '{}'. New quantity: {}",
                amount, product.name, product.quantity
            )
        }
        StockAction::Restock => {
            product.quantity += amount;
            format!(
                "Restocked {} of '{}'. New quantity: {}",
                amount, product.name, product.quantity
            )
        }
    };
    let affected = product.clone();

    let mut result = CmdResult::default().with_affected(vec![affected]);
    result.add_message(CmdMessage::success(message));
    persist(store, inventory, &mut result);
    Ok(result)
}
