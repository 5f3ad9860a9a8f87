use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Inventory;

pub fn run(inventory: &Inventory) -> Result<CmdResult> {
    Ok(CmdResult::default().with_total_value(inventory.total_value()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Product;

    #[test]
    fn empty_inventory_is_worth_zero() {
        let result = run(&Inventory::new()).unwrap();
        assert_eq!(result.total_value, Some(0.0));
    }

    #[test]
    fn sums_quantity_times_price() {
        let inv = Inventory::from_products(vec![
            Product::new("Widget".into(), "Tools".into(), 3, 2.5, 5),
            Product::new("Gadget".into(), "Electronics".into(), 2, 10.0, 2),
        ]);
        let result = run(&inv).unwrap();
        assert_eq!(result.total_value, Some(27.5));
    }
}
