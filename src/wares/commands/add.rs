use crate::commands::{persist, CmdMessage, CmdResult};
use crate::error::{Result, WaresError};
use crate::model::{Inventory, Product};
use crate::store::InventoryStore;

/// Operator input for a new product, already parsed to its field types.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub quantity: i64,
    pub price: f64,
    pub low_stock_threshold: i64,
}

pub fn run<S: InventoryStore>(
    store: &mut S,
    inventory: &mut Inventory,
    input: NewProduct,
) -> Result<CmdResult> {
    let name = input.name.trim().to_string();
    if name.is_empty() {
        return Err(WaresError::EmptyName);
    }
    if inventory.contains(&name) {
        return Err(WaresError::DuplicateProduct(name));
    }
    if input.quantity < 0 {
        return Err(WaresError::InvalidInput(format!(
            "quantity cannot be negative (got {})",
            input.quantity
        )));
    }
    if input.price < 0.0 {
        return Err(WaresError::InvalidInput(format!(
            "price cannot be negative (got {})",
            input.price
        )));
    }

    let product = Product::new(
        name,
        input.category.trim().to_string(),
        input.quantity,
        input.price,
        input.low_stock_threshold,
    );
    inventory.push(product.clone());

    let mut result = CmdResult::default().with_affected(vec![product.clone()]);
    result.add_message(CmdMessage::success(format!(
        "Product '{}' added successfully.",
        product.name
    )));
    persist(store, inventory, &mut result);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::fs::FileStore;
    use crate::store::memory::InMemoryStore;

    fn new_product(name: &str) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            category: "Tools".to_string(),
            quantity: 10,
            price: 2.5,
            low_stock_threshold: 5,
        }
    }

    #[test]
    fn adds_product_with_zero_sold_count() {
        let mut store = InMemoryStore::new();
        let mut inventory = Inventory::new();

        let result = run(&mut store, &mut inventory, new_product("Widget")).unwrap();

        assert_eq!(result.affected[0].name, "Widget");
        assert_eq!(result.affected[0].sold_count, 0);
        assert_eq!(inventory.len(), 1);
        // persisted immediately
        assert_eq!(store.saved().len(), 1);
    }

    #[test]
    fn trims_name_and_category() {
        let mut store = InMemoryStore::new();
        let mut inventory = Inventory::new();

        let mut input = new_product("  Widget  ");
        input.category = "  Tools  ".to_string();
        run(&mut store, &mut inventory, input).unwrap();

        let product = inventory.find("Widget").unwrap();
        assert_eq!(product.name, "Widget");
        assert_eq!(product.category, "Tools");
    }

    #[test]
    fn rejects_empty_name_without_mutation() {
        let mut store = InMemoryStore::new();
        let mut inventory = Inventory::new();

        let err = run(&mut store, &mut inventory, new_product("   ")).unwrap_err();
        assert!(matches!(err, WaresError::EmptyName));
        assert!(inventory.is_empty());
    }

    #[test]
    fn rejects_duplicate_name_case_insensitively() {
        let mut store = InMemoryStore::new();
        let mut inventory = Inventory::new();
        run(&mut store, &mut inventory, new_product("Gadget")).unwrap();

        let err = run(&mut store, &mut inventory, new_product("gadget")).unwrap_err();
        assert!(matches!(err, WaresError::DuplicateProduct(_)));
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn rejects_negative_quantity_and_price() {
        let mut store = InMemoryStore::new();
        let mut inventory = Inventory::new();

        let mut negative_quantity = new_product("A");
        negative_quantity.quantity = -1;
        assert!(matches!(
            run(&mut store, &mut inventory, negative_quantity),
            Err(WaresError::InvalidInput(_))
        ));

        let mut negative_price = new_product("B");
        negative_price.price = -0.5;
        assert!(matches!(
            run(&mut store, &mut inventory, negative_price),
            Err(WaresError::InvalidInput(_))
        ));

        assert!(inventory.is_empty());
    }

    #[test]
    fn negative_threshold_is_accepted() {
        let mut store = InMemoryStore::new();
        let mut inventory = Inventory::new();

        let mut input = new_product("Scrap");
        input.low_stock_threshold = -3;
        run(&mut store, &mut inventory, input).unwrap();

        assert_eq!(inventory.find("Scrap").unwrap().low_stock_threshold, -3);
    }

    #[test]
    fn failed_save_keeps_mutation_and_reports() {
        // Parent of the store path is a regular file, so saving must fail.
        let blocker = tempfile::NamedTempFile::new().unwrap();
        let mut store = FileStore::new(blocker.path().join("inventory.json"));
        let mut inventory = Inventory::new();

        let result = run(&mut store, &mut inventory, new_product("Widget")).unwrap();

        assert_eq!(inventory.len(), 1);
        assert!(result
            .messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Error)));
    }
}
