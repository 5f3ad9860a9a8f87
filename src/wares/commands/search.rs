use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Inventory, Product};

pub fn run(inventory: &Inventory, query: &str) -> Result<CmdResult> {
    let listed: Vec<Product> = inventory.search(query.trim()).cloned().collect();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info("No products found matching your query."));
    }
    Ok(result.with_listed(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Product;

    fn inventory() -> Inventory {
        Inventory::from_products(vec![
            Product::new("Widget".into(), "Tools".into(), 10, 2.5, 5),
            Product::new("Wing Nut".into(), "Hardware".into(), 50, 0.1, 20),
            Product::new("Gadget".into(), "Electronics".into(), 3, 19.99, 2),
        ])
    }

    #[test]
    fn matches_in_collection_order() {
        let inv = inventory();
        let result = run(&inv, "wi").unwrap();
        let names: Vec<_> = result.listed.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Widget", "Wing Nut"]);
    }

    #[test]
    fn matches_category_case_insensitively() {
        let inv = inventory();
        let result = run(&inv, "eLeCtRoNiCs").unwrap();
        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.listed[0].name, "Gadget");
    }

    #[test]
    fn empty_query_lists_every_product() {
        let inv = inventory();
        let result = run(&inv, "").unwrap();
        assert_eq!(result.listed.len(), 3);
    }

    #[test]
    fn no_match_reports_a_message() {
        let inv = inventory();
        let result = run(&inv, "anvil").unwrap();
        assert!(result.listed.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
