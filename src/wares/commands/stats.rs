use crate::commands::{CmdMessage, CmdResult, SalesStats};
use crate::error::Result;
use crate::model::{Inventory, Product};

/// Ranks the whole collection by sold count, descending, in one stable
/// sort; ties keep insertion order. Most sold is the head of that order,
/// least sold the tail.
pub fn run(inventory: &Inventory) -> Result<CmdResult> {
    if inventory.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("No inventory data to analyze."));
        return Ok(result);
    }

    let mut ranked: Vec<&Product> = inventory.iter().collect();
    ranked.sort_by(|a, b| b.sold_count.cmp(&a.sold_count));

    let stats = SalesStats {
        most_sold: ranked[0].clone(),
        least_sold: ranked[ranked.len() - 1].clone(),
    };
    Ok(CmdResult::default().with_stats(stats))
}
