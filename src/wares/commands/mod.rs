use crate::model::{Inventory, Product};
use crate::store::InventoryStore;

pub mod add;
pub mod low_stock;
pub mod search;
pub mod stats;
pub mod stock;
pub mod value;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Most and least sold products, from one stable ranking pass.
#[derive(Debug, Clone)]
pub struct SalesStats {
    pub most_sold: Product,
    pub least_sold: Product,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Products created or mutated by the operation.
    pub affected: Vec<Product>,
    /// Read-only listings (search hits, low-stock report), collection order.
    pub listed: Vec<Product>,
    pub total_value: Option<f64>,
    pub stats: Option<SalesStats>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, products: Vec<Product>) -> Self {
        self.affected = products;
        self
    }

    pub fn with_listed(mut self, products: Vec<Product>) -> Self {
        self.listed = products;
        self
    }

    pub fn with_total_value(mut self, total: f64) -> Self {
        self.total_value = Some(total);
        self
    }

    pub fn with_stats(mut self, stats: SalesStats) -> Self {
        self.stats = Some(stats);
        self
    }
}

/// Write-behind for mutating commands. A failed save is reported on the
/// result but does not undo the mutation; the in-memory inventory stays
/// the source of truth until the next successful save.
pub(crate) fn persist<S: InventoryStore>(
    store: &mut S,
    inventory: &Inventory,
    result: &mut CmdResult,
) {
    if let Err(err) = store.save(inventory) {
        result.add_message(CmdMessage::error(format!(
            "Failed to save inventory: {}",
            err
        )));
    }
}
