//! # API Facade
//!
//! [`InventoryApi`] is the single entry point for all inventory operations.
//! It owns the [`Inventory`] value and the storage backend, and dispatches
//! to the command layer. It never prints; every outcome comes back as a
//! [`CmdResult`] or a typed error for the caller to render.
//!
//! Generic over [`InventoryStore`] so the same facade runs against
//! `FileStore` in production and `InMemoryStore` in tests.

use crate::commands::{self, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Inventory, StockAction};
use crate::store::InventoryStore;

pub struct InventoryApi<S: InventoryStore> {
    store: S,
    inventory: Inventory,
}

impl<S: InventoryStore> InventoryApi<S> {
    /// Loads the persisted inventory and wraps it with the store.
    ///
    /// A missing document starts empty silently. An unreadable or malformed
    /// document also starts empty, but hands back a warning for the operator;
    /// its prior contents are discarded on the next save.
    // TODO: back up an unreadable document instead of overwriting it on the
    // next save (pending a product decision on the recovery story).
    pub fn open(store: S) -> (Self, Option<CmdMessage>) {
        match store.load() {
            Ok(inventory) => (Self { store, inventory }, None),
            Err(err) => {
                let warning = CmdMessage::warning(format!(
                    "Could not read saved inventory ({}). Starting with an empty inventory.",
                    err
                ));
                (
                    Self {
                        store,
                        inventory: Inventory::new(),
                    },
                    Some(warning),
                )
            }
        }
    }

    pub fn add_product(&mut self, input: commands::add::NewProduct) -> Result<CmdResult> {
        commands::add::run(&mut self.store, &mut self.inventory, input)
    }

    pub fn update_stock(
        &mut self,
        name: &str,
        action: StockAction,
        amount: i64,
    ) -> Result<CmdResult> {
        commands::stock::run(&mut self.store, &mut self.inventory, name, action, amount)
    }

    pub fn search(&self, query: &str) -> Result<CmdResult> {
        commands::search::run(&self.inventory, query)
    }

    pub fn low_stock(&self) -> Result<CmdResult> {
        commands::low_stock::run(&self.inventory)
    }

    pub fn total_value(&self) -> Result<CmdResult> {
        commands::value::run(&self.inventory)
    }

    pub fn sales_stats(&self) -> Result<CmdResult> {
        commands::stats::run(&self.inventory)
    }

    /// One final write of the full inventory, for clean exit.
    pub fn save(&mut self) -> Result<CmdResult> {
        self.store.save(&self.inventory)?;
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success("Inventory saved."));
        Ok(result)
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }
}
