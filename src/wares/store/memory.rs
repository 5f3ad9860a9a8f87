use super::InventoryStore;
use crate::error::Result;
use crate::model::Inventory;

/// In-memory storage for testing. Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    inventory: Inventory,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inventory(inventory: Inventory) -> Self {
        Self { inventory }
    }

    /// The last saved inventory, for asserting persistence in tests.
    pub fn saved(&self) -> &Inventory {
        &self.inventory
    }
}

impl InventoryStore for InMemoryStore {
    fn load(&self) -> Result<Inventory> {
        Ok(self.inventory.clone())
    }

    fn save(&mut self, inventory: &Inventory) -> Result<()> {
        self.inventory = inventory.clone();
        Ok(())
    }
}
