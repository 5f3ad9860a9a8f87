//! # Storage Layer
//!
//! The [`InventoryStore`] trait abstracts where the inventory document lives.
//!
//! Implementations:
//!
//! - [`fs::FileStore`]: production storage, one pretty-printed JSON document
//!   at a path supplied at construction.
//! - [`memory::InMemoryStore`]: in-memory storage for tests, no persistence.
//!
//! The store holds no business logic. It loads and saves the whole
//! [`Inventory`] document; the command layer decides when to do either.

use crate::error::Result;
use crate::model::Inventory;

pub mod fs;
pub mod memory;

pub trait InventoryStore {
    /// Read the persisted inventory. A missing document is an empty
    /// inventory, not an error. Unreadable or malformed content is an
    /// error; callers decide how to recover (see `InventoryApi::open`).
    fn load(&self) -> Result<Inventory>;

    /// Serialize the full inventory, overwriting prior content.
    fn save(&mut self, inventory: &Inventory) -> Result<()>;
}
