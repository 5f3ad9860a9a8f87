use super::InventoryStore;
use crate::error::{Result, WaresError};
use crate::model::Inventory;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed storage: the whole inventory as one JSON document.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl InventoryStore for FileStore {
    fn load(&self) -> Result<Inventory> {
        if !self.path.exists() {
            return Ok(Inventory::new());
        }
        let content = fs::read_to_string(&self.path).map_err(WaresError::Io)?;
        let inventory: Inventory =
            serde_json::from_str(&content).map_err(WaresError::Serialization)?;
        Ok(inventory)
    }

    fn save(&mut self, inventory: &Inventory) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(WaresError::Io)?;
            }
        }
        let content = serde_json::to_string_pretty(inventory).map_err(WaresError::Serialization)?;
        fs::write(&self.path, content).map_err(WaresError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Product;

    fn sample_inventory() -> Inventory {
        let mut sold = Product::new("Widget".into(), "Tools".into(), 10, 2.5, 5);
        sold.sold_count = 8;
        Inventory::from_products(vec![
            sold,
            Product::new("Gadget".into(), "Electronics".into(), 3, 19.99, 2),
            Product::new("Ünicode Çrate".into(), "".into(), 0, 0.0, -4),
        ])
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("inventory.json"));
        let inventory = store.load().unwrap();
        assert!(inventory.is_empty());
    }

    #[test]
    fn round_trip_preserves_all_fields_and_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("inventory.json"));

        let original = sample_inventory();
        store.save(&original).unwrap();
        let reloaded = store.load().unwrap();

        assert_eq!(reloaded, original);
        let names: Vec<_> = reloaded.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Widget", "Gadget", "Ünicode Çrate"]);
    }

    #[test]
    fn round_trip_of_empty_inventory() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("inventory.json"));

        store.save(&Inventory::new()).unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn document_uses_the_stable_field_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        let mut store = FileStore::new(&path);

        store.save(&sample_inventory()).unwrap();
        let on_disk = fs::read_to_string(&path).unwrap();
        for field in [
            "\"name\"",
            "\"category\"",
            "\"quantity\"",
            "\"price\"",
            "\"low_stock_threshold\"",
            "\"sold_count\"",
        ] {
            assert!(on_disk.contains(field), "missing field {}", field);
        }
    }

    #[test]
    fn malformed_document_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(&path, "{ not json").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(
            store.load(),
            Err(WaresError::Serialization(_))
        ));
    }

    #[test]
    fn save_creates_missing_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("inventory.json");
        let mut store = FileStore::new(&path);

        store.save(&sample_inventory()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn save_overwrites_prior_content() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("inventory.json"));

        store.save(&sample_inventory()).unwrap();
        store.save(&Inventory::new()).unwrap();
        assert!(store.load().unwrap().is_empty());
    }
}
