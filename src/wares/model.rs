use crate::error::WaresError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One inventory record, uniquely identified by case-insensitive name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub category: String,
    pub quantity: i64,
    pub price: f64,
    pub low_stock_threshold: i64,
    pub sold_count: i64,
}

impl Product {
    pub fn new(
        name: String,
        category: String,
        quantity: i64,
        price: f64,
        low_stock_threshold: i64,
    ) -> Self {
        Self {
            name,
            category,
            quantity,
            price,
            low_stock_threshold,
            sold_count: 0,
        }
    }

    /// Strictly below threshold; a product exactly at its threshold is fine.
    pub fn is_low_stock(&self) -> bool {
        self.quantity < self.low_stock_threshold
    }

    /// Case-insensitive substring match against name or category.
    /// `query_lower` must already be lowercased.
    fn matches(&self, query_lower: &str) -> bool {
        self.name.to_lowercase().contains(query_lower)
            || self.category.to_lowercase().contains(query_lower)
    }
}

/// What to do with a product's stock in an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockAction {
    Sell,
    Restock,
}

impl FromStr for StockAction {
    type Err = WaresError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sell" => Ok(StockAction::Sell),
            "restock" => Ok(StockAction::Restock),
            other => Err(WaresError::InvalidAction(other.to_string())),
        }
    }
}

/// The full ordered collection of products for one session.
///
/// Insertion-ordered, at most one product per case-insensitive name.
/// Serializes transparently as a JSON array of product records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    products: Vec<Product>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Appends a product. Uniqueness is the caller's contract (see `contains`).
    pub fn push(&mut self, product: Product) {
        self.products.push(product);
    }

    pub fn find(&self, name: &str) -> Option<&Product> {
        let name_lower = name.to_lowercase();
        self.products
            .iter()
            .find(|p| p.name.to_lowercase() == name_lower)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Product> {
        let name_lower = name.to_lowercase();
        self.products
            .iter_mut()
            .find(|p| p.name.to_lowercase() == name_lower)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Lazy, restartable scan over products whose name or category contains
    /// `query` case-insensitively. An empty query matches everything.
    pub fn search<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a Product> + 'a {
        let query_lower = query.to_lowercase();
        self.products.iter().filter(move |p| p.matches(&query_lower))
    }

    /// Lazy scan over products strictly below their stock threshold.
    pub fn low_stock(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.is_low_stock())
    }

    /// Total inventory value: sum of quantity x price over all products.
    pub fn total_value(&self) -> f64 {
        self.products
            .iter()
            .map(|p| p.quantity as f64 * p.price)
            .sum()
    }
}
