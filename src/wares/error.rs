use thiserror::Error;

#[derive(Error, Debug)]
pub enum WaresError {
    #[error("Product name cannot be empty")]
    EmptyName,

    #[error("Product '{0}' already exists")]
    DuplicateProduct(String),

    #[error("Product '{0}' not found")]
    ProductNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid action '{0}'. Type 'sell' or 'restock'")]
    InvalidAction(String),

    #[error("Quantity must be positive (got {0})")]
    InvalidAmount(i64),

    #[error("Insufficient stock: requested {requested}, only {available} available")]
    InsufficientStock { requested: i64, available: i64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WaresError>;
