use thiserror::Error;

/// Errors produced by inventory operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// No item carries the given name.
    #[error("item not found: {name}")]
    NotFound { name: String },

    /// The requested purchase quantity exceeds the available stock.
    #[error("insufficient stock for {name}: requested {requested}, available {available}")]
    InsufficientStock {
        name: String,
        requested: u32,
        available: u32,
    },

    /// A purchase must take at least one unit.
    #[error("purchase quantity must be at least 1")]
    InvalidQuantity,
}

/// Result alias for inventory operations.
pub type InventoryResult<T> = Result<T, InventoryError>;
