use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarketError {
    #[error("account not approved: {username}")]
    NotApproved { username: String },

    #[error("registry error: {0}")]
    Registry(#[from] souk_registry::RegistryError),

    #[error("inventory error: {0}")]
    Inventory(#[from] souk_inventory::InventoryError),

    #[error("snapshot error: {0}")]
    Snapshot(#[from] souk_snapshot::SnapshotError),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type MarketResult<T> = Result<T, MarketError>;
