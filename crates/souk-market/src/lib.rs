//! Unified market facade for Souk.
//!
//! [`Market`] owns the account registry, the inventory, and the trade ledger
//! behind a single mutex, and every operation runs under one acquisition of
//! that lock. Compound operations (a purchase mutates the inventory, appends
//! to the ledger, and persists) are therefore atomic with respect to every
//! other caller, and readers never observe a half-applied trade.
//!
//! Mutating operations write the snapshot through before returning. A failed
//! save is logged and swallowed — the in-memory state is authoritative for
//! the life of the process. Snapshot errors only surface from
//! [`Market::open`], which also guarantees the bootstrap contract: after it
//! returns, the registry holds a pre-approved admin account under the
//! configured well-known credential.
//!
//! # Key Types
//!
//! - [`Market`] — the facade; share it as `Arc<Market>`.
//! - [`MarketConfig`] — file paths and the bootstrap credential.
//! - [`MarketError`] — wraps the component errors, plus the approval gate.

pub mod config;
pub mod error;
pub mod market;

pub use config::MarketConfig;
pub use error::{MarketError, MarketResult};
pub use market::Market;

// Re-export key types
pub use souk_catalog::SortKey;
pub use souk_inventory::InventoryError;
pub use souk_registry::RegistryError;
pub use souk_snapshot::SnapshotError;
pub use souk_types::{Account, Item, Role, Transaction};
