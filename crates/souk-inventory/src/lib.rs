//! Inventory store for the Souk marketplace.
//!
//! Holds the ordered item collection and the mutation rules owners and
//! buyers exercise:
//!
//! - Items are appended unconditionally; names are not unique, and every
//!   name-keyed operation (edit, delete, purchase) affects the first match
//!   in insertion order.
//! - A purchase decrements stock in place and removes the item entirely when
//!   the decrement lands exactly on zero. The returned [`souk_types::Item`]
//!   is the post-decrement snapshot recorded into the transaction ledger.
//! - Editing is a wholesale field replace; editing a quantity down to zero
//!   keeps the item listed (removal on zero is a purchase-only rule).
//!
//! Like the registry, this is a plain in-memory structure; the market facade
//! owns the lock that serializes concurrent access.

pub mod error;
pub mod inventory;

pub use error::{InventoryError, InventoryResult};
pub use inventory::Inventory;
