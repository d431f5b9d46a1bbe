//! Foundation types for the Souk marketplace.
//!
//! This crate provides the core data model shared by every other Souk crate:
//! who can act (accounts and roles), what is sold (items), and what happened
//! (transactions).
//!
//! # Key Types
//!
//! - [`Role`] — The three account roles: admin, owner, buyer
//! - [`Account`] — A registered identity with a role and an approval flag
//! - [`Item`] — A unit of inventory with name, price, and available quantity
//! - [`Transaction`] — An immutable record of a completed purchase
//!
//! Accounts are keyed by live position in the registry and items by name;
//! neither carries a surrogate identifier. Transactions embed a value
//! snapshot of the purchased item as it stood right after the purchase
//! decrement, so later edits or deletions never rewrite history.

pub mod account;
pub mod error;
pub mod item;
pub mod role;
pub mod transaction;

pub use account::Account;
pub use error::TypeError;
pub use item::Item;
pub use role::Role;
pub use transaction::Transaction;
