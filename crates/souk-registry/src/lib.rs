//! Account registry for the Souk marketplace.
//!
//! Holds the ordered account collection and enforces the registration rules:
//! only `owner` and `buyer` roles may self-register, new accounts start
//! unapproved, and admin approval or deletion addresses accounts by their
//! live position in the collection.
//!
//! The registry is a plain in-memory structure with no interior locking;
//! serializing concurrent access is the caller's responsibility (the market
//! facade holds the one lock).

pub mod error;
pub mod registry;

pub use error::{RegistryError, RegistryResult};
pub use registry::AccountRegistry;
