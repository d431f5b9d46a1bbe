//! Append-only transaction ledger for the Souk marketplace.
//!
//! Every completed purchase lands here as a [`Transaction`] carrying the
//! buyer, a snapshot of the item as it stood right after the stock decrement,
//! and the purchased quantity. Records are never edited or removed, so the
//! ledger reads back in exactly the order purchases happened.
//!
//! Recording never fails: purchase validation (stock, quantity) happens
//! before the ledger is touched, and only validated trades reach it.
//!
//! [`Transaction`]: souk_types::Transaction

pub mod ledger;

pub use ledger::TradeLedger;
