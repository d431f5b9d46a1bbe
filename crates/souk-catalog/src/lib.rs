//! Catalog queries for the Souk marketplace.
//!
//! A catalog query is a pure projection over a slice of items: filter by a
//! case-insensitive substring of the name, then order the survivors with a
//! stable sort. The input slice is never reordered or otherwise touched, so
//! two buyers browsing with different sort keys see consistent stock.
//!
//! # Key Types
//!
//! - [`SortKey`] — requested ordering, parsed leniently from a query token.
//! - [`query`] — filter-then-sort over `&[Item]`.

pub mod query;
pub mod sort;

pub use query::query;
pub use sort::SortKey;
