//! Snapshot persistence for the Souk marketplace.
//!
//! The whole market state (accounts, items, transactions) is persisted as a
//! single snapshot file that is rewritten wholesale after every mutation.
//! The snapshot is bincode behind a small checksummed header, so a torn or
//! tampered file is detected on load instead of silently restoring garbage.
//!
//! On-disk format:
//! ```text
//! [4 bytes: magic "SOUK"]
//! [2 bytes: format version (little-endian u16)]
//! [4 bytes: CRC32 of payload (little-endian u32)]
//! [N bytes: payload (bincode-serialized SnapshotData)]
//! ```
//!
//! Alongside the snapshot a plain-text export is rewritten for operators to
//! read. It is derived output only and is never parsed back.
//!
//! # Key Types
//!
//! - [`SnapshotData`] — the serialized unit: the three collections in order.
//! - [`SnapshotStore`] — owns the two paths; `save` / `load`.
//! - [`SnapshotError`] — typed load/save failures; a missing snapshot file
//!   is `Ok(None)`, not an error.

pub mod data;
pub mod error;
pub mod store;

pub use data::SnapshotData;
pub use error::{SnapshotError, SnapshotResult};
pub use store::SnapshotStore;
