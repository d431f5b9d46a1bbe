//! HTTP server for the Souk marketplace.
//!
//! A thin JSON API over the [`Market`] facade: each handler validates the
//! request shape, calls exactly one facade operation, and maps the typed
//! error onto an HTTP status. No session or application state lives in this
//! crate — the facade owns all of it, and the router just carries the
//! `Arc<Market>` handle.
//!
//! Error responses are `{ "error": "<message>" }`. Account payloads served
//! over HTTP never include the password field.
//!
//! [`Market`]: souk_market::Market

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use router::build_router;
pub use server::SoukServer;
