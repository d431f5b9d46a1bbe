use std::sync::Arc;

use axum::routing::{delete, get, post, put};
use axum::Router;
use souk_market::Market;
use tower_http::trace::TraceLayer;

use crate::handler;

/// Build the axum router with all marketplace endpoints.
pub fn build_router(market: Arc<Market>) -> Router {
    Router::new()
        .route("/v1/health", get(handler::health))
        .route("/v1/register", post(handler::register))
        .route("/v1/login", post(handler::login))
        .route("/v1/accounts", get(handler::accounts))
        .route("/v1/accounts/:index/approve", post(handler::approve_account))
        .route("/v1/accounts/:index", delete(handler::delete_account))
        .route("/v1/items", get(handler::items).post(handler::add_item))
        .route(
            "/v1/items/:name",
            put(handler::edit_item).delete(handler::delete_item),
        )
        .route("/v1/catalog", get(handler::catalog))
        .route("/v1/purchases", post(handler::purchase))
        .route("/v1/transactions", get(handler::transactions))
        .layer(TraceLayer::new_for_http())
        .with_state(market)
}
