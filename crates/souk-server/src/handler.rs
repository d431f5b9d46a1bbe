use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use souk_market::{Account, Item, Market, Role, SortKey, Transaction};

use crate::error::{ServerError, ServerResult};

// ---- Request / response types ----

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub role: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Body for both listing a new item and editing an existing one. On an
/// edit, `name` is the item's new name; the old name rides in the path.
#[derive(Debug, Deserialize)]
pub struct ItemRequest {
    pub name: String,
    pub price: u64,
    pub quantity: u32,
}

#[derive(Debug, Deserialize)]
pub struct PurchaseRequest {
    pub buyer: String,
    pub item: String,
    pub quantity: u32,
}

#[derive(Debug, Deserialize)]
pub struct CatalogParams {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub sort: String,
}

#[derive(Debug, Deserialize)]
pub struct TransactionsParams {
    pub buyer: Option<String>,
}

/// Account as served over HTTP. The password never leaves the process.
#[derive(Debug, Serialize)]
pub struct AccountView {
    pub username: String,
    pub role: Role,
    pub approved: bool,
}

impl From<Account> for AccountView {
    fn from(account: Account) -> Self {
        Self {
            username: account.username,
            role: account.role,
            approved: account.approved,
        }
    }
}

// ---- Health ----

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "version": env!("CARGO_PKG_VERSION") }))
}

// ---- Accounts ----

pub async fn register(
    State(market): State<Arc<Market>>,
    Json(req): Json<RegisterRequest>,
) -> ServerResult<(StatusCode, Json<AccountView>)> {
    let account = market.register(&req.username, &req.password, &req.role)?;
    Ok((StatusCode::CREATED, Json(account.into())))
}

pub async fn login(
    State(market): State<Arc<Market>>,
    Json(req): Json<LoginRequest>,
) -> ServerResult<Json<AccountView>> {
    let account = market.login(&req.username, &req.password)?;
    Ok(Json(account.into()))
}

pub async fn accounts(State(market): State<Arc<Market>>) -> ServerResult<Json<Vec<AccountView>>> {
    let views = market
        .accounts()?
        .into_iter()
        .map(AccountView::from)
        .collect();
    Ok(Json(views))
}

pub async fn approve_account(
    State(market): State<Arc<Market>>,
    Path(index): Path<usize>,
) -> ServerResult<StatusCode> {
    market.approve_account(index)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_account(
    State(market): State<Arc<Market>>,
    Path(index): Path<usize>,
) -> ServerResult<StatusCode> {
    market.delete_account(index)?;
    Ok(StatusCode::NO_CONTENT)
}

// ---- Items ----

pub async fn items(State(market): State<Arc<Market>>) -> ServerResult<Json<Vec<Item>>> {
    Ok(Json(market.items()?))
}

pub async fn add_item(
    State(market): State<Arc<Market>>,
    Json(req): Json<ItemRequest>,
) -> ServerResult<(StatusCode, Json<Item>)> {
    let item = market.add_item(&req.name, req.price, req.quantity)?;
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn edit_item(
    State(market): State<Arc<Market>>,
    Path(name): Path<String>,
    Json(req): Json<ItemRequest>,
) -> ServerResult<StatusCode> {
    market.edit_item(&name, &req.name, req.price, req.quantity)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_item(
    State(market): State<Arc<Market>>,
    Path(name): Path<String>,
) -> ServerResult<StatusCode> {
    market.delete_item(&name)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn catalog(
    State(market): State<Arc<Market>>,
    Query(params): Query<CatalogParams>,
) -> ServerResult<Json<Vec<Item>>> {
    let items = market.browse(&params.search, SortKey::parse(&params.sort))?;
    Ok(Json(items))
}

// ---- Trades ----

pub async fn purchase(
    State(market): State<Arc<Market>>,
    Json(req): Json<PurchaseRequest>,
) -> ServerResult<(StatusCode, Json<Transaction>)> {
    if req.quantity == 0 {
        return Err(ServerError::BadRequest(
            "quantity must be at least 1".into(),
        ));
    }
    let transaction = market.purchase(&req.buyer, &req.item, req.quantity)?;
    Ok((StatusCode::CREATED, Json(transaction)))
}

pub async fn transactions(
    State(market): State<Arc<Market>>,
    Query(params): Query<TransactionsParams>,
) -> ServerResult<Json<Vec<Transaction>>> {
    let transactions = match params.buyer {
        Some(buyer) => market.transactions_for_buyer(&buyer)?,
        None => market.transactions()?,
    };
    Ok(Json(transactions))
}
