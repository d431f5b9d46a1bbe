use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;

use souk_market::{InventoryError, MarketError, RegistryError};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("{0}")]
    Market(#[from] MarketError),

    #[error("{0}")]
    BadRequest(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

impl ServerError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Market(e) => market_status(e),
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Io(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

fn market_status(error: &MarketError) -> StatusCode {
    match error {
        MarketError::NotApproved { .. } => StatusCode::FORBIDDEN,
        MarketError::Registry(RegistryError::BadCredentials) => StatusCode::UNAUTHORIZED,
        MarketError::Registry(
            RegistryError::InvalidRole { .. } | RegistryError::IndexOutOfRange { .. },
        ) => StatusCode::BAD_REQUEST,
        MarketError::Inventory(InventoryError::NotFound { .. }) => StatusCode::NOT_FOUND,
        MarketError::Inventory(InventoryError::InsufficientStock { .. }) => StatusCode::CONFLICT,
        MarketError::Inventory(InventoryError::InvalidQuantity) => StatusCode::BAD_REQUEST,
        MarketError::Snapshot(_) | MarketError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
