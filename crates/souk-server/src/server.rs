use std::sync::Arc;

use souk_market::Market;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::ServerResult;
use crate::router::build_router;

/// Souk marketplace server.
pub struct SoukServer {
    config: ServerConfig,
    market: Arc<Market>,
}

impl SoukServer {
    pub fn new(config: ServerConfig, market: Arc<Market>) -> Self {
        Self { config, market }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(Arc::clone(&self.market))
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = build_router(self.market);
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("souk server listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| crate::error::ServerError::Internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use souk_market::MarketConfig;

    #[test]
    fn server_construction() {
        let dir = tempfile::tempdir().unwrap();
        let market = Arc::new(Market::open(MarketConfig::in_dir(dir.path())).unwrap());
        let server = SoukServer::new(ServerConfig::default(), market);
        assert_eq!(server.config().bind_addr, "127.0.0.1:8080".parse().unwrap());
        let _router = server.router();
    }
}
