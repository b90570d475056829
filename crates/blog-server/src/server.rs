use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;
use crate::state::AppState;

/// Blog HTTP server.
pub struct BlogServer {
    config: ServerConfig,
    state: AppState,
}

impl BlogServer {
    /// Server over a fresh in-memory store using the configured rules.
    pub fn new(config: ServerConfig) -> Self {
        let state = AppState::in_memory(config.rules.clone());
        Self::with_state(config, state)
    }

    /// Server over caller-provided state (e.g. a different store backend).
    pub fn with_state(config: ServerConfig, state: AppState) -> Self {
        Self { config, state }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.state.clone())
    }

    /// Start serving requests until Ctrl-C.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("blog server listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use blog_service::PostRules;
    use blog_store::{InMemoryPostStore, PostStore};

    #[test]
    fn server_construction() {
        let server = BlogServer::new(ServerConfig::default());
        assert_eq!(server.config().bind_addr, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(server.state().service().rules(), &PostRules::default());
    }

    #[test]
    fn config_rules_reach_service() {
        let config = ServerConfig {
            rules: PostRules { min_content_len: 20 },
            ..Default::default()
        };
        let server = BlogServer::new(config);
        assert_eq!(server.state().service().rules().min_content_len, 20);
    }

    #[test]
    fn with_state_shares_the_callers_store() {
        let store: Arc<dyn PostStore> = Arc::new(InMemoryPostStore::new());
        let state = AppState::new(Arc::clone(&store), PostRules::default());
        let server = BlogServer::with_state(ServerConfig::default(), state);

        server
            .state()
            .service()
            .create_post("Shared", "visible to the caller")
            .unwrap();
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn router_builds() {
        let server = BlogServer::new(ServerConfig::default());
        let _router = server.router();
    }
}
