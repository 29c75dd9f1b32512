//! HTTP server combining all routes.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{http::HeaderValue, routing::get, Json, Router};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::auth::CredentialVerifier;

use super::asset_routes::{asset_routes, AssetState};
use super::auth_routes::{auth_routes, AuthState};
use super::config::HttpServerConfig;
use super::export_routes::{export_routes, ExportState};

/// HTTP server for the inventory tracker
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Assemble the server from its collaborators.
    ///
    /// `data_dir` is where the export output lands; `public_dir` holds the
    /// browser client served as the router fallback.
    pub fn new(
        config: HttpServerConfig,
        assets: AssetState,
        verifier: Arc<dyn CredentialVerifier>,
        data_dir: PathBuf,
        public_dir: PathBuf,
    ) -> Self {
        let router = Self::build_router(&config, assets, verifier, data_dir, public_dir);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(
        config: &HttpServerConfig,
        assets: AssetState,
        verifier: Arc<dyn CredentialVerifier>,
        data_dir: PathBuf,
        public_dir: PathBuf,
    ) -> Router {
        let assets = Arc::new(assets);
        let auth_state = Arc::new(AuthState { verifier });
        let export_state = Arc::new(ExportState {
            assets: assets.clone(),
            data_dir,
        });

        let cors = if config.cors_origins.is_empty() {
            // Same-origin client; permissive for development setups
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<HeaderValue> = config
                .cors_origins
                .iter()
                .filter_map(|s| match s.parse() {
                    Ok(origin) => Some(origin),
                    Err(_) => {
                        tracing::warn!(origin = %s, "ignoring unparseable CORS origin");
                        None
                    }
                })
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .route("/health", get(health_handler))
            .merge(auth_routes(auth_state))
            .nest("/api", asset_routes(assets).merge(export_routes(export_state)))
            .fallback_service(ServeDir::new(public_dir))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until shutdown.
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid socket address: {}", e),
            )
        })?;

        tracing::info!(%addr, "takip HTTP server listening");

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::StaticCredentials;
    use tempfile::TempDir;

    fn create_test_server(config: HttpServerConfig) -> HttpServer {
        let dir = TempDir::new().unwrap();
        let assets = AssetState::open(dir.path()).unwrap();
        HttpServer::new(
            config,
            assets,
            Arc::new(StaticCredentials::default()),
            dir.path().to_path_buf(),
            dir.path().join("public"),
        )
    }

    #[test]
    fn test_server_creation() {
        let server = create_test_server(HttpServerConfig::default());
        assert_eq!(server.socket_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_server_with_custom_port() {
        let server = create_test_server(HttpServerConfig::with_port(8080));
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_router_builds() {
        let server = create_test_server(HttpServerConfig::default());
        let _router = server.router();
    }

    #[test]
    fn test_router_builds_with_cors_origins() {
        let config = HttpServerConfig {
            cors_origins: vec!["http://localhost:5173".to_string()],
            ..Default::default()
        };
        let server = create_test_server(config);
        let _router = server.router();
    }

    #[test]
    fn test_unparseable_cors_origin_does_not_break_router() {
        // Warned about and skipped; the valid entries still apply.
        let config = HttpServerConfig {
            cors_origins: vec![
                "http://localhost:5173".to_string(),
                "not an origin\u{7f}".to_string(),
            ],
            ..Default::default()
        };
        let server = create_test_server(config);
        let _router = server.router();
    }
}
