use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use tokio::sync::oneshot;
use tower_http::trace::TraceLayer;
use tracing::{debug, error};

use crate::config::ProxyConfig;
use crate::error::AppError;
use crate::handlers;
use crate::upstream::UpstreamClient;

/// Axum application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ProxyConfig>,
    pub upstream: Arc<UpstreamClient>,
}

impl AppState {
    pub fn new(config: ProxyConfig) -> Self {
        let upstream = Arc::new(UpstreamClient::new(
            config.upstream_base_url.clone(),
            config.request_timeout,
        ));

        Self {
            config: Arc::new(config),
            upstream,
        }
    }
}

/// Build the application router. Separate from server startup so tests
/// can drive the routes without binding a listener.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/gemini",
            post(handlers::gemini::handle_generate).fallback(method_not_allowed),
        )
        .route(
            "/",
            get(handlers::page::handle_page).fallback(method_not_allowed),
        )
        .route(
            "/index.html",
            get(handlers::page::handle_page).fallback(method_not_allowed),
        )
        .route("/healthz", get(health_check_handler))
        .layer(DefaultBodyLimit::max(100 * 1024 * 1024))
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(
            crate::middleware::cors_middleware,
        ))
        .with_state(state)
}

/// Axum server instance
pub struct AxumServer {
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl AxumServer {
    /// Start Axum server
    pub async fn start(
        config: ProxyConfig,
    ) -> Result<(Self, tokio::task::JoinHandle<()>), String> {
        let addr = format!("{}:{}", config.get_bind_address(), config.port);
        let app = build_router(AppState::new(config));

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| format!("Failed to bind address {}: {}", addr, e))?;

        tracing::info!("Proxy server started at http://{}", addr);

        // Create shutdown channel
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

        let server_instance = Self {
            shutdown_tx: Some(shutdown_tx),
        };

        // Start server in new task
        let handle = tokio::spawn(async move {
            use hyper::server::conn::http1;
            use hyper_util::rt::TokioIo;
            use hyper_util::service::TowerToHyperService;

            loop {
                tokio::select! {
                    res = listener.accept() => {
                        match res {
                            Ok((stream, _)) => {
                                let io = TokioIo::new(stream);
                                let service = TowerToHyperService::new(app.clone());

                                tokio::task::spawn(async move {
                                    if let Err(err) = http1::Builder::new()
                                        .serve_connection(io, service)
                                        .await
                                    {
                                        debug!("Connection handling finished or errored: {:?}", err);
                                    }
                                });
                            }
                            Err(e) => {
                                error!("Failed to accept connection: {:?}", e);
                            }
                        }
                    }
                    _ = &mut shutdown_rx => {
                        tracing::info!("Proxy server stopped listening");
                        break;
                    }
                }
            }
        });

        Ok((server_instance, handle))
    }

    /// Stop server
    pub fn stop(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Health check handler
async fn health_check_handler() -> Response {
    Json(serde_json::json!({
        "status": "ok"
    }))
    .into_response()
}

/// Uniform 405 for methods the routes do not accept.
async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
