//! Dev server setup and dispatch.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::any,
    Router,
};
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::schema::{AppConfig, UpstreamConfig};
use crate::lifecycle::ShutdownSignal;
use crate::routing::{RouteTable, RouteTableError};
use crate::server::forward;

/// Overall request deadline for the dev server itself.
const SERVER_TIMEOUT: Duration = Duration::from_secs(30);

/// Minimal HTML document standing in for the built SPA entry point.
const SHELL: &str = "<!doctype html>\n<html>\n<head><meta charset=\"utf-8\"><title>novel-front</title></head>\n<body><div id=\"app\"></div></body>\n</html>\n";

/// Errors from constructing the dev server.
#[derive(Debug, Error)]
pub enum DevServerError {
    #[error(transparent)]
    Routes(#[from] RouteTableError),

    #[error("failed to build upstream http client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Application state injected into the dispatch handler.
#[derive(Clone)]
pub(super) struct AppState {
    pub routes: Arc<RouteTable>,
    pub upstream: UpstreamConfig,
    pub client: reqwest::Client,
}

/// The development server: `/api` proxy plus SPA history fallback.
pub struct DevServer {
    router: Router,
}

impl DevServer {
    /// Create a new dev server from a validated configuration.
    pub fn new(config: AppConfig) -> Result<Self, DevServerError> {
        let state = AppState {
            routes: Arc::new(RouteTable::standard()?),
            upstream: config.proxy.clone(),
            client: reqwest::Client::builder().build()?,
        };

        Ok(Self {
            router: Self::build_router(state),
        })
    }

    /// Build the Axum router with middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(dispatch))
            .route("/", any(dispatch))
            .with_state(state)
            .layer(TimeoutLayer::new(SERVER_TIMEOUT))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until Ctrl-C or the shutdown signal.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: ShutdownSignal,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "dev server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = shutdown.wait() => {}
                }
                tracing::info!("shutdown signal received");
            })
            .await?;

        tracing::info!("dev server stopped");
        Ok(())
    }
}

/// Route a request either to the upstream proxy or the SPA fallback.
async fn dispatch(State(state): State<AppState>, request: Request<Body>) -> Response {
    let path = request.uri().path().to_string();
    let prefix = state.upstream.path_prefix.as_str();

    if path == prefix || path.starts_with(&format!("{prefix}/")) {
        forward::forward(&state, request).await
    } else {
        spa_fallback(&state, &path)
    }
}

/// History fallback: serve the shell for any path the route table
/// resolves, platform-default 404 otherwise.
fn spa_fallback(state: &AppState, path: &str) -> Response {
    match state.routes.resolve(path) {
        Some(matched) => {
            tracing::debug!(
                page = %matched.page,
                params = ?matched.params,
                load = ?matched.load,
                "serving SPA shell"
            );
            (
                [("x-resolved-page", matched.page.name())],
                Html(SHELL),
            )
                .into_response()
        }
        None => {
            tracing::debug!(path = %path, "no route matched");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}
