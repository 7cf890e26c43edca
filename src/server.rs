//! Axum router and server setup.
//! Used by: main.

use std::net::SocketAddr;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post, MethodRouter};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

fn issue_route() -> MethodRouter<AppState> {
    post(handlers::issue::issue).fallback(handlers::issue::method_not_allowed)
}

/// Every path other than `/health` and `/metrics` is the issue endpoint.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.max_body_bytes;
    Router::new()
        .route("/", issue_route())
        .route("/*path", issue_route())
        .route("/health", get(handlers::health::health))
        .route("/metrics", get(handlers::metrics::metrics))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(state: AppState, listener: TcpListener) -> std::io::Result<()> {
    let router = build_router(state);
    axum::serve(listener, router.into_make_service_with_connect_info::<SocketAddr>()).await
}

pub async fn run(state: AppState, addr: &str) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", addr);
    serve(state, listener).await
}
