//! Core library for the Campus backend.
//!
//! This crate wires the Axum web server together: configuration, the SQLite
//! connection pool, the authorization gate, and the per-resource API routers.
//! The router is exported so integration tests can drive the full stack.

use axum::{middleware::from_fn_with_state, routing::get, Router};
use tokio::net::TcpListener;
use tokio::signal::{
    ctrl_c,
    unix::{signal, SignalKind},
};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

pub mod api;
pub mod auth;
pub mod config;
pub mod database;
pub mod errors;
pub mod middleware;
pub mod state;

use state::AppState;

/// Builds the full application router: resource routers nested under their
/// public prefixes, behind the authorization gate and CORS.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .nest("/api/recommendation", api::recommendation::routes::router())
        .nest("/api/MenuItemReview", api::menu_item_review::routes::router())
        .nest(
            "/api/UCSBDiningCommonsMenuItem",
            api::dining_commons_menu_item::routes::router(),
        )
        .layer(from_fn_with_state(state.clone(), auth::authorize))
        .layer(middleware::cors_layer())
        .with_state(state)
}

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = AppState::new().await;

    info!("Starting server...");
    let app = build_router(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    let listener = TcpListener::bind(&address).await.expect("Failed to bind");
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    info!("Server shutting down...");
}

async fn root_handler() -> &'static str {
    "Welcome to the Campus API!"
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
