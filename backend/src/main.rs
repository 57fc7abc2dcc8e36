//! Main entry point for the Campus backend.
//!
//! This binary hands off to the library crate, which initializes the Axum web
//! server, sets up the database connection pool, and registers all API routes
//! and middleware.

#[tokio::main]
async fn main() {
    campus_backend::start_server().await;
}
