//! Shared application state handed to every request handler.
//!
//! Bundles the database connection pool with the loaded configuration so the
//! router, the authorization gate, and the handlers all see the same world.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::Config;
use crate::database;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: Arc<Config>,
}

impl AppState {
    /// Loads configuration, opens the pool, and applies the schema.
    pub async fn new() -> Self {
        let config = Config::load();

        let pool = database::init_pool(&config.database_url)
            .await
            .expect("Database misconfigured!");
        database::run_migrations(&pool)
            .await
            .expect("Schema setup failed!");

        Self {
            pool,
            config: Arc::new(config),
        }
    }
}
