//! Module for database connection setup and common utilities.
//!
//! This module is responsible for initializing the database connection pool
//! and applying the schema on startup.

use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

pub mod models;
pub mod queries;

const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS recommendations ( \
         id INTEGER PRIMARY KEY AUTOINCREMENT, \
         requester_email TEXT, \
         professor_email TEXT, \
         explanation TEXT, \
         date_requested TEXT, \
         date_needed TEXT, \
         done INTEGER \
     )",
    "CREATE TABLE IF NOT EXISTS menu_item_reviews ( \
         id INTEGER PRIMARY KEY AUTOINCREMENT, \
         item_id INTEGER, \
         reviewer_email TEXT, \
         stars INTEGER, \
         comments TEXT, \
         date_reviewed TEXT \
     )",
    "CREATE TABLE IF NOT EXISTS dining_commons_menu_items ( \
         id INTEGER PRIMARY KEY AUTOINCREMENT, \
         dining_commons_code TEXT, \
         name TEXT, \
         station TEXT \
     )",
];

pub async fn init_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }

    Ok(())
}
