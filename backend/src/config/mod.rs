//! Central module for application-wide configuration settings.
//!
//! This module handles loading and managing configuration parameters such as
//! the database URL, server port, and the secret used to validate bearer
//! tokens.

use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub jwt_secret: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("PORT", "8080"),
            database_url: try_load("DATABASE_URL", "sqlite:campus.db?mode=rwc"),
            jwt_secret: require("JWT_SECRET"),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}

fn require(key: &str) -> String {
    env::var(key)
        .map_err(|e| {
            warn!("Failed to read {key}: {e}");
        })
        .expect("Environment misconfigured!")
}
