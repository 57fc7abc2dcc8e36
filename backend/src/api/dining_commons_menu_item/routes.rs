//! Defines the HTTP routes for the dining-commons menu item resource.
//!
//! Only list, get, and create are routed; update and delete are intentionally
//! not exposed for this resource.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/all", get(handlers::all_menu_items))
        .route("/", get(handlers::get_by_id))
        .route("/post", post(handlers::post_menu_item))
}
