//! Defines the HTTP routes for the menu-item review resource.
//!
//! The only resource with the full five-operation surface: list, get, create,
//! update, and delete.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/all", get(handlers::all_reviews))
        .route(
            "/",
            get(handlers::get_by_id)
                .put(handlers::update_review)
                .delete(handlers::delete_review),
        )
        .route("/post", post(handlers::post_review))
}
