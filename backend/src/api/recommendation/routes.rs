//! Defines the HTTP routes for the recommendation-request resource.
//!
//! These routes map API paths to handler functions; the role each operation
//! requires is declared in the authorization route-policy table. Deletion is
//! intentionally not routed for this resource.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/all", get(handlers::all_recommendations))
        .route(
            "/",
            get(handlers::get_by_id).put(handlers::update_recommendation),
        )
        .route("/post", post(handlers::post_recommendation))
}
