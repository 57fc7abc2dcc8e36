//! Handler functions for the menu-item review API.
//!
//! These functions process requests for review records, interact with the
//! persistence layer through `database::queries`, and format the responses.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDateTime;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::database::models::MenuItemReview;
use crate::database::queries;
use crate::errors::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct IdParams {
    pub id: i64,
}

/// Fields accepted when creating a new review. The review date also accepts
/// the legacy `localDateTime` parameter name.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMenuItemReview {
    pub item_id: i64,
    pub reviewer_email: String,
    pub stars: i32,
    pub comments: String,
    #[serde(alias = "localDateTime")]
    pub date_reviewed: NaiveDateTime,
}

pub async fn all_reviews(
    State(state): State<AppState>,
) -> Result<Json<Vec<MenuItemReview>>, ApiError> {
    let reviews = queries::find_all_menu_item_reviews(&state.pool).await?;

    Ok(Json(reviews))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
) -> Result<Json<MenuItemReview>, ApiError> {
    let review = queries::find_menu_item_review_by_id(&state.pool, params.id)
        .await?
        .ok_or_else(|| ApiError::not_found(MenuItemReview::NAME, params.id))?;

    Ok(Json(review))
}

pub async fn post_review(
    State(state): State<AppState>,
    Query(params): Query<NewMenuItemReview>,
) -> Result<Json<MenuItemReview>, ApiError> {
    info!(date_reviewed = %params.date_reviewed, "creating menu item review");

    let review = MenuItemReview {
        id: 0,
        item_id: params.item_id,
        reviewer_email: params.reviewer_email,
        stars: params.stars,
        comments: params.comments,
        date_reviewed: params.date_reviewed,
    };

    let saved = queries::insert_menu_item_review(&state.pool, review).await?;

    Ok(Json(saved))
}

pub async fn update_review(
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
    Json(incoming): Json<MenuItemReview>,
) -> Result<Json<MenuItemReview>, ApiError> {
    queries::find_menu_item_review_by_id(&state.pool, params.id)
        .await?
        .ok_or_else(|| ApiError::not_found(MenuItemReview::NAME, params.id))?;

    let updated = queries::update_menu_item_review(&state.pool, params.id, incoming).await?;

    Ok(Json(updated))
}

pub async fn delete_review(
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
) -> Result<Json<Value>, ApiError> {
    queries::find_menu_item_review_by_id(&state.pool, params.id)
        .await?
        .ok_or_else(|| ApiError::not_found(MenuItemReview::NAME, params.id))?;

    queries::delete_menu_item_review(&state.pool, params.id).await?;

    Ok(Json(json!({
        "message": format!("{} with id {} deleted", MenuItemReview::NAME, params.id),
    })))
}
