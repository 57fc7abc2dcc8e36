//! Handler functions for the recommendation-request API.
//!
//! These functions process requests for recommendation records, interact with
//! the persistence layer through `database::queries`, and format the
//! responses.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDateTime;
use serde::Deserialize;
use tracing::info;

use crate::database::models::Recommendation;
use crate::database::queries;
use crate::errors::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct IdParams {
    pub id: i64,
}

/// Fields accepted when creating a new recommendation request. Dates arrive
/// in ISO-8601 combined form, e.g. `2022-01-03T00:00:00`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecommendation {
    pub requester_email: String,
    pub professor_email: String,
    pub explanation: String,
    pub date_requested: NaiveDateTime,
    pub date_needed: NaiveDateTime,
    pub done: bool,
}

pub async fn all_recommendations(
    State(state): State<AppState>,
) -> Result<Json<Vec<Recommendation>>, ApiError> {
    let recommendations = queries::find_all_recommendations(&state.pool).await?;

    Ok(Json(recommendations))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
) -> Result<Json<Recommendation>, ApiError> {
    let recommendation = queries::find_recommendation_by_id(&state.pool, params.id)
        .await?
        .ok_or_else(|| ApiError::not_found(Recommendation::NAME, params.id))?;

    Ok(Json(recommendation))
}

pub async fn post_recommendation(
    State(state): State<AppState>,
    Query(params): Query<NewRecommendation>,
) -> Result<Json<Recommendation>, ApiError> {
    info!(
        date_requested = %params.date_requested,
        date_needed = %params.date_needed,
        "creating recommendation"
    );

    let recommendation = Recommendation {
        id: 0,
        requester_email: params.requester_email,
        professor_email: params.professor_email,
        explanation: params.explanation,
        date_requested: params.date_requested,
        date_needed: params.date_needed,
        done: params.done,
    };

    let saved = queries::insert_recommendation(&state.pool, recommendation).await?;

    Ok(Json(saved))
}

pub async fn update_recommendation(
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
    Json(incoming): Json<Recommendation>,
) -> Result<Json<Recommendation>, ApiError> {
    info!(id = params.id, incoming = ?incoming, "updating recommendation");

    queries::find_recommendation_by_id(&state.pool, params.id)
        .await?
        .ok_or_else(|| ApiError::not_found(Recommendation::NAME, params.id))?;

    let updated = queries::update_recommendation(&state.pool, params.id, incoming).await?;

    Ok(Json(updated))
}
