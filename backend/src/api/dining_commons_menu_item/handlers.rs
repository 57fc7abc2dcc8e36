//! Handler functions for the dining-commons menu item API.
//!
//! These functions process requests for menu item records, interact with the
//! persistence layer through `database::queries`, and format the responses.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::database::models::UcsbDiningCommonsMenuItem;
use crate::database::queries;
use crate::errors::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct IdParams {
    pub id: i64,
}

/// Fields accepted when creating a new menu item.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMenuItem {
    pub dining_commons_code: String,
    pub name: String,
    pub station: String,
}

pub async fn all_menu_items(
    State(state): State<AppState>,
) -> Result<Json<Vec<UcsbDiningCommonsMenuItem>>, ApiError> {
    let menu_items = queries::find_all_menu_items(&state.pool).await?;

    Ok(Json(menu_items))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
) -> Result<Json<UcsbDiningCommonsMenuItem>, ApiError> {
    let menu_item = queries::find_menu_item_by_id(&state.pool, params.id)
        .await?
        .ok_or_else(|| ApiError::not_found(UcsbDiningCommonsMenuItem::NAME, params.id))?;

    Ok(Json(menu_item))
}

pub async fn post_menu_item(
    State(state): State<AppState>,
    Query(params): Query<NewMenuItem>,
) -> Result<Json<UcsbDiningCommonsMenuItem>, ApiError> {
    let menu_item = UcsbDiningCommonsMenuItem {
        id: 0,
        dining_commons_code: params.dining_commons_code,
        name: params.name,
        station: params.station,
    };

    let saved = queries::insert_menu_item(&state.pool, menu_item).await?;

    Ok(Json(saved))
}
