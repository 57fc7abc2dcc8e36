//! Rust structs that represent database table mappings.
//!
//! These models define the structure of data as it is stored in and retrieved
//! from the database. Serialized field names follow the public API contract,
//! so the same structs double as response bodies and full-record payloads.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A request for a faculty recommendation letter.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    #[serde(default)]
    pub id: i64,
    pub requester_email: String,
    pub professor_email: String,
    pub explanation: String,
    pub date_requested: NaiveDateTime,
    pub date_needed: NaiveDateTime,
    pub done: bool,
}

impl Recommendation {
    /// Display name used in not-found messages.
    pub const NAME: &'static str = "Recommendation";
}

/// A star review of a dining-commons menu item. `item_id` is an opaque
/// reference resolved by the caller, not a foreign-key constraint.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemReview {
    #[serde(default)]
    pub id: i64,
    pub item_id: i64,
    pub reviewer_email: String,
    pub stars: i32,
    pub comments: String,
    pub date_reviewed: NaiveDateTime,
}

impl MenuItemReview {
    /// Display name used in not-found messages.
    pub const NAME: &'static str = "MenuItemReview";
}

/// A single menu item served at a UCSB dining commons station.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UcsbDiningCommonsMenuItem {
    #[serde(default)]
    pub id: i64,
    pub dining_commons_code: String,
    pub name: String,
    pub station: String,
}

impl UcsbDiningCommonsMenuItem {
    /// Display name used in not-found messages.
    pub const NAME: &'static str = "UCSBDiningCommonsMenuItem";
}
