//! Database query functions (Data Access Objects).
//!
//! This module centralizes all direct database operations, providing reusable
//! functions for interacting with the database and abstracting the query logic
//! from higher-level API handlers. Each entity exposes the same shape of
//! operations; every mutation is one explicit call with no hidden
//! auto-persist.

use sqlx::SqlitePool;

use super::models::{MenuItemReview, Recommendation, UcsbDiningCommonsMenuItem};

// Recommendations

pub async fn find_all_recommendations(
    pool: &SqlitePool,
) -> Result<Vec<Recommendation>, sqlx::Error> {
    sqlx::query_as::<_, Recommendation>("SELECT * FROM recommendations")
        .fetch_all(pool)
        .await
}

pub async fn find_recommendation_by_id(
    pool: &SqlitePool,
    id: i64,
) -> Result<Option<Recommendation>, sqlx::Error> {
    sqlx::query_as::<_, Recommendation>("SELECT * FROM recommendations WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Inserts a new row and returns the stored record with the generated id.
pub async fn insert_recommendation(
    pool: &SqlitePool,
    recommendation: Recommendation,
) -> Result<Recommendation, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO recommendations \
         (requester_email, professor_email, explanation, date_requested, date_needed, done) \
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&recommendation.requester_email)
    .bind(&recommendation.professor_email)
    .bind(&recommendation.explanation)
    .bind(recommendation.date_requested)
    .bind(recommendation.date_needed)
    .bind(recommendation.done)
    .execute(pool)
    .await?;

    Ok(Recommendation {
        id: result.last_insert_rowid(),
        ..recommendation
    })
}

/// Overwrites every non-id column of the addressed row. The incoming record's
/// own id is ignored; the addressed id is preserved.
pub async fn update_recommendation(
    pool: &SqlitePool,
    id: i64,
    incoming: Recommendation,
) -> Result<Recommendation, sqlx::Error> {
    sqlx::query(
        "UPDATE recommendations \
         SET requester_email = ?, professor_email = ?, explanation = ?, \
             date_requested = ?, date_needed = ?, done = ? \
         WHERE id = ?",
    )
    .bind(&incoming.requester_email)
    .bind(&incoming.professor_email)
    .bind(&incoming.explanation)
    .bind(incoming.date_requested)
    .bind(incoming.date_needed)
    .bind(incoming.done)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(Recommendation { id, ..incoming })
}

// Menu item reviews

pub async fn find_all_menu_item_reviews(
    pool: &SqlitePool,
) -> Result<Vec<MenuItemReview>, sqlx::Error> {
    sqlx::query_as::<_, MenuItemReview>("SELECT * FROM menu_item_reviews")
        .fetch_all(pool)
        .await
}

pub async fn find_menu_item_review_by_id(
    pool: &SqlitePool,
    id: i64,
) -> Result<Option<MenuItemReview>, sqlx::Error> {
    sqlx::query_as::<_, MenuItemReview>("SELECT * FROM menu_item_reviews WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn insert_menu_item_review(
    pool: &SqlitePool,
    review: MenuItemReview,
) -> Result<MenuItemReview, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO menu_item_reviews \
         (item_id, reviewer_email, stars, comments, date_reviewed) \
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(review.item_id)
    .bind(&review.reviewer_email)
    .bind(review.stars)
    .bind(&review.comments)
    .bind(review.date_reviewed)
    .execute(pool)
    .await?;

    Ok(MenuItemReview {
        id: result.last_insert_rowid(),
        ..review
    })
}

pub async fn update_menu_item_review(
    pool: &SqlitePool,
    id: i64,
    incoming: MenuItemReview,
) -> Result<MenuItemReview, sqlx::Error> {
    sqlx::query(
        "UPDATE menu_item_reviews \
         SET item_id = ?, reviewer_email = ?, stars = ?, comments = ?, date_reviewed = ? \
         WHERE id = ?",
    )
    .bind(incoming.item_id)
    .bind(&incoming.reviewer_email)
    .bind(incoming.stars)
    .bind(&incoming.comments)
    .bind(incoming.date_reviewed)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(MenuItemReview { id, ..incoming })
}

pub async fn delete_menu_item_review(pool: &SqlitePool, id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM menu_item_reviews WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

// Dining commons menu items

pub async fn find_all_menu_items(
    pool: &SqlitePool,
) -> Result<Vec<UcsbDiningCommonsMenuItem>, sqlx::Error> {
    sqlx::query_as::<_, UcsbDiningCommonsMenuItem>("SELECT * FROM dining_commons_menu_items")
        .fetch_all(pool)
        .await
}

pub async fn find_menu_item_by_id(
    pool: &SqlitePool,
    id: i64,
) -> Result<Option<UcsbDiningCommonsMenuItem>, sqlx::Error> {
    sqlx::query_as::<_, UcsbDiningCommonsMenuItem>(
        "SELECT * FROM dining_commons_menu_items WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn insert_menu_item(
    pool: &SqlitePool,
    item: UcsbDiningCommonsMenuItem,
) -> Result<UcsbDiningCommonsMenuItem, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO dining_commons_menu_items (dining_commons_code, name, station) \
         VALUES (?, ?, ?)",
    )
    .bind(&item.dining_commons_code)
    .bind(&item.name)
    .bind(&item.station)
    .execute(pool)
    .await?;

    Ok(UcsbDiningCommonsMenuItem {
        id: result.last_insert_rowid(),
        ..item
    })
}
