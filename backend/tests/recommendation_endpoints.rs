//! End-to-end tests for the recommendation-request endpoints.

mod support;

use support::{admin_token, parse_json, send_request, spawn_app, user_token};

#[tokio::test]
async fn logged_out_users_cannot_get_all() {
    let app = spawn_app().await;

    let (status, _) = send_request(app.addr, "GET", "/api/recommendation/all", None, None).await;
    assert_eq!(status, 403);
}

#[tokio::test]
async fn logged_in_users_can_get_all() {
    let app = spawn_app().await;

    let (status, body) = send_request(
        app.addr,
        "GET",
        "/api/recommendation/all",
        Some(&user_token()),
        None,
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(parse_json(&body), serde_json::json!([]));
}

#[tokio::test]
async fn logged_out_users_cannot_get_by_id() {
    let app = spawn_app().await;

    let (status, _) = send_request(app.addr, "GET", "/api/recommendation?id=7", None, None).await;
    assert_eq!(status, 403);
}

#[tokio::test]
async fn logged_out_users_cannot_post() {
    let app = spawn_app().await;

    let (status, _) = send_request(app.addr, "POST", "/api/recommendation/post", None, None).await;
    assert_eq!(status, 403);
}

#[tokio::test]
async fn logged_in_regular_users_cannot_post() {
    let app = spawn_app().await;

    let (status, _) = send_request(
        app.addr,
        "POST",
        "/api/recommendation/post",
        Some(&user_token()),
        None,
    )
    .await;
    assert_eq!(status, 403);
}

async fn post_fixture(app: &support::TestApp) -> serde_json::Value {
    let (status, body) = send_request(
        app.addr,
        "POST",
        "/api/recommendation/post?requesterEmail=requester@ucsb.edu&professorEmail=professor@ucsb.edu&explanation=grad-school&dateRequested=2022-01-03T00:00:00&dateNeeded=2022-03-11T00:00:00&done=false",
        Some(&admin_token()),
        None,
    )
    .await;
    assert_eq!(status, 200);

    parse_json(&body)
}

#[tokio::test]
async fn an_admin_user_can_post_a_new_recommendation() {
    let app = spawn_app().await;

    let saved = post_fixture(&app).await;
    assert!(saved["id"].as_i64().expect("generated id") > 0);
    assert_eq!(saved["requesterEmail"], "requester@ucsb.edu");
    assert_eq!(saved["professorEmail"], "professor@ucsb.edu");
    assert_eq!(saved["explanation"], "grad-school");
    assert_eq!(saved["dateRequested"], "2022-01-03T00:00:00");
    assert_eq!(saved["dateNeeded"], "2022-03-11T00:00:00");
    assert_eq!(saved["done"], false);
}

#[tokio::test]
async fn logged_in_user_can_get_by_id_when_the_id_exists() {
    let app = spawn_app().await;

    let saved = post_fixture(&app).await;
    let id = saved["id"].as_i64().expect("generated id");

    let (status, body) = send_request(
        app.addr,
        "GET",
        &format!("/api/recommendation?id={id}"),
        Some(&user_token()),
        None,
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(parse_json(&body), saved);
}

#[tokio::test]
async fn get_by_id_returns_not_found_when_the_id_does_not_exist() {
    let app = spawn_app().await;

    let (status, body) = send_request(
        app.addr,
        "GET",
        "/api/recommendation?id=7",
        Some(&user_token()),
        None,
    )
    .await;
    assert_eq!(status, 404);

    let json = parse_json(&body);
    assert_eq!(json["type"], "EntityNotFoundException");
    assert_eq!(json["message"], "Recommendation with id 7 not found");
}

#[tokio::test]
async fn logged_in_user_can_get_all_recommendations() {
    let app = spawn_app().await;

    post_fixture(&app).await;
    post_fixture(&app).await;

    let (status, body) = send_request(
        app.addr,
        "GET",
        "/api/recommendation/all",
        Some(&user_token()),
        None,
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(parse_json(&body).as_array().expect("array").len(), 2);
}

#[tokio::test]
async fn an_admin_user_can_update_a_recommendation() {
    let app = spawn_app().await;

    let saved = post_fixture(&app).await;
    let id = saved["id"].as_i64().expect("generated id");

    // The payload's own id must be ignored in favor of the query parameter.
    let payload = serde_json::json!({
        "id": 9999,
        "requesterEmail": "other@ucsb.edu",
        "professorEmail": "chair@ucsb.edu",
        "explanation": "updated",
        "dateRequested": "2022-02-03T00:00:00",
        "dateNeeded": "2022-04-11T00:00:00",
        "done": true,
    });

    let (status, body) = send_request(
        app.addr,
        "PUT",
        &format!("/api/recommendation?id={id}"),
        Some(&admin_token()),
        Some(&payload.to_string()),
    )
    .await;
    assert_eq!(status, 200);

    let updated = parse_json(&body);
    assert_eq!(updated["id"].as_i64(), Some(id));
    assert_eq!(updated["requesterEmail"], "other@ucsb.edu");
    assert_eq!(updated["done"], true);

    let (status, body) = send_request(
        app.addr,
        "GET",
        &format!("/api/recommendation?id={id}"),
        Some(&user_token()),
        None,
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(parse_json(&body), updated);
}

#[tokio::test]
async fn updating_a_missing_recommendation_returns_not_found() {
    let app = spawn_app().await;

    let payload = serde_json::json!({
        "requesterEmail": "other@ucsb.edu",
        "professorEmail": "chair@ucsb.edu",
        "explanation": "updated",
        "dateRequested": "2022-02-03T00:00:00",
        "dateNeeded": "2022-04-11T00:00:00",
        "done": true,
    });

    let (status, body) = send_request(
        app.addr,
        "PUT",
        "/api/recommendation?id=67",
        Some(&admin_token()),
        Some(&payload.to_string()),
    )
    .await;
    assert_eq!(status, 404);

    let json = parse_json(&body);
    assert_eq!(json["message"], "Recommendation with id 67 not found");
}

#[tokio::test]
async fn logged_in_regular_users_cannot_update() {
    let app = spawn_app().await;

    let (status, _) = send_request(
        app.addr,
        "PUT",
        "/api/recommendation?id=1",
        Some(&user_token()),
        Some("{}"),
    )
    .await;
    assert_eq!(status, 403);
}

#[tokio::test]
async fn delete_is_not_routed_for_recommendations() {
    let app = spawn_app().await;

    let (status, _) = send_request(
        app.addr,
        "DELETE",
        "/api/recommendation?id=1",
        Some(&admin_token()),
        None,
    )
    .await;
    assert_eq!(status, 405);
}

#[tokio::test]
async fn trailing_slash_variants_are_still_gated() {
    let app = spawn_app().await;

    let (status, _) = send_request(app.addr, "GET", "/api/recommendation/", None, None).await;
    assert_eq!(status, 403);
}
