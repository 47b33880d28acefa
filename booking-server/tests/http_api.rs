//! Router-level tests: full axum stack over an in-memory SQLite store.

use std::str::FromStr;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use booking_server::api;
use booking_server::slots::Schedule;
use booking_server::state::{AppState, MIGRATOR};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

async fn test_app() -> Router {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();
    MIGRATOR.run(&pool).await.unwrap();

    api::create_router(AppState {
        pool,
        schedule: Schedule::default(),
    })
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn health_reports_ok() {
    let app = test_app().await;
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "booking-server");
}

#[tokio::test]
async fn rooms_are_listed_by_name() {
    let app = test_app().await;
    let (status, body) = get(&app, "/api/rooms").await;
    assert_eq!(status, StatusCode::OK);

    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Granen", "Lingon", "Tallen", "Vidablick"]);
    assert_eq!(body[0]["capacity"], 4);
}

#[tokio::test]
async fn free_slots_for_two_rooms_on_one_day() {
    let app = test_app().await;
    let (status, body) = get(
        &app,
        "/api/free-slots?from=2024-07-01&to=2024-07-01&roomIds=1,2",
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let slots = body.as_array().unwrap();
    assert_eq!(slots.len(), 18);
    assert_eq!(slots[0]["date"], "2024-07-01");
    assert_eq!(slots[0]["hour"], 8);
    assert_eq!(slots[0]["room"]["name"], "Granen");
}

#[tokio::test]
async fn free_slots_requires_range_bounds() {
    let app = test_app().await;
    let (status, body) = get(&app, "/api/free-slots?to=2024-07-01").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["details"]["from"].is_string());
}

#[tokio::test]
async fn free_slots_rejects_malformed_dates() {
    let app = test_app().await;
    let (status, body) = get(&app, "/api/free-slots?from=garbage&to=2024-07-01").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], 6);
}

#[tokio::test]
async fn booking_round_trip() {
    let app = test_app().await;

    let (status, body) = post_json(
        &app,
        "/api/bookings",
        json!({"roomId": 1, "date": "2024-07-01", "hour": 9, "bookerName": "Alice"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].as_i64().unwrap() > 0);
    assert_eq!(body["roomId"], 1);
    assert_eq!(body["bookerName"], "Alice");
    // 09:00 Europe/Stockholm in July is 07:00Z
    assert_eq!(body["startUtc"], "2024-07-01T07:00:00.000Z");
    assert_eq!(body["endUtc"], "2024-07-01T08:00:00.000Z");

    // The booked slot no longer shows up as free for room 1...
    let (_, free) = get(&app, "/api/free-slots?from=2024-07-01&to=2024-07-01&roomIds=1").await;
    assert_eq!(free.as_array().unwrap().len(), 8);
    assert!(
        !free
            .as_array()
            .unwrap()
            .iter()
            .any(|s| s["hour"] == 9)
    );

    // ...but still does for room 2.
    let (_, free) = get(&app, "/api/free-slots?from=2024-07-01&to=2024-07-01&roomIds=2").await;
    assert!(free.as_array().unwrap().iter().any(|s| s["hour"] == 9));
}

#[tokio::test]
async fn double_booking_yields_conflict() {
    let app = test_app().await;
    let payload = json!({"roomId": 1, "date": "2024-07-01", "hour": 9, "bookerName": "Alice"});

    let (status, _) = post_json(&app, "/api/bookings", payload.clone()).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = post_json(&app, "/api/bookings", payload).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 2001);
    assert_eq!(body["message"], "Slot already booked");
}

#[tokio::test]
async fn unknown_room_yields_referential_error() {
    let app = test_app().await;
    let (status, body) = post_json(
        &app,
        "/api/bookings",
        json!({"roomId": 999, "date": "2024-07-01", "hour": 9, "bookerName": "Alice"}),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], 1001);
}

#[tokio::test]
async fn invalid_fields_are_reported_with_details() {
    let app = test_app().await;
    let (status, body) = post_json(
        &app,
        "/api/bookings",
        json!({"roomId": 0, "date": "2024-07-01", "hour": 17, "bookerName": " a "}),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], 2);
    let details = body["details"].as_object().unwrap();
    assert!(details.contains_key("roomId"));
    assert!(details.contains_key("hour"));
    assert!(details.contains_key("bookerName"));
}
