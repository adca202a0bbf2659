// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Streak and dashboard endpoint tests.

use axum::http::StatusCode;
use couple_sync::config::Config;
use serde_json::json;
use tower::ServiceExt;

mod common;
use common::{body_json, checkin, post_json};

fn june_history() -> Vec<serde_json::Value> {
    vec![
        checkin("c1", "alex", "2024-06-10"),
        checkin("c1", "sam", "2024-06-10"),
        checkin("c1", "alex", "2024-06-09"),
        checkin("c1", "sam", "2024-06-09"),
        checkin("c1", "alex", "2024-06-08"),
        checkin("c1", "sam", "2024-06-08"),
        checkin("c1", "alex", "2024-06-07"),
    ]
}

#[tokio::test]
async fn test_streak_endpoint() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(post_json(
            "/api/streak",
            json!({ "today": "2024-06-10", "checkins": june_history() }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "length": 3 }));
}

#[tokio::test]
async fn test_streak_endpoint_day_after() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(post_json(
            "/api/streak",
            json!({ "today": "2024-06-11", "checkins": june_history() }),
        ))
        .await
        .unwrap();

    assert_eq!(body_json(response).await["length"], 0);
}

#[tokio::test]
async fn test_streak_endpoint_empty_body_defaults() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(post_json("/api/streak", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["length"], 0);
}

#[tokio::test]
async fn test_malformed_checkin_date_is_not_an_error() {
    let (app, _) = common::create_test_app();
    let mut checkins = june_history();
    checkins.push(checkin("c1", "sam", "last tuesday"));

    let response = app
        .oneshot(post_json(
            "/api/streak",
            json!({ "today": "2024-06-10", "checkins": checkins }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["length"], 3);
}

#[tokio::test]
async fn test_invalid_today_rejected() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(post_json(
            "/api/streak",
            json!({ "today": "tomorrow", "checkins": [] }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "bad_request");
}

#[tokio::test]
async fn test_energy_out_of_range_rejected() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(post_json(
            "/api/streak",
            json!({
                "today": "2024-06-10",
                "checkins": [{
                    "couple_id": "c1",
                    "user_id": "alex",
                    "checkin_date": "2024-06-10",
                    "energy": 11
                }]
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_too_many_checkins_rejected() {
    let config = Config {
        max_checkins_per_request: 2,
        ..Config::default()
    };
    let (app, _) = common::create_test_app_with_config(config);

    let response = app
        .oneshot(post_json(
            "/api/streak",
            json!({ "today": "2024-06-10", "checkins": june_history() }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_dashboard_summary() {
    let (app, _) = common::create_test_app();
    let mut checkins = june_history();
    checkins.push(checkin("c2", "kim", "2024-06-10"));
    checkins.push(json!({
        "couple_id": "c1",
        "user_id": "alex",
        "checkin_date": "2024-06-10T21:00:00-07:00",
        "mood": "Feeling grateful",
        "energy": 8
    }));

    let response = app
        .oneshot(post_json(
            "/api/couples/c1/dashboard",
            json!({ "today": "2024-06-10", "checkins": checkins }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    assert_eq!(body["couple_id"], "c1");
    assert_eq!(body["today"], "2024-06-10");
    assert_eq!(body["checkin_streak"], 3);
    assert_eq!(body["love_streak"], 3);
    assert_eq!(body["today_complete"], true);
    assert_eq!(body["checked_in_today"], json!(["alex", "sam"]));
    assert_eq!(body["total_checkin_days"], 3);
    assert_eq!(body["last_checkin"]["date"], "2024-06-10");
    assert_eq!(
        body["last_checkin"]["partners"][0],
        json!({ "user_id": "alex", "mood": "Feeling grateful", "energy": 8 })
    );
}

#[tokio::test]
async fn test_dashboard_rejects_long_couple_id() {
    let (app, _) = common::create_test_app();
    let couple_id = "c".repeat(129);

    let response = app
        .oneshot(post_json(
            &format!("/api/couples/{couple_id}/dashboard"),
            json!({ "today": "2024-06-10", "checkins": [] }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_health_has_security_headers() {
    let (app, _) = common::create_test_app();

    let response = app.oneshot(common::get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get("x-frame-options").unwrap(), "DENY");
    assert_eq!(body_json(response).await["status"], "ok");
}

/// Two valid rows for today plus one extra row from the data layer.
fn today_with_extra_row(extra: serde_json::Value) -> serde_json::Value {
    json!({
        "today": "2024-06-10",
        "checkins": [
            checkin("c1", "alex", "2024-06-10"),
            checkin("c1", "sam", "2024-06-10"),
            extra,
        ]
    })
}

#[tokio::test]
async fn test_non_string_checkin_dates_are_skipped() {
    let extras = [
        json!({ "couple_id": "c1", "user_id": "sam", "checkin_date": null }),
        json!({ "couple_id": "c1", "user_id": "sam", "checkin_date": 20240610 }),
        json!({ "couple_id": "c1", "user_id": "sam" }),
    ];

    for extra in extras {
        let (app, _) = common::create_test_app();

        let response = app
            .oneshot(post_json("/api/streak", today_with_extra_row(extra.clone())))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "row {extra}");
        assert_eq!(body_json(response).await["length"], 1, "row {extra}");
    }
}

#[tokio::test]
async fn test_dashboard_skips_null_checkin_date() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(post_json(
            "/api/couples/c1/dashboard",
            today_with_extra_row(json!({
                "couple_id": "c1",
                "user_id": "alex",
                "checkin_date": null,
                "mood": "Lost"
            })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["checkin_streak"], 1);
    assert_eq!(body["last_checkin"]["partners"][0]["mood"], json!(null));
}

#[tokio::test]
async fn test_energy_too_large_for_type_is_json_bad_request() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(post_json(
            "/api/streak",
            today_with_extra_row(json!({
                "couple_id": "c1",
                "user_id": "sam",
                "checkin_date": "2024-06-10",
                "energy": 300
            })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "bad_request");
    assert!(body["details"].as_str().unwrap().contains("300"));
}

#[tokio::test]
async fn test_malformed_json_is_json_bad_request() {
    let (app, _) = common::create_test_app();

    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/couples/c1/dashboard")
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from("{\"checkins\": ["))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "bad_request");
}

#[tokio::test]
async fn test_today_must_be_plain_date() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(post_json(
            "/api/streak",
            json!({ "today": "2024-06-10T08:00:00Z", "checkins": [] }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
