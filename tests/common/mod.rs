// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{header, Request, Response};
use couple_sync::config::Config;
use couple_sync::routes::create_router;
use couple_sync::services::DatePlannerService;
use couple_sync::AppState;
use std::sync::Arc;

/// Create a test app with the built-in date catalog.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    create_test_app_with_config(Config::default())
}

#[allow(dead_code)]
pub fn create_test_app_with_config(config: Config) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState {
        config,
        date_planner: DatePlannerService::builtin(),
    });

    (create_router(state.clone()), state)
}

/// Build a JSON POST request.
#[allow(dead_code)]
pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a GET request.
#[allow(dead_code)]
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// A check-in row as the data layer would send it.
#[allow(dead_code)]
pub fn checkin(couple: &str, user: &str, date: &str) -> serde_json::Value {
    serde_json::json!({
        "couple_id": couple,
        "user_id": user,
        "checkin_date": date,
    })
}
