// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Date planner routes.

use crate::error::{AppError, Result};
use crate::models::{CategoryFilter, DateIdea};
use crate::services::DatePlannerService;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/date-ideas", get(get_date_ideas))
        .route("/api/date-ideas/categories", get(get_categories))
        .route("/api/date-ideas/{id}", get(get_date_idea))
}

#[derive(Deserialize)]
struct DateIdeasQuery {
    /// Category name, or "All" (the default)
    category: Option<String>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DateIdeasResponse {
    pub category: String,
    pub ideas: Vec<DateIdea>,
}

async fn get_date_ideas(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DateIdeasQuery>,
) -> Result<Json<DateIdeasResponse>> {
    let filter: CategoryFilter = match params.category.as_deref() {
        Some(raw) => raw
            .parse::<CategoryFilter>()
            .map_err(|e: crate::models::date_idea::UnknownCategory| {
                AppError::BadRequest(e.to_string())
            })?,
        None => CategoryFilter::All,
    };

    let ideas: Vec<DateIdea> = state
        .date_planner
        .ideas(filter)
        .into_iter()
        .cloned()
        .collect();

    tracing::debug!(category = filter.as_str(), count = ideas.len(), "Listing date ideas");

    Ok(Json(DateIdeasResponse {
        category: filter.as_str().to_string(),
        ideas,
    }))
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

async fn get_categories() -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: DatePlannerService::categories()
            .into_iter()
            .map(String::from)
            .collect(),
    })
}

async fn get_date_idea(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DateIdea>> {
    state
        .date_planner
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Date idea {id} not found")))
}
