// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Check-in streak and dashboard routes.
//!
//! Check-in rows are fetched by the frontend's data layer and posted here;
//! nothing is stored.

use crate::error::{AppError, Result};
use crate::models::{CheckinRecord, DashboardSummary, StreakResult};
use crate::services::{compute_streak, summarize_dashboard};
use crate::time_utils::{parse_reference_date, today_utc};
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::post,
    Json, Router,
};
use axum_extra::extract::WithRejection;
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

const MAX_COUPLE_ID_LEN: usize = 128;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/streak", post(post_streak))
        .route("/api/couples/{couple_id}/dashboard", post(post_dashboard))
}

/// Check-in rows plus the reference date to count back from.
#[derive(Deserialize, Validate)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CheckinsRequest {
    /// Reference date ("YYYY-MM-DD"); defaults to the current UTC date
    #[serde(default)]
    pub today: Option<String>,
    #[serde(default)]
    #[validate(nested)]
    pub checkins: Vec<CheckinRecord>,
}

impl CheckinsRequest {
    /// Validate the request and resolve the reference date.
    fn validate_against(&self, state: &AppState) -> Result<NaiveDate> {
        let max = state.config.max_checkins_per_request;
        if self.checkins.len() > max {
            return Err(AppError::BadRequest(format!(
                "Too many check-ins: {} (max {max})",
                self.checkins.len()
            )));
        }

        self.validate()?;

        match self.today.as_deref() {
            Some(raw) => parse_reference_date(raw).ok_or_else(|| {
                AppError::BadRequest("Invalid 'today': must be YYYY-MM-DD".to_string())
            }),
            None => Ok(today_utc()),
        }
    }
}

/// Current streak over the posted check-ins.
///
/// The rows are assumed to already belong to a single couple.
async fn post_streak(
    State(state): State<Arc<AppState>>,
    WithRejection(Json(request), _): WithRejection<Json<CheckinsRequest>, AppError>,
) -> Result<Json<StreakResult>> {
    let today = request.validate_against(&state)?;
    let result = compute_streak(&request.checkins, today);

    tracing::debug!(
        checkins = request.checkins.len(),
        %today,
        streak = result.length,
        "Computed streak"
    );

    Ok(Json(result))
}

/// Dashboard summary for one couple.
async fn post_dashboard(
    State(state): State<Arc<AppState>>,
    Path(couple_id): Path<String>,
    WithRejection(Json(request), _): WithRejection<Json<CheckinsRequest>, AppError>,
) -> Result<Json<DashboardSummary>> {
    if couple_id.trim().is_empty() || couple_id.len() > MAX_COUPLE_ID_LEN {
        return Err(AppError::BadRequest(format!(
            "Invalid couple id: must be 1-{MAX_COUPLE_ID_LEN} characters"
        )));
    }

    let today = request.validate_against(&state)?;
    let summary = summarize_dashboard(&couple_id, &request.checkins, today);

    tracing::debug!(
        couple_id = %couple_id,
        checkins = request.checkins.len(),
        %today,
        streak = summary.checkin_streak,
        today_complete = summary.today_complete,
        "Built dashboard summary"
    );

    Ok(Json(summary))
}
