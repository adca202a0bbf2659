// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Couple-Sync: shared dashboard logic for couples
//!
//! This crate computes joint daily check-in streaks and the dashboard
//! summary built on them, and serves the date planner catalog, behind a
//! small JSON API consumed by the mobile web frontend.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use services::DatePlannerService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub date_planner: DatePlannerService,
}
