// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod dashboard;
pub mod date_planner;
pub mod streak;

pub use dashboard::summarize_dashboard;
pub use date_planner::{DatePlannerError, DatePlannerService};
pub use streak::compute_streak;
