// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod checkin;
pub mod date_idea;
pub mod streak;

pub use checkin::CheckinRecord;
pub use date_idea::{CategoryFilter, DateCategory, DateIdea};
pub use streak::{DashboardSummary, LastCheckin, PartnerCheckin, StreakResult};
