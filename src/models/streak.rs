// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Streak and dashboard summary models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Current streak of days on which both partners checked in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct StreakResult {
    /// Consecutive joint check-in days ending today (0 if today is missing)
    pub length: u32,
}

/// One partner's most recent check-in on the last check-in day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PartnerCheckin {
    pub user_id: String,
    pub mood: Option<String>,
    pub energy: Option<u8>,
}

/// The "Last Check-in" dashboard card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LastCheckin {
    pub date: NaiveDate,
    /// Partners who checked in that day, sorted by user id
    pub partners: Vec<PartnerCheckin>,
}

/// Everything the dashboard displays that is derived from check-ins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DashboardSummary {
    pub couple_id: String,
    pub today: NaiveDate,
    pub checkin_streak: u32,
    /// Same value as `checkin_streak` until a separate input exists
    pub love_streak: u32,
    /// Both partners have checked in today
    pub today_complete: bool,
    pub checked_in_today: Vec<String>,
    pub last_checkin: Option<LastCheckin>,
    /// Days (up to today) on which both partners checked in
    pub total_checkin_days: u32,
}
