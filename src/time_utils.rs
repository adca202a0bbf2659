// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date handling.

use chrono::{DateTime, NaiveDate, Utc};

/// Parse a check-in date into a calendar date.
///
/// Accepts a plain `YYYY-MM-DD` date or an RFC3339 timestamp. For
/// timestamps the calendar date is taken in the timestamp's own offset.
/// Returns `None` for anything else.
pub fn parse_checkin_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Parse a strict `YYYY-MM-DD` reference date.
pub fn parse_reference_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Current calendar date in UTC.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}
