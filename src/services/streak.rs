// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Consecutive joint check-in streak calculation.
//!
//! A day counts toward the streak only when both partners of the couple
//! checked in on it. The streak is the run of such days ending today.

use chrono::NaiveDate;
use std::collections::{BTreeMap, HashSet};

use crate::models::{CheckinRecord, StreakResult};

/// Number of distinct partners that must check in for a day to count.
pub const PARTNERS_PER_COUPLE: usize = 2;

/// Distinct users who checked in, keyed by calendar date.
pub type DailyCheckins<'a> = BTreeMap<NaiveDate, HashSet<&'a str>>;

/// Group records by calendar date, collecting the distinct user ids per day.
///
/// Records with a malformed date are skipped.
pub fn daily_checkins<'a, I>(records: I) -> DailyCheckins<'a>
where
    I: IntoIterator<Item = &'a CheckinRecord>,
{
    let mut by_date = DailyCheckins::new();
    for record in records {
        if let Some(date) = record.date() {
            by_date
                .entry(date)
                .or_default()
                .insert(record.user_id.as_str());
        }
    }
    by_date
}

/// Whether exactly both partners checked in.
pub fn is_joint_day(users: &HashSet<&str>) -> bool {
    users.len() == PARTNERS_PER_COUPLE
}

/// Length of the run of joint days ending at `today` in already-grouped data.
pub fn streak_ending_at(by_date: &DailyCheckins<'_>, today: NaiveDate) -> u32 {
    let mut length = 0;
    let mut day = today;

    // The run can never be longer than the number of dates present.
    for _ in 0..by_date.len() {
        if !by_date.get(&day).is_some_and(is_joint_day) {
            break;
        }
        length += 1;
        match day.pred_opt() {
            Some(prev) => day = prev,
            None => break,
        }
    }

    length
}

/// Compute the current streak for one couple's check-ins.
///
/// The caller is responsible for passing only a single couple's records.
/// Input order does not matter and duplicate check-ins by the same user on
/// the same day count once.
pub fn compute_streak(records: &[CheckinRecord], today: NaiveDate) -> StreakResult {
    let by_date = daily_checkins(records);
    StreakResult {
        length: streak_ending_at(&by_date, today),
    }
}
