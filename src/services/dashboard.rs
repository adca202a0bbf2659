// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dashboard summary built from a couple's check-ins.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::models::{CheckinRecord, DashboardSummary, LastCheckin, PartnerCheckin};
use crate::services::streak::{daily_checkins, is_joint_day, streak_ending_at};

/// Summarize check-in data for the dashboard.
///
/// Only records belonging to `couple_id` and dated on or before `today` are
/// considered. Records with malformed dates are ignored.
pub fn summarize_dashboard(
    couple_id: &str,
    records: &[CheckinRecord],
    today: NaiveDate,
) -> DashboardSummary {
    let relevant: Vec<(NaiveDate, &CheckinRecord)> = records
        .iter()
        .filter(|r| r.couple_id == couple_id)
        .filter_map(|r| r.date().map(|date| (date, r)))
        .filter(|(date, _)| *date <= today)
        .collect();

    let by_date = daily_checkins(relevant.iter().map(|(_, r)| *r));

    let checkin_streak = streak_ending_at(&by_date, today);

    let mut checked_in_today: Vec<String> = by_date
        .get(&today)
        .map(|users| users.iter().map(|u| u.to_string()).collect())
        .unwrap_or_default();
    checked_in_today.sort();

    let today_complete = by_date.get(&today).is_some_and(is_joint_day);
    let total_checkin_days = by_date.values().filter(|users| is_joint_day(users)).count() as u32;

    let last_checkin = by_date
        .keys()
        .next_back()
        .map(|&date| last_checkin_on(date, &relevant));

    DashboardSummary {
        couple_id: couple_id.to_string(),
        today,
        checkin_streak,
        love_streak: checkin_streak,
        today_complete,
        checked_in_today,
        last_checkin,
        total_checkin_days,
    }
}

/// Each partner's latest record on `date`.
///
/// "Latest" is the last such record in input order, which is the order the
/// data-access layer returns rows in.
fn last_checkin_on(date: NaiveDate, records: &[(NaiveDate, &CheckinRecord)]) -> LastCheckin {
    let mut latest: BTreeMap<&str, &CheckinRecord> = BTreeMap::new();
    for (_, record) in records.iter().filter(|(d, _)| *d == date) {
        latest.insert(record.user_id.as_str(), *record);
    }

    LastCheckin {
        date,
        partners: latest
            .into_values()
            .map(|r| PartnerCheckin {
                user_id: r.user_id.clone(),
                mood: r.mood.clone(),
                energy: r.energy,
            })
            .collect(),
    }
}
