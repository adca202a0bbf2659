// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Daily check-in record as supplied by the data-access layer.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

use crate::time_utils::parse_checkin_date;

/// One partner's daily mood/energy submission.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CheckinRecord {
    /// Couple the submitting partner belongs to
    pub couple_id: String,
    /// Submitting partner
    pub user_id: String,
    /// Calendar date ("YYYY-MM-DD") or RFC3339 timestamp. Anything that is
    /// not a string (null, a number, missing) is kept as `None`.
    #[serde(default, deserialize_with = "lenient_date")]
    pub checkin_date: Option<String>,
    /// Free-text mood label (e.g. "Feeling grateful")
    #[serde(default)]
    pub mood: Option<String>,
    /// Self-rated energy
    #[serde(default)]
    #[validate(range(min = 1, max = 10))]
    pub energy: Option<u8>,
}

impl CheckinRecord {
    /// Calendar date of this check-in, or `None` if the date is malformed.
    pub fn date(&self) -> Option<NaiveDate> {
        self.checkin_date.as_deref().and_then(parse_checkin_date)
    }
}

/// Accept any JSON value for the date, keeping only strings.
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    }))
}
