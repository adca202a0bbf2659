// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Date idea model for the date planner.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Kind of date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum DateCategory {
    Outdoor,
    Indoor,
    Adventure,
    Relaxing,
    Creative,
}

impl DateCategory {
    pub const ALL: [DateCategory; 5] = [
        DateCategory::Outdoor,
        DateCategory::Indoor,
        DateCategory::Adventure,
        DateCategory::Relaxing,
        DateCategory::Creative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DateCategory::Outdoor => "Outdoor",
            DateCategory::Indoor => "Indoor",
            DateCategory::Adventure => "Adventure",
            DateCategory::Relaxing => "Relaxing",
            DateCategory::Creative => "Creative",
        }
    }
}

impl fmt::Display for DateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category selection in the planner ("All" or a single category).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(DateCategory),
}

impl CategoryFilter {
    pub fn matches(&self, category: DateCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown date category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        DateCategory::ALL
            .iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(name))
            .map(|c| CategoryFilter::Only(*c))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// A suggested date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DateIdea {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: DateCategory,
    /// Human-readable duration (e.g. "2-3 hours")
    pub duration: String,
    /// Cost tier ("$" to "$$$")
    pub cost: String,
    pub location: String,
    /// Average rating, 0.0 to 5.0
    pub rating: f32,
}
