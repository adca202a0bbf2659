// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Date idea catalog and category filtering.

use crate::models::{CategoryFilter, DateCategory, DateIdea};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const MAX_RATING: f32 = 5.0;

/// Service holding the date idea catalog.
#[derive(Debug, Clone)]
pub struct DatePlannerService {
    ideas: Vec<DateIdea>,
}

impl Default for DatePlannerService {
    fn default() -> Self {
        Self::builtin()
    }
}

impl DatePlannerService {
    /// The stock catalog shipped with the app.
    pub fn builtin() -> Self {
        Self {
            ideas: vec![
                DateIdea {
                    id: "1".to_string(),
                    title: "Sunset Picnic in the Park".to_string(),
                    description: "Pack your favorite snacks and watch the sunset together in a beautiful park setting.".to_string(),
                    category: DateCategory::Outdoor,
                    duration: "2-3 hours".to_string(),
                    cost: "$".to_string(),
                    location: "Local Park".to_string(),
                    rating: 4.8,
                },
                DateIdea {
                    id: "2".to_string(),
                    title: "Cooking Class for Two".to_string(),
                    description: "Learn to make pasta from scratch while enjoying wine and each other's company.".to_string(),
                    category: DateCategory::Indoor,
                    duration: "3-4 hours".to_string(),
                    cost: "$$$".to_string(),
                    location: "Culinary Studio".to_string(),
                    rating: 4.9,
                },
                DateIdea {
                    id: "3".to_string(),
                    title: "Stargazing Adventure".to_string(),
                    description: "Drive to a dark sky location with blankets and hot cocoa for a romantic night under the stars.".to_string(),
                    category: DateCategory::Outdoor,
                    duration: "4-5 hours".to_string(),
                    cost: "$".to_string(),
                    location: "Dark Sky Area".to_string(),
                    rating: 4.7,
                },
            ],
        }
    }

    /// Load a catalog from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, DatePlannerError> {
        let json_data = fs::read_to_string(path.as_ref())
            .map_err(|e| DatePlannerError::IoError(e.to_string()))?;
        Self::load_from_json(&json_data)
    }

    /// Load a catalog from a JSON array of ideas.
    pub fn load_from_json(json_data: &str) -> Result<Self, DatePlannerError> {
        let ideas: Vec<DateIdea> = serde_json::from_str(json_data)
            .map_err(|e| DatePlannerError::ParseError(e.to_string()))?;

        let mut seen = HashSet::new();
        for idea in &ideas {
            if !seen.insert(idea.id.as_str()) {
                return Err(DatePlannerError::DuplicateId(idea.id.clone()));
            }
            if !(0.0..=MAX_RATING).contains(&idea.rating) {
                return Err(DatePlannerError::InvalidRating {
                    id: idea.id.clone(),
                    rating: idea.rating,
                });
            }
        }

        tracing::info!(count = ideas.len(), "Loaded date ideas");
        Ok(Self { ideas })
    }

    /// Ideas matching the filter, in catalog order.
    pub fn ideas(&self, filter: CategoryFilter) -> Vec<&DateIdea> {
        self.ideas
            .iter()
            .filter(|idea| filter.matches(idea.category))
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&DateIdea> {
        self.ideas.iter().find(|idea| idea.id == id)
    }

    /// Category names offered by the planner, "All" first.
    pub fn categories() -> Vec<&'static str> {
        std::iter::once(CategoryFilter::All.as_str())
            .chain(DateCategory::ALL.iter().map(|c| c.as_str()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.ideas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ideas.is_empty()
    }
}

/// Errors from loading the date idea catalog.
#[derive(Debug, thiserror::Error)]
pub enum DatePlannerError {
    #[error("Failed to read file: {0}")]
    IoError(String),

    #[error("Failed to parse date ideas: {0}")]
    ParseError(String),

    #[error("Duplicate date idea id: {0}")]
    DuplicateId(String),

    #[error("Rating {rating} for date idea {id} is outside 0-5")]
    InvalidRating { id: String, rating: f32 },
}
