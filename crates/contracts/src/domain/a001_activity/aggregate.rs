use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::common::AggregateId;

// ============================================================================
// ID Type
// ============================================================================

/// Identifier of an activity, unique within a displayed list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityId(pub i64);

impl ActivityId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for ActivityId {
    fn as_string(&self) -> String {
        self.0.as_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        i64::from_string(s)
            .map(ActivityId::new)
            .map_err(|e| format!("Invalid activity id: {}", e))
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Category
// ============================================================================

/// Activity tag. The set is open: anything a trip planner sends is kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityCategory(String);

impl ActivityCategory {
    pub const SPOT: &'static str = "spot";
    pub const RESTAURANT: &'static str = "restaurant";

    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn spot() -> Self {
        Self::new(Self::SPOT)
    }

    pub fn restaurant() -> Self {
        Self::new(Self::RESTAURANT)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Entry
// ============================================================================

/// A point of interest or restaurant shown as a card on a trip page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: ActivityId,
    pub name: String,

    #[serde(rename = "type")]
    pub category: ActivityCategory,

    /// Expected in 0.0..=5.0, not enforced
    pub rating: f64,
    pub country: String,

    /// Asset URL of the card picture
    pub image: String,
}

impl ActivityEntry {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        category: ActivityCategory,
        rating: f64,
        country: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: ActivityId::new(id),
            name: name.into(),
            category,
            rating,
            country: country.into(),
            image: image.into(),
        }
    }
}
