//! Core data types for the analytics dashboard
//!
//! - `Metric`: a named, pre-formatted analytics data point
//! - `Trend`: the direction badge attached to a metric

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::str::FromStr;
use thiserror::Error;

/// A single analytics metric as shown on the dashboard
///
/// `value` and `change` are display strings, already formatted by whoever
/// produced the record; the dashboard never does arithmetic on them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Metric {
    /// Unique within the active list, assigned at creation
    pub id: u32,
    /// Display label
    pub name: String,
    /// Pre-formatted current value (e.g. "45,234", "3m 24s")
    pub value: String,
    /// Pre-formatted signed change (e.g. "+12.5%")
    pub change: String,
    /// Direction of the change
    pub trend: Trend,
}

impl Metric {
    /// Create a new metric record
    pub fn new(
        id: u32,
        name: impl Into<String>,
        value: impl Into<String>,
        change: impl Into<String>,
        trend: Trend,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            value: value.into(),
            change: change.into(),
            trend,
        }
    }

    /// Case-insensitive substring match against the metric name
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}

/// Unrecognized trend name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown trend direction: {0}")]
pub struct ParseTrendError(pub String);

/// Trend direction of a metric
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

impl Trend {
    /// All trends, in the order the form's selector lists them
    pub fn all() -> &'static [Trend] {
        &[Trend::Up, Trend::Down, Trend::Neutral]
    }

    /// Human label used by the trend selector
    pub fn label(&self) -> &'static str {
        match self {
            Trend::Up => "Increasing",
            Trend::Down => "Decreasing",
            Trend::Neutral => "Neutral",
        }
    }

    /// Arrow glyph for cards and table rows
    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "↑",
            Trend::Down => "↓",
            Trend::Neutral => "→",
        }
    }

    pub fn is_up(&self) -> bool {
        matches!(self, Trend::Up)
    }

    /// Wire name (`up`, `down`, `neutral`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Trend {
    type Err = ParseTrendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Trend::Up),
            "down" => Ok(Trend::Down),
            "neutral" => Ok(Trend::Neutral),
            other => Err(ParseTrendError(other.to_string())),
        }
    }
}

/// Check that no two metrics share an id
pub fn ids_unique(metrics: &[Metric]) -> bool {
    let mut seen = HashSet::with_capacity(metrics.len());
    metrics.iter().all(|m| seen.insert(m.id))
}
