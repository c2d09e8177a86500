//! Metric model
//!
//! The dashboard's only entity and the fixed seed list standing in for a
//! real data source.

pub mod seed;
pub mod types;

pub use seed::seed_metrics;
pub use types::{ids_unique, Metric, ParseTrendError, Trend};
