//! Seed data
//!
//! The fixed in-memory dataset loaded by the dashboard.

use super::types::{Metric, Trend};

/// The four seed metrics, in display order
pub fn seed_metrics() -> Vec<Metric> {
    vec![
        Metric::new(1, "Page Views", "45,234", "+12.5%", Trend::Up),
        Metric::new(2, "Unique Visitors", "12,876", "+8.2%", Trend::Up),
        Metric::new(3, "Bounce Rate", "34.2%", "-2.1%", Trend::Down),
        Metric::new(4, "Avg Session", "3m 24s", "+15.3%", Trend::Up),
    ]
}
