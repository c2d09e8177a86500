//! State Management
//!
//! Per-page dashboard state and the browser-side metric source.

pub mod dashboard;
pub mod source;

pub use dashboard::DashboardState;
