//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod unavailable;

pub use dashboard::Dashboard;
pub use unavailable::Unavailable;
