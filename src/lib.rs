//! # Analytics
//!
//! Core of the Analytics Dashboard: the metric model, the in-memory seed
//! data, and the search/pagination/modal state behind the dashboard page.
//! The Leptos front end in `analytics-ui` renders these types; everything
//! here is plain Rust and runs on the host for testing.
//!
//! ## Modules
//!
//! - [`metrics`]: `Metric`, `Trend` and the four-record seed list
//! - [`data`]: loader contract and load lifecycle
//! - [`view`]: filter, paginator, modal and the dashboard view model
//! - [`shell`]: sidebar navigation table
//! - [`config`]: TOML configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use analytics::data::LoadState;
//! use analytics::metrics::seed_metrics;
//! use analytics::view::DashboardView;
//!
//! let mut view = DashboardView::default();
//! view.finish_loading(LoadState::Ready(seed_metrics()));
//! view.set_query("bounce");
//!
//! assert_eq!(view.visible_rows().len(), 1);
//! assert_eq!(view.total_pages(), 1);
//! ```

pub mod config;
pub mod data;
pub mod metrics;
pub mod shell;
pub mod view;

pub use config::DashboardConfig;
pub use data::{load_metrics, LoadError, LoadState, MetricSource, SeedSource};
pub use metrics::{seed_metrics, Metric, Trend};
pub use view::DashboardView;
