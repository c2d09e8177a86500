//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod add_metric_modal;
pub mod loading;
pub mod metric_card;
pub mod metrics_table;
pub mod pagination;
pub mod sidebar;

pub use add_metric_modal::AddMetricModal;
pub use loading::TableSkeleton;
pub use metric_card::MetricCard;
pub use metrics_table::MetricsTable;
pub use pagination::PaginationControls;
pub use sidebar::Sidebar;
