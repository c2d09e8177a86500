//! Dashboard View
//!
//! Pure state behind the dashboard page: search filter, paginator, modal and
//! the view model that ties them to the loaded metric list.

pub mod dashboard;
pub mod filter;
pub mod modal;
pub mod pagination;

pub use dashboard::DashboardView;
pub use filter::filter_metrics;
pub use modal::{AddMetricForm, FormError, MetricDraft, ModalState};
pub use pagination::{page_slice, total_pages, Pagination, PAGE_SIZE};
