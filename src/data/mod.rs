//! Data Loader
//!
//! Fetches the metric list once when the dashboard activates.
//!
//! The only shipped source is [`SeedSource`], which always succeeds. The
//! browser front end wraps it in a timer so the loading placeholder is
//! visible for a moment. Failure handling lives behind [`MetricSource`] so a
//! real data source can be dropped in later: on failure the loading flag
//! clears and the error message replaces the table. There is no retry.

pub mod error;

pub use error::{LoadError, LoadResult};

use async_trait::async_trait;

use crate::metrics::{ids_unique, seed_metrics, Metric};

/// A source of metric records
///
/// Futures are not required to be `Send`; browser timers and fetches are not.
#[async_trait(?Send)]
pub trait MetricSource {
    /// Fetch the full metric list
    async fn fetch(&self) -> LoadResult<Vec<Metric>>;
}

/// In-memory source returning the seed list
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedSource;

#[async_trait(?Send)]
impl MetricSource for SeedSource {
    async fn fetch(&self) -> LoadResult<Vec<Metric>> {
        Ok(seed_metrics())
    }
}

/// Loading lifecycle of the metric list
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Fetch in flight; show a placeholder
    #[default]
    Loading,
    /// Fetch failed; show the error text instead of the table
    Failed(LoadError),
    /// Metrics are available
    Ready(Vec<Metric>),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&LoadError> {
        match self {
            LoadState::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// Loaded metrics, empty unless `Ready`
    pub fn metrics(&self) -> &[Metric] {
        match self {
            LoadState::Ready(metrics) => metrics,
            _ => &[],
        }
    }
}

/// Run a single fetch against `source` and settle the load state
pub async fn load_metrics<S>(source: &S) -> LoadState
where
    S: MetricSource + ?Sized,
{
    tracing::debug!("Loading metrics");

    match source.fetch().await {
        Ok(metrics) => {
            if !ids_unique(&metrics) {
                tracing::warn!(count = metrics.len(), "Loaded metrics contain duplicate ids");
            }
            tracing::info!(count = metrics.len(), "Loaded metrics");
            LoadState::Ready(metrics)
        }
        Err(e) => {
            tracing::warn!(reason = e.reason(), "Failed to load metrics");
            LoadState::Failed(e)
        }
    }
}
