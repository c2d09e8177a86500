//! Delayed metric source
//!
//! Wraps another source behind a browser timer so the loading placeholder is
//! shown before the data appears.

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;

use analytics::data::{LoadResult, MetricSource};
use analytics::metrics::Metric;

/// Waits `delay_ms` on the event loop, then delegates to `inner`
pub struct DelayedSource<S> {
    inner: S,
    delay_ms: u32,
}

impl<S> DelayedSource<S> {
    pub fn new(inner: S, delay_ms: u32) -> Self {
        Self { inner, delay_ms }
    }
}

#[async_trait(?Send)]
impl<S: MetricSource> MetricSource for DelayedSource<S> {
    async fn fetch(&self) -> LoadResult<Vec<Metric>> {
        if self.delay_ms > 0 {
            TimeoutFuture::new(self.delay_ms).await;
        }
        self.inner.fetch().await
    }
}
