//! Dashboard Page State
//!
//! Reactive wrapper around `DashboardView`, provided to the page's children.

use leptos::*;

use analytics::data::{load_metrics, SeedSource};
use analytics::metrics::Metric;
use analytics::view::DashboardView;

use super::source::DelayedSource;

/// Dashboard state provided to the page's components
#[derive(Clone, Copy)]
pub struct DashboardState {
    /// The whole view model; mutate through `update`
    pub view: RwSignal<DashboardView>,
    /// Filtered metrics on the current page
    pub visible_rows: Memo<Vec<Metric>>,
    /// Page count for the current filter
    pub total_pages: Memo<usize>,
    /// Whether the loader is still running
    pub loading: Memo<bool>,
    /// User-facing load error, if the load failed
    pub load_error: Memo<Option<String>>,
}

/// Provide dashboard state to the component tree
pub fn provide_dashboard_state(page_size: usize) -> DashboardState {
    let view = create_rw_signal(DashboardView::new(page_size));
    let visible_rows = create_memo(move |_| view.with(|v| v.visible_rows()));
    let total_pages = create_memo(move |_| view.with(|v| v.total_pages()));
    let loading = create_memo(move |_| view.with(|v| v.load.is_loading()));
    let load_error =
        create_memo(move |_| view.with(|v| v.load.error().map(|e| e.to_string())));

    let state = DashboardState {
        view,
        visible_rows,
        total_pages,
        loading,
        load_error,
    };
    provide_context(state);
    state
}

impl DashboardState {
    /// Load the seed list after `delay_ms`
    ///
    /// Runs once. If the page is gone by the time the timer fires, the
    /// result is dropped.
    pub fn start_loading(&self, delay_ms: u32) {
        let view = self.view;
        spawn_local(async move {
            let source = DelayedSource::new(SeedSource, delay_ms);
            let state = load_metrics(&source).await;

            if view.try_update(|v| v.finish_loading(state)).is_none() {
                tracing::debug!("Dashboard unmounted before metrics loaded");
            }
        });
    }

    pub fn set_query(&self, query: String) {
        self.view.update(|v| v.set_query(query));
    }

    pub fn next_page(&self) {
        self.view.update(|v| {
            v.next_page();
        });
    }

    pub fn prev_page(&self) {
        self.view.update(|v| {
            v.prev_page();
        });
    }

    pub fn open_modal(&self) {
        self.view.update(|v| v.open_modal());
    }

    /// Open-change callback for the Add Metric dialog
    pub fn set_modal_open(&self, open: bool) {
        self.view.update(|v| v.set_modal_open(open));
    }
}
