//! Dashboard view model
//!
//! Owns everything the dashboard page mutates: the load state, the search
//! query, the current page and the Add Metric dialog. Derived values
//! (filtered list, page count, visible rows) are recomputed on demand.

use crate::data::LoadState;
use crate::metrics::Metric;

use super::filter::filter_metrics;
use super::modal::{AddMetricForm, FormError, MetricDraft, ModalState};
use super::pagination::{page_slice, total_pages, Pagination, PAGE_SIZE};

/// State of one dashboard page instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub load: LoadState,
    pub query: String,
    pub pagination: Pagination,
    pub modal: ModalState,
    pub form: AddMetricForm,
    page_size: usize,
}

impl Default for DashboardView {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl DashboardView {
    /// Fresh view in the loading state
    pub fn new(page_size: usize) -> Self {
        Self {
            load: LoadState::Loading,
            query: String::new(),
            pagination: Pagination::new(),
            modal: ModalState::default(),
            form: AddMetricForm::default(),
            page_size,
        }
    }

    /// Settle the loader result
    pub fn finish_loading(&mut self, state: LoadState) {
        self.load = state;
    }

    /// Replace the search query; the current page is kept as is
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        tracing::debug!(query = %self.query, "Search query changed");
    }

    /// Loaded metrics narrowed by the query
    pub fn filtered(&self) -> Vec<Metric> {
        filter_metrics(self.load.metrics(), &self.query)
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered().len(), self.page_size)
    }

    pub fn page(&self) -> usize {
        self.pagination.page()
    }

    pub fn next_page(&mut self) -> bool {
        let total = self.total_pages();
        self.pagination.next(total)
    }

    pub fn prev_page(&mut self) -> bool {
        self.pagination.prev()
    }

    pub fn can_prev(&self) -> bool {
        self.pagination.can_prev()
    }

    pub fn can_next(&self) -> bool {
        self.pagination.can_next(self.total_pages())
    }

    /// Rows for the table on the current page
    pub fn visible_rows(&self) -> Vec<Metric> {
        let filtered = self.filtered();
        page_slice(&filtered, self.pagination.page(), self.page_size).to_vec()
    }

    pub fn open_modal(&mut self) {
        self.modal.open();
    }

    /// Dialog open-change; closing discards whatever was typed
    pub fn set_modal_open(&mut self, open: bool) {
        self.modal.set_open(open);
        if !open {
            self.form = AddMetricForm::default();
        }
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal.is_open()
    }

    /// Validate the Add Metric form
    ///
    /// The draft is not added to the metric list; the caller only gets the
    /// validation outcome back.
    pub fn submit_form(&mut self) -> Result<MetricDraft, FormError> {
        let draft = self.form.validate()?;
        tracing::warn!(
            name = %draft.name,
            trend = %draft.trend,
            "Add Metric submitted; metric list is not updated"
        );
        Ok(draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::LoadError;
    use crate::metrics::{seed_metrics, Trend};

    fn ready_view() -> DashboardView {
        let mut view = DashboardView::default();
        view.finish_loading(LoadState::Ready(seed_metrics()));
        view
    }

    fn numbered(count: u32) -> Vec<Metric> {
        (1..=count)
            .map(|id| Metric::new(id, format!("Metric {}", id), "1", "+1%", Trend::Neutral))
            .collect()
    }

    #[test]
    fn test_loading_shows_no_rows() {
        let view = DashboardView::default();

        assert!(view.load.is_loading());
        assert!(view.visible_rows().is_empty());
        assert_eq!(view.total_pages(), 0);
    }

    #[test]
    fn test_ready_shows_seed_on_one_page() {
        let view = ready_view();

        assert_eq!(view.visible_rows(), seed_metrics());
        assert_eq!(view.total_pages(), 1);
        assert!(!view.can_prev());
        assert!(!view.can_next());
    }

    #[test]
    fn test_failed_load_shows_no_rows() {
        let mut view = DashboardView::default();
        view.finish_loading(LoadState::Failed(LoadError::unavailable("offline")));

        assert!(!view.load.is_loading());
        assert!(view.load.error().is_some());
        assert!(view.visible_rows().is_empty());
    }

    #[test]
    fn test_query_narrows_rows() {
        let mut view = ready_view();
        view.set_query("bounce");

        let rows = view.visible_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Bounce Rate");
    }

    #[test]
    fn test_query_set_while_loading_survives_load() {
        let mut view = DashboardView::default();
        view.set_query("visitors");
        view.finish_loading(LoadState::Ready(seed_metrics()));

        assert_eq!(view.query, "visitors");
        assert_eq!(view.visible_rows().len(), 1);
    }

    #[test]
    fn test_paging_through_larger_list() {
        let mut view = DashboardView::default();
        view.finish_loading(LoadState::Ready(numbered(12)));

        assert_eq!(view.total_pages(), 3);
        assert!(view.next_page());
        assert!(view.next_page());
        assert!(!view.next_page());
        assert_eq!(view.page(), 3);

        let ids: Vec<_> = view.visible_rows().iter().map(|m| m.id).collect();
        assert_eq!(ids, [11, 12]);
    }

    #[test]
    fn test_page_not_clamped_after_filter_shrinks() {
        let mut view = DashboardView::default();
        view.finish_loading(LoadState::Ready(numbered(12)));
        view.next_page();
        view.next_page();

        view.set_query("Metric 1");
        // Metric 1, Metric 10, Metric 11, Metric 12
        assert_eq!(view.total_pages(), 1);
        assert_eq!(view.page(), 3);
        assert!(view.visible_rows().is_empty());

        assert!(view.prev_page());
        assert!(view.prev_page());
        assert_eq!(view.visible_rows().len(), 4);
    }

    #[test]
    fn test_modal_toggle() {
        let mut view = ready_view();

        view.open_modal();
        assert!(view.is_modal_open());
        view.set_modal_open(false);
        assert!(!view.is_modal_open());
    }

    #[test]
    fn test_closing_modal_resets_form() {
        let mut view = ready_view();
        view.open_modal();
        view.form.name = "Signups".to_string();
        view.form.set_trend("down").unwrap();

        view.set_modal_open(false);
        assert_eq!(view.form, AddMetricForm::default());

        view.open_modal();
        assert!(view.form.name.is_empty());
        assert_eq!(view.form.trend, None);
    }

    #[test]
    fn test_opening_modal_keeps_form() {
        let mut view = ready_view();
        view.form.name = "Signups".to_string();

        view.set_modal_open(true);
        assert_eq!(view.form.name, "Signups");
    }

    #[test]
    fn test_submit_does_not_change_metrics() {
        let mut view = ready_view();
        view.open_modal();
        view.form = AddMetricForm {
            name: "Signups".to_string(),
            value: "321".to_string(),
            change: "+4.0%".to_string(),
            trend: Some(Trend::Up),
        };

        let draft = view.submit_form().unwrap();
        assert_eq!(draft.name, "Signups");
        assert_eq!(view.filtered(), seed_metrics());
        assert!(view.is_modal_open());
    }

    #[test]
    fn test_submit_incomplete_form() {
        let mut view = ready_view();

        assert!(view.submit_form().is_err());
        assert_eq!(view.filtered().len(), 4);
    }
}
