//! Dashboard Page
//!
//! Metric cards, the searchable metrics table and the Add Metric dialog.

use leptos::*;

use analytics::config::DashboardConfig;
use analytics::metrics::seed_metrics;

use crate::components::{AddMetricModal, MetricCard, MetricsTable, PaginationControls};
use crate::state::dashboard::provide_dashboard_state;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let config = use_context::<DashboardConfig>().expect("DashboardConfig not found");
    let state = provide_dashboard_state(config.dashboard.page_size);

    // Load data once on mount
    let delay_ms = config.dashboard.load_delay_ms;
    create_effect(move |_| {
        state.start_loading(delay_ms);
    });

    let query = create_memo(move |_| state.view.with(|v| v.query.clone()));

    view! {
        <div class="bg-gradient-to-tl from-indigo-500 via-pink-200 to-white min-h-full text-gray-900 rounded-2xl">
            // Page header
            <header class="p-4 flex justify-between items-center">
                <h1 class="text-3xl font-bold">{config.dashboard.title.clone()}</h1>
                <div class="flex space-x-2">
                    <button
                        type="button"
                        class="px-4 py-2 rounded-lg border border-gray-300 bg-white font-medium
                               hover:bg-gray-50 transition-colors"
                    >
                        "Export Report"
                    </button>
                    <button
                        type="button"
                        on:click=move |_| state.open_modal()
                        class="px-4 py-2 rounded-lg bg-gray-900 text-white font-medium
                               hover:bg-gray-800 transition-colors"
                    >
                        "Add Metric"
                    </button>
                </div>
            </header>

            <main class="p-4 grid gap-4 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4">
                // Summary cards
                {seed_metrics().into_iter().map(|metric| view! {
                    <MetricCard metric=metric />
                }).collect_view()}

                // Metrics table
                <section class="col-span-full shadow-xl rounded-2xl overflow-hidden bg-white">
                    <div class="p-6 flex items-center justify-between">
                        <h2 class="text-xl font-semibold">"Key Metrics Overview"</h2>
                        <input
                            type="search"
                            placeholder="Search metrics..."
                            prop:value=move || query.get()
                            on:input=move |ev| state.set_query(event_target_value(&ev))
                            class="w-64 rounded-lg px-4 py-2 border border-gray-300
                                   focus:border-indigo-500 focus:outline-none"
                        />
                    </div>

                    <div class="p-6 pt-0">
                        <MetricsTable />
                        <PaginationControls />
                    </div>
                </section>
            </main>

            <AddMetricModal />

            <footer class="p-4 text-center">
                <p>{config.dashboard.footer.clone()}</p>
            </footer>
        </div>
    }
}
