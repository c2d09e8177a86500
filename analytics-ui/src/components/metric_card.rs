//! Metric Card Component
//!
//! Displays a single metric with its current value and change.

use leptos::*;

use analytics::metrics::{Metric, Trend};

/// Metric card component
#[component]
pub fn MetricCard(metric: Metric) -> impl IntoView {
    view! {
        <div class="shadow-xl rounded-2xl overflow-hidden bg-gradient-to-tl from-indigo-600 via-pink-300 to-indigo-400">
            // Header with metric name
            <div class="p-6">
                <h3 class="text-white font-semibold">{metric.name}</h3>
            </div>

            // Current value and change
            <div class="text-center py-6">
                <span class="text-4xl font-bold text-white">{metric.value}</span>
                <div class="flex items-center justify-center mt-2 text-white">
                    <span class=card_arrow_class(metric.trend)>{metric.trend.arrow()}</span>
                    <span class="text-sm">{metric.change}</span>
                </div>
            </div>
        </div>
    }
}

/// Arrow styling on a card; cards are always white-on-gradient
fn card_arrow_class(trend: Trend) -> &'static str {
    match trend {
        Trend::Neutral => "w-4 h-4 mr-1 opacity-70",
        Trend::Up | Trend::Down => "w-4 h-4 mr-1",
    }
}
