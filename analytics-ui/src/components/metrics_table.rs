//! Metrics Table Component
//!
//! The "Key Metrics Overview" table: loading placeholder, error text, or the
//! current page of filtered metrics.

use leptos::*;

use analytics::metrics::{Metric, Trend};

use crate::components::TableSkeleton;
use crate::state::DashboardState;

/// Column headings, left to right
pub const COLUMNS: [&str; 4] = ["Metric", "Current Value", "Change", "Trend"];

/// Metrics table component
#[component]
pub fn MetricsTable() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    move || {
        if state.loading.get() {
            view! { <TableSkeleton /> }.into_view()
        } else if let Some(error) = state.load_error.get() {
            view! { <p class="text-red-600">{error}</p> }.into_view()
        } else {
            view! {
                <table class="w-full text-sm text-left">
                    <thead class="border-b border-gray-200">
                        <tr>
                            {COLUMNS.iter().map(|heading| view! {
                                <th class="py-3 px-4 font-medium text-gray-500">{*heading}</th>
                            }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            state.visible_rows.get()
                                .into_iter()
                                .map(|metric| view! { <MetricRow metric=metric /> })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            }.into_view()
        }
    }
}

/// One table row
#[component]
fn MetricRow(metric: Metric) -> impl IntoView {
    view! {
        <tr class="border-b border-gray-100 last:border-0">
            <td class="py-3 px-4 font-medium">{metric.name}</td>
            <td class="py-3 px-4">{metric.value}</td>
            <td class="py-3 px-4">
                <span class=badge_class(metric.trend)>{metric.change}</span>
            </td>
            <td class="py-3 px-4">
                <span class=trend_icon_class(metric.trend)>{metric.trend.arrow()}</span>
            </td>
        </tr>
    }
}

/// Change badge: filled for upward trends, muted otherwise
pub fn badge_class(trend: Trend) -> &'static str {
    if trend.is_up() {
        "inline-flex rounded-full px-2.5 py-0.5 text-xs font-semibold bg-indigo-600 text-white"
    } else {
        "inline-flex rounded-full px-2.5 py-0.5 text-xs font-semibold bg-gray-200 text-gray-900"
    }
}

/// Trend arrow color
pub fn trend_icon_class(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "w-4 h-4 font-bold text-green-600",
        Trend::Down => "w-4 h-4 font-bold text-red-600",
        Trend::Neutral => "w-4 h-4 font-bold text-gray-500",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns() {
        assert_eq!(COLUMNS, ["Metric", "Current Value", "Change", "Trend"]);
    }

    #[test]
    fn test_badge_variant_split() {
        assert!(badge_class(Trend::Up).contains("bg-indigo-600"));
        assert_eq!(badge_class(Trend::Down), badge_class(Trend::Neutral));
    }

    #[test]
    fn test_trend_icon_colors() {
        assert!(trend_icon_class(Trend::Up).contains("text-green-600"));
        assert!(trend_icon_class(Trend::Down).contains("text-red-600"));
        assert!(trend_icon_class(Trend::Neutral).contains("text-gray-500"));
    }
}
