//! Loading Component
//!
//! Skeleton placeholders shown while metrics load.

use leptos::*;

/// Skeleton loader for the metrics table
#[component]
pub fn TableSkeleton(
    #[prop(default = 1)]
    rows: usize,
) -> impl IntoView {
    view! {
        <div class="space-y-3 animate-pulse">
            {(0..rows).map(|_| view! {
                <div class="h-20 w-full bg-gray-200 rounded-md" />
            }).collect_view()}
        </div>
    }
}
