//! Unavailable Page
//!
//! Shown for navigation entries that this application links to but does not
//! provide.

use leptos::*;
use leptos_router::*;

use analytics::shell::NavRoute;

/// Placeholder for a linked-but-missing section
#[component]
pub fn Unavailable(route: &'static NavRoute) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🚧"</div>
            <h1 class="text-3xl font-bold mb-2">{route.label}</h1>
            <p class="text-gray-500 mb-6">"This section is not available in this dashboard."</p>
            <A
                href="/"
                class="px-6 py-3 bg-gray-900 hover:bg-gray-800 text-white rounded-lg font-medium transition-colors"
            >
                "Back to Overview"
            </A>
        </div>
    }
}
