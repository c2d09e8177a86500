//! App Root Component
//!
//! Sidebar shell with routing and the configuration context.

use leptos::*;
use leptos_router::*;

use analytics::config::DashboardConfig;
use analytics::shell::placeholder_for;

use crate::components::Sidebar;
use crate::pages::{Dashboard, Unavailable};

/// Root application component
#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    provide_context(config);

    view! {
        <Router>
            <div class="flex h-screen bg-gray-50">
                // Sidebar navigation
                <Sidebar />

                // Main content area
                <main class="flex-1 overflow-y-auto">
                    <div class="p-8">
                        <Routes>
                            <Route path="/" view=Dashboard />
                            <Route path="/*any" view=Fallback />
                        </Routes>
                    </div>
                </main>
            </div>
        </Router>
    }
}

/// Sidebar links without a page get a placeholder, anything else is a 404
#[component]
fn Fallback() -> impl IntoView {
    let location = use_location();

    move || {
        location.pathname.with(|path| match placeholder_for(path) {
            Some(route) => view! { <Unavailable route=route /> }.into_view(),
            None => view! { <NotFound /> }.into_view(),
        })
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-500 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-gray-900 hover:bg-gray-800 text-white rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
