//! Sidebar Component
//!
//! Brand header and the fixed navigation list.

use leptos::*;
use leptos_router::*;

use analytics::shell::{NavRoute, BRAND, NAV_ROUTES};

/// Sidebar navigation component
#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="w-64 bg-white shadow-lg border-r border-gray-200">
            <div class="p-6">
                // Brand
                <div class="flex items-center space-x-3 mb-8">
                    <span class="text-3xl">"📊"</span>
                    <h1 class="text-xl font-bold text-gray-900">{BRAND}</h1>
                </div>

                // Navigation links
                <ul class="space-y-2">
                    {NAV_ROUTES.iter().map(|route| view! {
                        <li><NavLink route=*route /></li>
                    }).collect_view()}
                </ul>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(route: NavRoute) -> impl IntoView {
    view! {
        <A
            href=route.href
            exact=true
            class="flex items-center space-x-3 px-4 py-3 text-gray-700 rounded-lg hover:bg-gray-100 transition-colors"
            active_class="bg-gray-100 text-gray-900"
        >
            <span class="text-lg">{route.icon.glyph()}</span>
            <span class="font-medium">{route.label}</span>
        </A>
    }
}
