//! Pagination Controls
//!
//! Previous/Next buttons under the metrics table.

use leptos::*;

use crate::state::DashboardState;

/// Previous/Next button pair
#[component]
pub fn PaginationControls() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let view_state = state.view;

    let prev_disabled = create_memo(move |_| view_state.with(|v| !v.can_prev()));
    let next_disabled = create_memo(move |_| view_state.with(|v| !v.can_next()));

    view! {
        <div class="mt-4 flex items-center justify-end space-x-2">
            <span class="text-sm text-gray-500 mr-2">
                {move || page_label(view_state.with(|v| v.page()), state.total_pages.get())}
            </span>
            <PageButton
                label="Previous"
                disabled=prev_disabled
                on_click=move |_| state.prev_page()
            />
            <PageButton
                label="Next"
                disabled=next_disabled
                on_click=move |_| state.next_page()
            />
        </div>
    }
}

/// "Page X of Y", with Y the real page count (0 when nothing matches)
fn page_label(page: usize, total: usize) -> String {
    format!("Page {} of {}", page, total)
}

#[component]
fn PageButton(
    label: &'static str,
    disabled: Memo<bool>,
    on_click: impl Fn(web_sys::MouseEvent) + 'static,
) -> impl IntoView {
    view! {
        <button
            type="button"
            on:click=on_click
            disabled=move || disabled.get()
            class="px-4 py-2 rounded-lg border border-gray-300 bg-white text-sm font-medium
                   hover:bg-gray-50 disabled:opacity-50 disabled:cursor-not-allowed transition-colors"
        >
            {label}
        </button>
    }
}
