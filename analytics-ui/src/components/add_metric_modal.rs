//! Add Metric Modal
//!
//! Dialog with the four-field metric form. Submitting validates the input
//! and stops there; the metric list is left as it is.

use leptos::*;

use analytics::metrics::Trend;

use crate::state::DashboardState;

/// Renders the dialog while the modal is open
#[component]
pub fn AddMetricModal() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let is_open = create_memo(move |_| state.view.with(|v| v.is_modal_open()));

    move || {
        if is_open.get() {
            view! { <AddMetricDialog on_close=move || state.set_modal_open(false) /> }.into_view()
        } else {
            view! {}.into_view()
        }
    }
}

#[component]
fn AddMetricDialog(on_close: impl Fn() + 'static + Clone) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let view_state = state.view;
    let (form_error, set_form_error) = create_signal(None::<String>);

    // Escape dismisses the dialog
    let on_close_for_key = on_close.clone();
    let key_handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            on_close_for_key();
        }
    });
    on_cleanup(move || key_handle.remove());

    let on_close_for_overlay = on_close.clone();
    let on_close_for_x = on_close;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        match view_state.try_update(|v| v.submit_form()) {
            Some(Ok(_draft)) => set_form_error.set(None),
            Some(Err(e)) => set_form_error.set(Some(e.to_string())),
            None => {}
        }
    };

    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center">
            // Overlay
            <div
                class="absolute inset-0 bg-black opacity-50"
                on:click=move |_| on_close_for_overlay()
            />

            <div
                role="dialog"
                aria-modal="true"
                class="relative max-w-lg w-full mx-4 p-6 shadow-xl rounded-2xl bg-white"
            >
                <div class="flex items-center justify-between">
                    <h2 class="text-2xl font-bold">"Add New Metric"</h2>
                    <button
                        type="button"
                        aria-label="Close"
                        on:click=move |_| on_close_for_x()
                        class="text-gray-400 hover:text-gray-900"
                    >
                        "✕"
                    </button>
                </div>

                <form on:submit=on_submit class="space-y-4 mt-4">
                    <TextField
                        placeholder="Metric Name"
                        value=Signal::derive(move || view_state.with(|v| v.form.name.clone()))
                        on_input=move |text| view_state.update(|v| v.form.name = text)
                    />
                    <TextField
                        placeholder="Current Value"
                        value=Signal::derive(move || view_state.with(|v| v.form.value.clone()))
                        on_input=move |text| view_state.update(|v| v.form.value = text)
                    />
                    <TextField
                        placeholder="Change Percentage"
                        value=Signal::derive(move || view_state.with(|v| v.form.change.clone()))
                        on_input=move |text| view_state.update(|v| v.form.change = text)
                    />

                    // Trend
                    <select
                        required=true
                        on:change=move |ev| {
                            let raw = event_target_value(&ev);
                            view_state.update(|v| {
                                if let Err(e) = v.form.set_trend(&raw) {
                                    tracing::warn!("Ignoring trend selection: {}", e);
                                }
                            });
                        }
                        prop:value=move || {
                            view_state.with(|v| v.form.trend.map(|t| t.as_str()).unwrap_or(""))
                        }
                        class="w-full rounded-lg px-4 py-3 border border-gray-300
                               focus:border-indigo-500 focus:outline-none"
                    >
                        <option value="" disabled=true>"Trend Direction"</option>
                        {Trend::all().iter().map(|trend| view! {
                            <option value=trend.as_str()>{trend.label()}</option>
                        }).collect_view()}
                    </select>

                    {move || form_error.get().map(|msg| view! {
                        <p class="text-sm text-red-600">{msg}</p>
                    })}

                    <button
                        type="submit"
                        class="w-full px-4 py-3 bg-indigo-600 hover:bg-indigo-700 text-white
                               rounded-lg font-medium transition-colors"
                    >
                        "Add Metric"
                    </button>
                </form>
            </div>
        </div>
    }
}

/// Required single-line text input
#[component]
fn TextField(
    placeholder: &'static str,
    #[prop(into)]
    value: Signal<String>,
    on_input: impl Fn(String) + 'static,
) -> impl IntoView {
    view! {
        <input
            type="text"
            required=true
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| on_input(event_target_value(&ev))
            class="w-full rounded-lg px-4 py-3 border border-gray-300
                   focus:border-indigo-500 focus:outline-none"
        />
    }
}
