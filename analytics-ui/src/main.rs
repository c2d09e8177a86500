//! Analytics Dashboard
//!
//! Client-side rendered (CSR) Leptos application compiled to WebAssembly.
//!
//! # Features
//!
//! - Sidebar shell with four navigation links
//! - Metric cards for the seed data
//! - Searchable, paginated metrics table
//! - "Add Metric" dialog
//!
//! # Architecture
//!
//! All state lives in the `analytics` crate's `DashboardView`, held in a
//! single reactive signal per page. Data comes from the in-memory seed list
//! after a simulated delay; there is no backend.

use leptos::*;

mod app;
mod components;
mod config;
mod logging;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let (config, config_error) = config::load_config();
    logging::init(&config.logging.level);

    if let Some(e) = config_error {
        tracing::warn!("Using default configuration: {}", e);
    }
    tracing::info!("Analytics Dashboard v{}", env!("CARGO_PKG_VERSION"));

    mount_to_body(move || view! { <app::App config=config /> });
}
