//! # paisagista-client
//!
//! Leptos + WASM frontend for the Gregório Paisagista marketing site.
//!
//! This crate contains the single landing page, its sections, the theme
//! engine, the lead router (WhatsApp deep links, form endpoint, mail draft),
//! and the browser glue behind them. The server crate renders it with the
//! `ssr` feature; the `hydrate` feature builds the WASM bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
///
/// Site configuration is read back from the `<body>` data attributes the
/// server rendered, so the hydrated tree matches the SSR output.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = config::SiteConfig::from_document();
    leptos::mount::hydrate_body(move || view! { <App config=config/> });
}
