//! # food-client
//!
//! Leptos + WASM front-end for the food ordering platform.
//!
//! This crate contains the route table, the session store, the preconfigured
//! HTTP client used to talk to the ordering gateway, and the role-specific
//! pages (customer, delivery, supplier) plus the sign-up/sign-in forms.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("hydrating food client");
    leptos::mount::hydrate_body(app::App);
}
