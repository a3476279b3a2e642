//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The food client talks to the ordering gateway directly from the browser,
//! so this host only renders the Leptos app, serves its `/pkg` assets and
//! answers health checks.

pub mod health;


use std::path::PathBuf;

use axum::Router;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Routes that do not depend on the Leptos site configuration.
pub fn base_routes() -> Router {
    Router::new().route("/healthz", get(health::healthz))
}

/// Leptos SSR frontend plus static assets and the health check.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(food_client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || food_client::app::shell(opts.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(food_client::app::shell))
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    base_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}
