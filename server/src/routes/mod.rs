//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches Leptos SSR rendering, the static WASM bundle, and a
//! health probe under a single Axum router. Every request passes the session
//! cookie guard first, so `/dashboard/**` never renders without a cookie.

pub mod guard;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ConfigError;

/// Load Leptos options from the environment set by `cargo leptos`.
///
/// # Errors
///
/// Returns [`ConfigError::Leptos`] if the configuration cannot be loaded.
pub fn leptos_options() -> Result<LeptosOptions, ConfigError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    Ok(conf.leptos_options)
}

/// Full application: SSR pages, `/pkg` assets, and `/healthz`.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Compiled WASM, JS glue, and CSS.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let router = Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")));

    with_guard(router).layer(TraceLayer::new_for_http())
}

/// Wrap `router` with the session cookie guard.
pub fn with_guard(router: Router) -> Router {
    router.layer(middleware::from_fn(guard::route_guard))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
