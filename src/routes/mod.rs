//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves three things: the `/api/*` forwarder plus
//! `/healthz`, the Leptos SSR pages, and the compiled client assets under
//! `/pkg`. Anything the SSR router does not claim falls back to the static
//! asset directory.

pub mod proxy;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{any, get};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    #[error("leptos configuration: {0}")]
    LeptosConfig(#[from] leptos::config::errors::LeptosConfigError),
}

/// Forwarded API routes and the health probe.
pub fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/{*path}", any(proxy::forward))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Full host: API routes, Leptos SSR, and static assets.
///
/// # Errors
///
/// Returns `RouterError::LeptosConfig` if the Leptos configuration cannot be
/// loaded (missing or malformed `[package.metadata.leptos]` section).
pub fn app(state: AppState) -> Result<Router, RouterError> {
    let conf = get_configuration(None)?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .fallback_service(ServeDir::new(&site_root))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
