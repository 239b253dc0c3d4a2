//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The overlay is a static page: the shell and scene assets come from the
//! site directory, the WASM bundle from `/pkg`. Nothing is rendered server
//! side, so the router is a health probe plus two `ServeDir`s.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use axum::Json;
use axum::Router;
use axum::routing::get;
use serde_json::{Value, json};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

pub fn app(config: &ServerConfig) -> Router {
    let site = ServeDir::new(&config.site_dir).append_index_html_on_directories(true);

    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(&config.pkg_dir))
        .fallback_service(site)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
