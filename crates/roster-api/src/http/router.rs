//! Axum router configuration with middleware.
//!
//! All data routes are under `/api/`.
//! Middleware: panic-to-500, gzip compression, CORS, tracing.
//!
//! When `web_dir` is configured (or `ROSTER_WEB_DIR` is set) and the
//! directory exists, a built front-end is served from it. API routes take
//! priority; unknown paths fall through to the front-end's `index.html` for
//! client-side routing.

use axum::Router;
use axum::extract::State;
use axum::routing::get;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use roster_infra::filesystem::resolve_web_dir;

use crate::http::error::panic_response;
use crate::http::handlers;
use crate::http::response::NoStoreJson;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let web_dir = resolve_web_dir(state.config.web_dir.as_deref());

    let api_routes = Router::new()
        .route("/characters", get(handlers::character::list_characters))
        .route("/characters/{slug}", get(handlers::character::get_character))
        .route(
            "/character-avatar/{slug}",
            get(handlers::avatar::get_avatar),
        );

    let mut router = Router::new()
        .nest("/api", api_routes)
        .route("/health", get(health_check))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if let Some(web_dir) = web_dir.filter(|dir| dir.exists()) {
        let serve_dir = ServeDir::new(&web_dir).fallback(ServeFile::new(web_dir.join("index.html")));
        router = router.fallback_service(serve_dir);
        tracing::info!(path = %web_dir.display(), "Static front-end serving enabled");
    }

    router
}

/// GET /health - Simple health check endpoint.
async fn health_check(State(state): State<AppState>) -> NoStoreJson<serde_json::Value> {
    NoStoreJson(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "characters": state.character_service.count(),
    }))
}
