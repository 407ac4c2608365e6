mod assets;
mod config;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderValue;
use axum::response::Html;
use axum::{routing::get, Json, Router};
use flatmap_shared::models::MapConfig;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use config::ServerConfig;

/// Immutable after startup.
struct AppState {
    map: MapConfig,
    dist_dir: PathBuf,
}

async fn map_config(State(state): State<Arc<AppState>>) -> Json<MapConfig> {
    Json(state.map.clone())
}

/// Build a cache-controlled static file router.
///
/// Separated so tests can exercise the caching layer with arbitrary directories.
fn cached_static_router(dir: &Path, cache_header: &'static str) -> Router {
    let layer = SetResponseHeaderLayer::overriding(
        axum::http::header::CACHE_CONTROL,
        HeaderValue::from_static(cache_header),
    );
    Router::new()
        .fallback_service(ServeDir::new(dir))
        .layer(layer)
}

const CACHE_1DAY: &str = "public, max-age=86400, must-revalidate";
const CACHE_IMMUTABLE: &str = "public, max-age=31536000, immutable";

/// Build the full application router.
fn build_app(config: &ServerConfig) -> Router {
    let state = Arc::new(AppState {
        map: config.map.clone(),
        dist_dir: config.dist_dir.clone(),
    });

    // Static file routers are stateless; merge them before adding app state
    let static_files = Router::new()
        .nest(
            "/static",
            cached_static_router(&config.assets_dir, CACHE_1DAY),
        )
        .nest(
            "/dist",
            cached_static_router(&config.dist_dir, CACHE_IMMUTABLE),
        )
        .nest(
            "/assets",
            cached_static_router(&config.dist_dir.join("assets"), CACHE_IMMUTABLE),
        );

    // `/{id}` is a flat detail page, rendered client-side
    Router::new()
        .route("/api/config", get(map_config))
        .route("/", get(serve_index))
        .route("/{id}", get(serve_index))
        .with_state(state)
        .merge(static_files)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    if let Err(e) = assets::DemoData::inspect(&config.assets_dir) {
        tracing::warn!(error = %e, "Demo data unavailable; the map will show no flats");
    }

    let app = build_app(&config);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Server running at http://localhost:{}", config.port);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn serve_index(State(state): State<Arc<AppState>>) -> Html<String> {
    // Try to serve the built frontend, fall back to a simple message
    match tokio::fs::read_to_string(state.dist_dir.join("index.html")).await {
        Ok(html) => Html(html),
        Err(_) => Html(
            r#"<!DOCTYPE html>
<html>
<head><title>Flat Map</title></head>
<body>
<h1>Flat Map</h1>
<p>Frontend not built yet. Run <code>dx bundle</code> in <code>crates/frontend</code> and copy the output to <code>dist/</code>.</p>
</body>
</html>"#
                .to_string(),
        ),
    }
}
