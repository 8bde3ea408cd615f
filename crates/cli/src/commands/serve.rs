use anyhow::{Context, Result};
use axum::{
    Router,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use chrono::Utc;
use lumos_site_generator::{robots, sitemap};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::debug;

/// Clients revalidate every time; shared caches may hold a copy for an hour
const CACHE_CONTROL: &str = "max-age=0, s-maxage=3600";

/// Start the HTTP server exposing the crawler-facing documents.
///
/// Routes:
/// - `GET /sitemap.xml` - sitemap rendered from the compiled-in page table
/// - `GET /robots.txt` - crawler policy pointing at the sitemap
/// - anything else - 404
///
/// Handlers are stateless; every response is computed from the page table
/// and the current UTC date, so concurrent requests need no coordination.
///
/// # Arguments
///
/// * `port` - Port to serve on (default: 8080)
pub async fn run(port: u16) -> Result<()> {
    println!("🗺️  Starting sitemap server...");
    println!("   Pages: {}", lumos_site_core::pages().len());

    let app = router();

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to port")?;

    debug!("listening on {}", listener.local_addr()?);

    println!("\n🚀 Serving at: http://localhost:{}/sitemap.xml", port);
    println!("   Press Ctrl+C to stop\n");

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

/// Build the router; split out from `run` so tests can drive it directly
fn router() -> Router {
    Router::new()
        .route("/sitemap.xml", get(sitemap_xml))
        .route("/robots.txt", get(robots_txt))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
}

async fn sitemap_xml() -> impl IntoResponse {
    let body = sitemap::render(Utc::now().date_naive());
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/xml"),
            (header::CACHE_CONTROL, CACHE_CONTROL),
        ],
        body,
    )
}

async fn robots_txt() -> impl IntoResponse {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (header::CACHE_CONTROL, CACHE_CONTROL),
        ],
        robots::render(),
    )
}

async fn not_found() -> impl IntoResponse {
    StatusCode::NOT_FOUND
}
