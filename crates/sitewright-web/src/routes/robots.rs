//! # robots.txt Route
//!
//! Serves the configured crawl policy. When no sitemap is configured, one is
//! derived from the site base URL so crawlers always get a sitemap pointer.

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// Build the robots router.
pub fn router() -> Router<AppState> {
    Router::new().route("/robots.txt", get(robots_txt))
}

/// GET /robots.txt — render the crawl policy as plain text.
async fn robots_txt(State(state): State<AppState>) -> impl IntoResponse {
    let mut policy = state.config.robots.clone();
    if policy.sitemaps.is_empty() {
        policy = policy.sitemap(format!(
            "{}/sitemap.xml",
            state.config.base_url.trim_end_matches('/')
        ));
    }
    (
        [(CONTENT_TYPE, "text/plain; charset=utf-8")],
        policy.render(),
    )
}
