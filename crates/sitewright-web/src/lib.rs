//! # sitewright-web
//!
//! Axum server for the Sitewright marketing site: server-rendered pages with
//! hash-allow-listed inline JSON-LD scripts, a small content API in front of
//! the CMS, robots.txt, and health probes.
//!
//! The security posture lives in one place: every page response passes
//! through [`csp::apply_csp`], which assembles the `Content-Security-Policy`
//! header from the strict base policy plus whatever inline-script hashes the
//! handler recorded for that render.

pub mod csp;
pub mod error;
pub mod routes;
pub mod state;

use axum::extract::State;
use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::state::AppState;

/// Build the site application router.
///
/// Pages, content API, and robots.txt all sit under the CSP middleware;
/// health probes are mounted beside it without the header.
pub fn app(state: AppState) -> Router {
    let site = Router::new()
        .merge(routes::pages::router())
        .merge(routes::content::router())
        .merge(routes::robots::router())
        .layer(from_fn_with_state(state.clone(), csp::apply_csp));

    Router::new()
        .merge(site)
        .merge(health_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness and readiness probes.
fn health_router() -> Router<AppState> {
    Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness))
}

async fn liveness() -> &'static str {
    "ok"
}

/// Ready when the CMS (if configured) answers its health endpoint. A site
/// deployed without a CMS is ready as soon as it binds.
async fn readiness(State(state): State<AppState>) -> Result<&'static str, AppError> {
    if let Some(cms) = &state.cms {
        cms.health_check()
            .await
            .map_err(|e| AppError::ServiceUnavailable(e.to_string()))?;
    }
    Ok("ok")
}
