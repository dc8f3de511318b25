//! # Content API Routes
//!
//! JSON endpoints proxying the CMS delivery API through the typed client, so
//! the browser never talks to the CMS (or sees its token) directly. When no
//! CMS is configured the routes answer 503 rather than pretending to have
//! content.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use sitewright_cms::content::{Collection, Entry, Testimonial, Treatment};
use sitewright_cms::CmsClient;

use crate::error::AppError;
use crate::state::AppState;

/// Build the content API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/content/treatments", get(list_treatments))
        .route("/v1/content/treatments/{slug}", get(get_treatment))
        .route("/v1/content/testimonials", get(list_testimonials))
}

/// Resolve the CMS client or fail with 503.
fn cms(state: &AppState) -> Result<&CmsClient, AppError> {
    state
        .cms
        .as_deref()
        .ok_or_else(|| AppError::ServiceUnavailable("no CMS configured".to_string()))
}

/// GET /v1/content/treatments
async fn list_treatments(
    State(state): State<AppState>,
) -> Result<Json<Collection<Treatment>>, AppError> {
    let collection = cms(&state)?.treatments().await?;
    Ok(Json(collection))
}

/// GET /v1/content/treatments/{slug}
async fn get_treatment(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Entry<Treatment>>, AppError> {
    let entry = cms(&state)?.treatment_by_slug(&slug).await?;
    Ok(Json(entry))
}

/// GET /v1/content/testimonials
async fn list_testimonials(
    State(state): State<AppState>,
) -> Result<Json<Collection<Testimonial>>, AppError> {
    let collection = cms(&state)?.testimonials().await?;
    Ok(Json(collection))
}
