//! # CSP Response-Header Middleware
//!
//! Sets the `Content-Security-Policy` header on every response from the site
//! router, folding in the script hashes the handler collected during its
//! render.
//!
//! ## Synchronization Contract
//!
//! Handlers that embed inline scripts store their [`ScriptManifest`] in the
//! response extensions (via `axum::Extension` in the handler return value).
//! This middleware is the single place the header is assembled, from the
//! immutable base policy plus that manifest, so the allow-list can never
//! drift from what the page actually embedded: both are derived from the
//! same `InlineScript` values inside one request scope.

use axum::extract::{Request, State};
use axum::http::header::{HeaderValue, CONTENT_SECURITY_POLICY};
use axum::middleware::Next;
use axum::response::Response;
use sitewright_core::ScriptManifest;

use crate::state::AppState;

/// Attach the assembled CSP header to the response.
pub async fn apply_csp(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;

    // The manifest is removed, not read: it is request-scoped data and must
    // not leak to clients through any other layer.
    let policy = match response.extensions_mut().remove::<ScriptManifest>() {
        Some(manifest) => state.base_policy.clone().with_scripts(&manifest),
        None => state.base_policy.clone(),
    };

    match HeaderValue::from_str(&policy.header_value()) {
        Ok(value) => {
            response.headers_mut().insert(CONTENT_SECURITY_POLICY, value);
        }
        Err(e) => {
            // Hash tokens and directive names are ASCII; reaching this arm
            // means a misconfigured base policy. Serve without the header
            // rather than failing the page.
            tracing::error!(error = %e, "CSP header value invalid; header omitted");
        }
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request as HttpRequest, StatusCode};
    use axum::middleware::from_fn_with_state;
    use axum::response::IntoResponse;
    use axum::routing::get;
    use axum::{Extension, Router};
    use sitewright_core::InlineScript;
    use tower::ServiceExt;

    async fn plain() -> &'static str {
        "ok"
    }

    async fn with_script() -> impl IntoResponse {
        let script = InlineScript::from_source("console.log('hi')");
        let mut manifest = ScriptManifest::new();
        manifest.record(&script);
        (Extension(manifest), "page")
    }

    fn app() -> Router {
        let state = AppState::new();
        Router::new()
            .route("/plain", get(plain))
            .route("/scripted", get(with_script))
            .layer(from_fn_with_state(state.clone(), apply_csp))
            .with_state(state)
    }

    #[tokio::test]
    async fn base_policy_on_plain_response() {
        let response = app()
            .oneshot(HttpRequest::builder().uri("/plain").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let header = response
            .headers()
            .get(CONTENT_SECURITY_POLICY)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(header.contains("script-src 'self'"));
        assert!(!header.contains("sha256-"));
    }

    #[tokio::test]
    async fn manifest_hashes_folded_into_header() {
        let response = app()
            .oneshot(HttpRequest::builder().uri("/scripted").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let header = response
            .headers()
            .get(CONTENT_SECURITY_POLICY)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(header.contains("'sha256-1ohZFo3B9w3UOFBbfx6JSomkpkME90iPs1r/qXzvX7Y='"));
    }

    #[tokio::test]
    async fn manifest_not_leaked_in_extensions() {
        let response = app()
            .oneshot(HttpRequest::builder().uri("/scripted").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert!(response.extensions().get::<ScriptManifest>().is_none());
    }
}
