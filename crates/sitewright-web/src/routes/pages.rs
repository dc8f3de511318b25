//! # Page Routes
//!
//! Server-rendered page shells. Layout is deliberately minimal — the point
//! of these handlers is the contract between the embedded inline JSON-LD
//! scripts and the CSP header: every script body placed on a page is
//! produced and hashed as one [`InlineScript`], and its hash is recorded in
//! the render's [`ScriptManifest`] before the body is interpolated. The CSP
//! middleware folds the manifest into the response header, so the allow-list
//! and the page can never disagree.

use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::{Extension, Router};
use sitewright_cms::content::Treatment;
use sitewright_cms::jsonld;
use sitewright_core::{InlineScript, ScriptManifest};

use crate::error::AppError;
use crate::state::AppState;

/// Build the pages router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/treatments", get(treatments_index))
}

/// GET / — landing page with the organization JSON-LD card.
async fn home(
    State(state): State<AppState>,
) -> Result<(Extension<ScriptManifest>, Html<String>), AppError> {
    let site = &state.config.site;

    let org = jsonld::organization(site);
    let script = InlineScript::from_json(&org)
        .map_err(|e| AppError::Internal(format!("organization JSON-LD: {e}")))?;

    let mut manifest = ScriptManifest::new();
    manifest.record(&script);

    let main = format!(
        "<h1>{}</h1>\n<p><a href=\"/treatments\">Our treatments</a></p>",
        escape_html(&site.name)
    );
    let body = page_shell(&site.name, &main, &[&script]);

    Ok((Extension(manifest), Html(body)))
}

/// GET /treatments — treatment listing with per-treatment Service JSON-LD.
///
/// The JSON-LD block is an array of Service documents, one per treatment.
/// Without a configured CMS the page renders an empty listing rather than
/// failing — the marketing site stays up when the content backend is down
/// for maintenance, it just loses its listing.
async fn treatments_index(
    State(state): State<AppState>,
) -> Result<(Extension<ScriptManifest>, Html<String>), AppError> {
    let site = &state.config.site;

    let treatments: Vec<Treatment> = match &state.cms {
        Some(cms) => cms
            .treatments()
            .await
            .map(|collection| collection.items.into_iter().map(|e| e.fields).collect())?,
        None => Vec::new(),
    };

    let services: Vec<serde_json::Value> = treatments
        .iter()
        .map(|t| jsonld::treatment_service(t, site))
        .collect();
    let script = InlineScript::from_json(&services)
        .map_err(|e| AppError::Internal(format!("service JSON-LD: {e}")))?;

    let mut manifest = ScriptManifest::new();
    manifest.record(&script);

    let listing = if treatments.is_empty() {
        "<p>Our treatment list is being updated — please check back soon.</p>".to_string()
    } else {
        let items: String = treatments
            .iter()
            .map(|t| {
                format!(
                    "<li><h2>{}</h2><p>{}</p></li>\n",
                    escape_html(&t.title),
                    escape_html(&t.summary)
                )
            })
            .collect();
        format!("<ul>\n{items}</ul>")
    };
    let main = format!("<h1>Treatments</h1>\n{listing}");
    let body = page_shell(&format!("Treatments — {}", site.name), &main, &[&script]);

    Ok((Extension(manifest), Html(body)))
}

/// Minimal HTML5 shell. Inline script bodies are interpolated verbatim —
/// byte-for-byte the text that was hashed.
fn page_shell(title: &str, main: &str, scripts: &[&InlineScript]) -> String {
    let ld_blocks: String = scripts
        .iter()
        .map(|s| format!("<script type=\"application/ld+json\">{}</script>\n", s.content()))
        .collect();
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n{}</head>\n<body>\n{}\n</body>\n</html>\n",
        escape_html(title),
        ld_blocks,
        main
    )
}

/// Escape text for interpolation into HTML text nodes and attributes.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::header::CONTENT_SECURITY_POLICY;
    use axum::http::{Request, StatusCode};
    use axum::middleware::from_fn_with_state;
    use http_body_util::BodyExt;
    use sitewright_core::ScriptHash;
    use tower::ServiceExt;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// App with the pages router plus the CSP middleware, as assembled in prod.
    fn app(state: AppState) -> Router {
        router()
            .layer(from_fn_with_state(state.clone(), crate::csp::apply_csp))
            .with_state(state)
    }

    async fn get_page(app: Router, uri: &str) -> (StatusCode, String, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let csp = response
            .headers()
            .get(CONTENT_SECURITY_POLICY)
            .map(|v| v.to_str().unwrap().to_string())
            .unwrap_or_default();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, csp, String::from_utf8(bytes.to_vec()).unwrap())
    }

    /// Extract the first inline ld+json script body from a rendered page.
    fn extract_ld_json(body: &str) -> &str {
        let open = "<script type=\"application/ld+json\">";
        let start = body.find(open).expect("ld+json script present") + open.len();
        let end = body[start..].find("</script>").expect("script closed") + start;
        &body[start..end]
    }

    #[tokio::test]
    async fn home_embeds_organization_jsonld() {
        let (status, _, body) = get_page(app(AppState::new()), "/").await;
        assert_eq!(status, StatusCode::OK);
        let ld = extract_ld_json(&body);
        let doc: serde_json::Value = serde_json::from_str(ld).unwrap();
        assert_eq!(doc["@type"], "Organization");
        assert_eq!(doc["name"], "Sitewright");
    }

    #[tokio::test]
    async fn header_hash_matches_embedded_bytes() {
        // The load-bearing test: hash the exact bytes embedded in the page
        // and require that token in the response header.
        let (_, csp, body) = get_page(app(AppState::new()), "/").await;
        let embedded = extract_ld_json(&body);
        let expected = ScriptHash::sha256(embedded);
        assert!(
            csp.contains(&format!("'{expected}'")),
            "header {csp} missing token for embedded script"
        );
    }

    #[tokio::test]
    async fn treatments_page_without_cms_renders_fallback() {
        let (status, csp, body) = get_page(app(AppState::new()), "/treatments").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("being updated"));
        // Even the empty listing embeds its (empty-array) JSON-LD block,
        // and the header must carry its hash.
        let embedded = extract_ld_json(&body);
        assert_eq!(embedded, "[]");
        assert!(csp.contains(&format!("'{}'", ScriptHash::sha256("[]"))));
    }

    #[tokio::test]
    async fn treatments_page_lists_cms_content() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/content/treatments"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "items": [{
                    "id": "t-001",
                    "created_at": "2025-03-01T09:00:00Z",
                    "updated_at": "2025-06-15T12:30:00Z",
                    "fields": {
                        "title": "Deep Tissue Massage",
                        "slug": "deep-tissue-massage",
                        "summary": "Targeted pressure for chronic tension.",
                        "duration_minutes": 60
                    }
                }],
                "total": 1
            })))
            .mount(&server)
            .await;

        let cms = sitewright_cms::CmsClient::new(
            sitewright_cms::CmsConfig::new(&server.uri()).unwrap(),
        )
        .unwrap();
        let state = AppState::with_config(crate::state::AppConfig::default(), Some(cms));

        let (status, csp, body) = get_page(app(state), "/treatments").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Deep Tissue Massage"));

        // The Service array is embedded and allow-listed.
        let embedded = extract_ld_json(&body);
        let docs: serde_json::Value = serde_json::from_str(embedded).unwrap();
        assert_eq!(docs[0]["@type"], "Service");
        assert!(csp.contains(&format!("'{}'", ScriptHash::sha256(embedded))));
    }

    #[tokio::test]
    async fn cms_text_cannot_terminate_script_element() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/content/treatments"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "items": [{
                    "id": "t-666",
                    "created_at": "2025-03-01T09:00:00Z",
                    "updated_at": "2025-06-15T12:30:00Z",
                    "fields": {
                        "title": "Relaxing Massage",
                        "slug": "relaxing-massage",
                        "summary": "so good</script><img src=x onerror=boom>"
                    }
                }],
                "total": 1
            })))
            .mount(&server)
            .await;

        let cms = sitewright_cms::CmsClient::new(
            sitewright_cms::CmsConfig::new(&server.uri()).unwrap(),
        )
        .unwrap();
        let state = AppState::with_config(crate::state::AppConfig::default(), Some(cms));

        let (status, csp, body) = get_page(app(state), "/treatments").await;
        assert_eq!(status, StatusCode::OK);

        // The script body must hold the summary only as escaped bytes; a
        // literal terminator would end the element early and leak the
        // remainder to the HTML parser as markup.
        let embedded = extract_ld_json(&body);
        assert!(!embedded.contains('<'));
        assert!(embedded.contains("\\u003c/script>"));
        assert!(!body.contains("<img src=x"));

        // Escaping happens before hashing, so the pairing still holds.
        assert!(csp.contains(&format!("'{}'", ScriptHash::sha256(embedded))));
        let docs: serde_json::Value = serde_json::from_str(embedded).unwrap();
        assert_eq!(
            docs[0]["description"],
            "so good</script><img src=x onerror=boom>"
        );
    }

    #[tokio::test]
    async fn cms_failure_surfaces_as_bad_gateway() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/content/treatments"))
            .respond_with(ResponseTemplate::new(500).set_body_string("cms down"))
            .mount(&server)
            .await;

        let cms = sitewright_cms::CmsClient::new(
            sitewright_cms::CmsConfig::new(&server.uri()).unwrap(),
        )
        .unwrap();
        let state = AppState::with_config(crate::state::AppConfig::default(), Some(cms));

        let (status, _, _) = get_page(app(state), "/treatments").await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn escape_html_covers_special_chars() {
        assert_eq!(
            escape_html(r#"<b>&"quoted"'</b>"#),
            "&lt;b&gt;&amp;&quot;quoted&quot;&#39;&lt;/b&gt;"
        );
    }
}
