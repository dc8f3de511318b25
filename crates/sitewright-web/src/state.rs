//! # Application State
//!
//! Shared state for the Axum application: site configuration, the immutable
//! base CSP policy, and the optional CMS client.

use std::sync::Arc;

use sitewright_cms::{CmsClient, SiteIdentity};
use sitewright_core::{CspPolicy, RobotsPolicy};

/// Deploy-time configuration for the site.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port to bind the HTTP server to.
    pub port: u16,
    /// Canonical base URL, no trailing slash (used for sitemap and JSON-LD URLs).
    pub base_url: String,
    /// Business identity rendered into structured data.
    pub site: SiteIdentity,
    /// Crawl policy served at /robots.txt.
    pub robots: RobotsPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        let base_url = "http://localhost:8080".to_string();
        Self {
            port: 8080,
            site: SiteIdentity::new("Sitewright", base_url.clone()),
            robots: RobotsPolicy::allow_all(),
            base_url,
        }
    }
}

impl AppConfig {
    /// Build configuration from `SITEWRIGHT_*` environment variables,
    /// falling back to defaults for anything unset.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(port) = std::env::var("SITEWRIGHT_PORT") {
            match port.parse() {
                Ok(port) => config.port = port,
                Err(_) => tracing::warn!(%port, "invalid SITEWRIGHT_PORT; using default"),
            }
        }
        if let Ok(base_url) = std::env::var("SITEWRIGHT_BASE_URL") {
            config.base_url = base_url.trim_end_matches('/').to_string();
            config.site.url = config.base_url.clone();
        }
        if let Ok(name) = std::env::var("SITEWRIGHT_SITE_NAME") {
            config.site.name = name;
        }
        config
    }
}

/// Shared application state accessible to all route handlers.
///
/// Clone-friendly: configuration and client sit behind `Arc`s, and the base
/// policy is a small immutable value cloned per response.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Site configuration.
    pub config: Arc<AppConfig>,
    /// CMS delivery client. `None` when the site runs without a CMS
    /// (content routes answer 503, pages fall back to static shells).
    pub cms: Option<Arc<CmsClient>>,
    /// The strict base policy every response starts from. Per-render script
    /// hashes are folded in by the CSP middleware; this value is never
    /// mutated.
    pub base_policy: CspPolicy,
}

impl AppState {
    /// State with default configuration and no CMS client.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default(), None)
    }

    /// State with the given configuration and optional CMS client.
    pub fn with_config(config: AppConfig, cms: Option<CmsClient>) -> Self {
        Self {
            config: Arc::new(config),
            cms: cms.map(Arc::new),
            base_policy: CspPolicy::strict_page(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
