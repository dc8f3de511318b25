//! # CMS Delivery API Client
//!
//! Thin typed client over the CMS delivery API. One `reqwest::Client` with
//! default bearer-auth headers; one method per endpoint the site reads.
//!
//! Non-2xx responses are surfaced as [`CmsError::Api`] with the body text so
//! operators see the upstream message; transport and decode failures carry
//! the endpoint they occurred on.

use url::Url;

use crate::config::{CmsConfig, ConfigError};
use crate::content::{Collection, Entry, SitePage, Testimonial, Treatment};
use crate::error::CmsError;

/// Typed client for the CMS delivery API.
#[derive(Debug, Clone)]
pub struct CmsClient {
    http: reqwest::Client,
    base_url: Url,
}

impl CmsClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `CmsError::Config` if the API token cannot be used as a
    /// header value, or `CmsError::Http` if the underlying client fails to
    /// initialize.
    pub fn new(config: CmsConfig) -> Result<Self, CmsError> {
        let mut headers = reqwest::header::HeaderMap::new();
        if let Some(token) = &config.api_token {
            let value = reqwest::header::HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| ConfigError::InvalidToken)?;
            headers.insert(reqwest::header::AUTHORIZATION, value);
        }
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| CmsError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// List all published treatments.
    pub async fn treatments(&self) -> Result<Collection<Treatment>, CmsError> {
        self.get_json("content/treatments").await
    }

    /// Fetch one treatment by slug.
    pub async fn treatment_by_slug(&self, slug: &str) -> Result<Entry<Treatment>, CmsError> {
        self.get_json(&format!("content/treatments/{slug}")).await
    }

    /// List all published testimonials.
    pub async fn testimonials(&self) -> Result<Collection<Testimonial>, CmsError> {
        self.get_json("content/testimonials").await
    }

    /// Fetch one free-form page by slug.
    pub async fn page(&self, slug: &str) -> Result<Entry<SitePage>, CmsError> {
        self.get_json(&format!("content/pages/{slug}")).await
    }

    /// Probe the delivery API. Ok when the CMS answers 2xx on its health
    /// endpoint; the error carries the reason otherwise.
    pub async fn health_check(&self) -> Result<(), CmsError> {
        let endpoint = "health";
        let url = self.endpoint_url(endpoint)?;
        let response = self.http.get(url).send().await.map_err(|e| CmsError::Http {
            endpoint: endpoint.into(),
            source: e,
        })?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(CmsError::Api {
                endpoint: endpoint.into(),
                status: status.as_u16(),
                body,
            })
        }
    }

    /// GET an endpoint and decode its JSON body.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
    ) -> Result<T, CmsError> {
        let url = self.endpoint_url(endpoint)?;
        tracing::debug!(%url, "CMS request");

        let response = self.http.get(url).send().await.map_err(|e| CmsError::Http {
            endpoint: endpoint.into(),
            source: e,
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CmsError::Api {
                endpoint: endpoint.into(),
                status: status.as_u16(),
                body,
            });
        }

        response.json().await.map_err(|e| CmsError::Deserialization {
            endpoint: endpoint.into(),
            source: e,
        })
    }

    fn endpoint_url(&self, endpoint: &str) -> Result<Url, CmsError> {
        self.base_url
            .join(endpoint)
            .map_err(|e| ConfigError::InvalidBaseUrl {
                url: format!("{}{endpoint}", self.base_url),
                reason: e.to_string(),
            })
            .map_err(CmsError::from)
    }
}
