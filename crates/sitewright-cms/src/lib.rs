//! # sitewright-cms — Typed Headless-CMS Client
//!
//! Typed HTTP client for the headless CMS that backs the marketing site,
//! response shapes for its delivery API, and JSON-LD structured-data
//! builders for the content it returns.
//!
//! ## Crate Policy
//!
//! - No dependency on other `sitewright-*` crates. The JSON-LD builders
//!   return plain ordered `serde_json::Value` documents; turning them into
//!   hashed inline scripts is the web layer's job via `sitewright-core`.
//! - Response shapes tolerate unknown fields — the CMS schema evolves
//!   independently of this client.

pub mod client;
pub mod config;
pub mod content;
pub mod error;
pub mod jsonld;

pub use client::CmsClient;
pub use config::{CmsConfig, ConfigError};
pub use content::{Collection, Entry, Seo, SitePage, Testimonial, Treatment};
pub use error::CmsError;
pub use jsonld::SiteIdentity;
