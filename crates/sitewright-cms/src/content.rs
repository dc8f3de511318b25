//! # Delivery API Response Shapes
//!
//! Typed shapes for the CMS delivery API. Envelope types (`Entry`,
//! `Collection`) are shared by every content type; the field structs mirror
//! the site's content model.
//!
//! All shapes are `Deserialize`-tolerant: unknown fields from CMS schema
//! additions are ignored, optional fields default, so a content-model change
//! upstream does not break the site.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single CMS entry: delivery metadata plus typed fields.
///
/// Entry ids are opaque strings assigned by the CMS.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry<T> {
    /// CMS-assigned entry identifier.
    pub id: String,
    /// Entry creation time.
    pub created_at: DateTime<Utc>,
    /// Last publish time.
    pub updated_at: DateTime<Utc>,
    /// The typed content fields.
    pub fields: T,
}

/// A paged collection of entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection<T> {
    /// The entries in this page.
    pub items: Vec<Entry<T>>,
    /// Total entries matching the query.
    pub total: usize,
    /// Offset of this page.
    #[serde(default)]
    pub skip: usize,
    /// Page size limit.
    #[serde(default)]
    pub limit: usize,
}

/// A treatment/service offered by the business.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Treatment {
    /// Display title.
    pub title: String,
    /// URL slug, unique per treatment.
    pub slug: String,
    /// Short summary for listing cards.
    pub summary: String,
    /// Long-form description (rich text rendered upstream to plain HTML-safe text).
    #[serde(default)]
    pub description: Option<String>,
    /// Display price label, e.g. "from £45". Free-form — prices are
    /// marketing copy here, not billing data.
    #[serde(default)]
    pub price_label: Option<String>,
    /// Session duration in minutes.
    #[serde(default)]
    pub duration_minutes: Option<u32>,
}

/// A customer testimonial.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    /// Customer display name.
    pub author: String,
    /// The testimonial text.
    pub quote: String,
    /// Star rating 1–5, when the customer gave one.
    #[serde(default)]
    pub rating: Option<u8>,
}

/// A free-form CMS-managed page (about, policies, etc.).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SitePage {
    /// Page title.
    pub title: String,
    /// URL slug.
    pub slug: String,
    /// Page body.
    pub body: String,
    /// Optional SEO overrides.
    #[serde(default)]
    pub seo: Option<Seo>,
}

/// SEO metadata overrides for a page.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Seo {
    /// `<title>` override.
    #[serde(default)]
    pub title: Option<String>,
    /// Meta description.
    #[serde(default)]
    pub description: Option<String>,
}
