//! # JSON-LD Structured Data Builders
//!
//! Builds schema.org documents for the site's inline `<script
//! type="application/ld+json">` blocks: the organization card, the local
//! business listing, and per-treatment service markup.
//!
//! Documents are plain `serde_json::Value`s with deterministic key order
//! (insertion order, preserved through serialization). The web layer feeds
//! them to the inline-script hasher, so the bytes produced here are exactly
//! the bytes embedded on the page.

use serde_json::{json, Value};

use crate::content::Treatment;

/// The business identity rendered into structured data.
///
/// This is deploy-time configuration, not CMS content — the legal identity
/// of the site owner does not live in the content model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteIdentity {
    /// Trading name.
    pub name: String,
    /// Canonical site URL.
    pub url: String,
    /// Absolute logo URL.
    pub logo: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Street address line.
    pub street_address: Option<String>,
    /// Town or city.
    pub locality: Option<String>,
    /// Region or county.
    pub region: Option<String>,
    /// Postal code.
    pub postal_code: Option<String>,
    /// Social profile URLs for the `sameAs` property.
    pub social_profiles: Vec<String>,
}

impl SiteIdentity {
    /// Identity with only the required name and URL.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            logo: None,
            phone: None,
            street_address: None,
            locality: None,
            region: None,
            postal_code: None,
            social_profiles: Vec::new(),
        }
    }

    fn postal_address(&self) -> Option<Value> {
        if self.street_address.is_none()
            && self.locality.is_none()
            && self.region.is_none()
            && self.postal_code.is_none()
        {
            return None;
        }
        let mut address = json!({"@type": "PostalAddress"});
        let map = address.as_object_mut().expect("literal object");
        if let Some(street) = &self.street_address {
            map.insert("streetAddress".into(), json!(street));
        }
        if let Some(locality) = &self.locality {
            map.insert("addressLocality".into(), json!(locality));
        }
        if let Some(region) = &self.region {
            map.insert("addressRegion".into(), json!(region));
        }
        if let Some(postal_code) = &self.postal_code {
            map.insert("postalCode".into(), json!(postal_code));
        }
        Some(address)
    }
}

/// schema.org `Organization` document for the site header/footer script.
pub fn organization(identity: &SiteIdentity) -> Value {
    let mut doc = json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": identity.name,
        "url": identity.url,
    });
    let map = doc.as_object_mut().expect("literal object");
    if let Some(logo) = &identity.logo {
        map.insert("logo".into(), json!(logo));
    }
    if let Some(phone) = &identity.phone {
        map.insert("telephone".into(), json!(phone));
    }
    if !identity.social_profiles.is_empty() {
        map.insert("sameAs".into(), json!(identity.social_profiles));
    }
    doc
}

/// schema.org `LocalBusiness` document including the postal address.
pub fn local_business(identity: &SiteIdentity) -> Value {
    let mut doc = json!({
        "@context": "https://schema.org",
        "@type": "LocalBusiness",
        "name": identity.name,
        "url": identity.url,
    });
    let map = doc.as_object_mut().expect("literal object");
    if let Some(phone) = &identity.phone {
        map.insert("telephone".into(), json!(phone));
    }
    if let Some(address) = identity.postal_address() {
        map.insert("address".into(), address);
    }
    doc
}

/// schema.org `Service` document for a treatment detail page.
pub fn treatment_service(treatment: &Treatment, identity: &SiteIdentity) -> Value {
    let mut doc = json!({
        "@context": "https://schema.org",
        "@type": "Service",
        "name": treatment.title,
        "description": treatment.summary,
        "provider": {
            "@type": "LocalBusiness",
            "name": identity.name,
            "url": identity.url,
        },
        "url": format!("{}/treatments/{}", identity.url.trim_end_matches('/'), treatment.slug),
    });
    let map = doc.as_object_mut().expect("literal object");
    if let Some(duration) = treatment.duration_minutes {
        // ISO 8601 duration, e.g. PT60M.
        map.insert("serviceDuration".into(), json!(format!("PT{duration}M")));
    }
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_identity() -> SiteIdentity {
        SiteIdentity {
            name: "Glow Clinic".into(),
            url: "https://glowclinic.example".into(),
            logo: Some("https://glowclinic.example/logo.png".into()),
            phone: Some("+44 20 7946 0000".into()),
            street_address: Some("12 High Street".into()),
            locality: Some("Brighton".into()),
            region: Some("East Sussex".into()),
            postal_code: Some("BN1 1AA".into()),
            social_profiles: vec!["https://instagram.com/glowclinic".into()],
        }
    }

    #[test]
    fn organization_serialized_order() {
        let doc = organization(&full_identity());
        let text = serde_json::to_string(&doc).unwrap();
        assert_eq!(
            text,
            r#"{"@context":"https://schema.org","@type":"Organization","name":"Glow Clinic","url":"https://glowclinic.example","logo":"https://glowclinic.example/logo.png","telephone":"+44 20 7946 0000","sameAs":["https://instagram.com/glowclinic"]}"#
        );
    }

    #[test]
    fn organization_minimal_omits_optionals() {
        let doc = organization(&SiteIdentity::new("Glow Clinic", "https://glowclinic.example"));
        let map = doc.as_object().unwrap();
        assert!(!map.contains_key("logo"));
        assert!(!map.contains_key("telephone"));
        assert!(!map.contains_key("sameAs"));
    }

    #[test]
    fn local_business_includes_address() {
        let doc = local_business(&full_identity());
        assert_eq!(doc["address"]["@type"], "PostalAddress");
        assert_eq!(doc["address"]["postalCode"], "BN1 1AA");
    }

    #[test]
    fn local_business_without_address_fields() {
        let doc = local_business(&SiteIdentity::new("Glow Clinic", "https://glowclinic.example"));
        assert!(doc.as_object().unwrap().get("address").is_none());
    }

    #[test]
    fn treatment_service_document() {
        let treatment = Treatment {
            title: "Deep Tissue Massage".into(),
            slug: "deep-tissue-massage".into(),
            summary: "Targeted pressure for chronic tension.".into(),
            description: None,
            price_label: None,
            duration_minutes: Some(60),
        };
        let doc = treatment_service(&treatment, &full_identity());
        assert_eq!(doc["@type"], "Service");
        assert_eq!(doc["provider"]["name"], "Glow Clinic");
        assert_eq!(doc["serviceDuration"], "PT60M");
        assert_eq!(
            doc["url"],
            "https://glowclinic.example/treatments/deep-tissue-massage"
        );
    }

    #[test]
    fn builders_are_deterministic() {
        let identity = full_identity();
        let a = serde_json::to_string(&organization(&identity)).unwrap();
        let b = serde_json::to_string(&organization(&identity)).unwrap();
        assert_eq!(a, b);
    }
}
