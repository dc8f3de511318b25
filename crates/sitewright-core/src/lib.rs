//! # sitewright-core — Foundational Types for Sitewright
//!
//! This crate is the bedrock of the Sitewright stack. It defines the
//! primitives that keep a strict Content-Security-Policy header in sync with
//! every inline script embedded in a rendered page.
//!
//! ## Key Design Principles
//!
//! 1. **`InlineJson` newtype.** ALL inline-script JSON text flows through
//!    `InlineJson::new()`. No ad-hoc `serde_json::to_string()` for content
//!    that will be hashed. This prevents the content/digest split defect
//!    class by construction.
//!
//! 2. **`InlineScript` couples content and hash.** The pair is a single
//!    immutable value computed from one buffer; the two can never be derived
//!    from different source text.
//!
//! 3. **Key order is caller order.** Inline JSON serializes compactly with
//!    the exact key order provided. Re-sorting or re-formatting after hashing
//!    would silently invalidate the CSP allow-list entry in the browser.
//!
//! 4. **No global policy state.** Script hashes are collected per render in a
//!    `ScriptManifest` that travels the normal return path; the response
//!    header is assembled once, from an immutable list.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `sitewright-*` crates (leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod csp;
pub mod error;
pub mod inline;
pub mod policy;
pub mod robots;

// Re-export primary types for ergonomic imports.
pub use csp::{HashAlgorithm, InlineScript, ScriptHash};
pub use error::InlineJsonError;
pub use inline::InlineJson;
pub use policy::{CspPolicy, ScriptManifest};
pub use robots::{RobotsGroup, RobotsPolicy};
