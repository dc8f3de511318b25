//! # sitewright-cli — CLI Tool for the Sitewright Site
//!
//! Provides the `sitewright` command-line interface for build-time and
//! debugging tasks around the site's security surfaces.
//!
//! ## Subcommands
//!
//! - `sitewright hash` — CSP hash-source tokens for inline script files or
//!   literal source text.
//! - `sitewright policy` — Assemble the full `Content-Security-Policy`
//!   header value for a set of inline scripts.
//! - `sitewright robots` — Render a robots.txt body from crawl rules.
//!
//! ```bash
//! sitewright hash assets/analytics-stub.js
//! sitewright hash --source "console.log('hi')" --json
//! sitewright policy --script assets/analytics-stub.js
//! sitewright robots --disallow /preview --sitemap https://example.com/sitemap.xml
//! ```

pub mod hash;
pub mod policy;
pub mod robots;

use sitewright_core::HashAlgorithm;

/// Parse an `--algorithm` flag value.
pub fn parse_algorithm(value: &str) -> Result<HashAlgorithm, String> {
    match value {
        "sha256" => Ok(HashAlgorithm::Sha256),
        "sha384" => Ok(HashAlgorithm::Sha384),
        other => Err(format!("unknown algorithm '{other}' (expected sha256 or sha384)")),
    }
}
