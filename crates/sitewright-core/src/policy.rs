//! # CSP Policy Assembly
//!
//! Builds the `Content-Security-Policy` header value from an ordered set of
//! directives plus the script hashes collected during a page render.
//!
//! ## No Global Allow-List
//!
//! The allow-list of permitted script hashes is assembled from possibly many
//! call sites across one render. Rather than mutable global accumulation,
//! each call site records its hash in a per-render [`ScriptManifest`] that
//! travels the normal return path; the response layer folds the manifest
//! into the base policy exactly once. The header is therefore always built
//! from a complete, immutable list.

use crate::csp::{InlineScript, ScriptHash};

/// A single CSP directive: a name and its ordered source list.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Directive {
    name: String,
    sources: Vec<String>,
}

/// An ordered Content-Security-Policy, rendered with [`CspPolicy::header_value`].
///
/// Directive order and source order are both preserved as given, so the
/// rendered header is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CspPolicy {
    directives: Vec<Directive>,
}

impl CspPolicy {
    /// An empty policy with no directives.
    pub fn new() -> Self {
        Self::default()
    }

    /// The strict baseline for server-rendered pages: same-origin everything,
    /// no plugins, no framing, and a `script-src` that only executes inline
    /// scripts explicitly allow-listed by hash.
    pub fn strict_page() -> Self {
        Self::new()
            .directive("default-src", ["'self'"])
            .directive("script-src", ["'self'"])
            .directive("style-src", ["'self'"])
            .directive("img-src", ["'self'"])
            .directive("object-src", ["'none'"])
            .directive("base-uri", ["'self'"])
            .directive("frame-ancestors", ["'none'"])
    }

    /// Append a directive. If the directive already exists, the sources are
    /// appended to it instead (first occurrence keeps its position).
    pub fn directive<I, S>(mut self, name: &str, sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push_sources(name, sources.into_iter().map(Into::into));
        self
    }

    /// Add a script hash to the `script-src` allow-list.
    ///
    /// The token is single-quoted here, per CSP hash-source syntax in header
    /// values. Duplicate hashes are ignored.
    pub fn allow_script(&mut self, hash: &ScriptHash) {
        let quoted = format!("'{hash}'");
        self.push_sources("script-src", std::iter::once(quoted));
    }

    /// Fold every hash collected in a render manifest into `script-src`.
    pub fn with_scripts(mut self, manifest: &ScriptManifest) -> Self {
        for hash in manifest.hashes() {
            self.allow_script(hash);
        }
        self
    }

    /// Render the header value: `name src1 src2; name2 src1; ...`.
    ///
    /// Ready for direct insertion as the `Content-Security-Policy` header —
    /// no further transformation is applied downstream.
    pub fn header_value(&self) -> String {
        self.directives
            .iter()
            .map(|d| {
                if d.sources.is_empty() {
                    d.name.clone()
                } else {
                    format!("{} {}", d.name, d.sources.join(" "))
                }
            })
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn push_sources(&mut self, name: &str, sources: impl Iterator<Item = String>) {
        if let Some(existing) = self.directives.iter_mut().find(|d| d.name == name) {
            for source in sources {
                if !existing.sources.contains(&source) {
                    existing.sources.push(source);
                }
            }
        } else {
            let mut deduped: Vec<String> = Vec::new();
            for source in sources {
                if !deduped.contains(&source) {
                    deduped.push(source);
                }
            }
            self.directives.push(Directive {
                name: name.to_string(),
                sources: deduped,
            });
        }
    }
}

impl std::fmt::Display for CspPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.header_value())
    }
}

/// Per-render collection of the script hashes a page actually embedded.
///
/// Handlers record every [`InlineScript`] they place on the page; the
/// response layer reads the finished manifest when assembling the header.
/// Hashes are deduplicated and kept in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptManifest {
    hashes: Vec<ScriptHash>,
}

impl ScriptManifest {
    /// An empty manifest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an inline script that was embedded in the render.
    pub fn record(&mut self, script: &InlineScript) {
        self.record_hash(script.hash().clone());
    }

    /// Record a bare hash (for content produced outside [`InlineScript`]).
    pub fn record_hash(&mut self, hash: ScriptHash) {
        if !self.hashes.contains(&hash) {
            self.hashes.push(hash);
        }
    }

    /// The collected hashes, in first-seen order.
    pub fn hashes(&self) -> &[ScriptHash] {
        &self.hashes
    }

    /// Number of distinct hashes collected.
    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    /// Returns true if no script was recorded.
    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }
}
