//! # CSP Script Hashes — Hash-Source Tokens for Inline Scripts
//!
//! Computes the cryptographic digest of inline script content and renders it
//! as a CSP hash-source token (`sha256-<base64>`), so a strict
//! `Content-Security-Policy` can allow-list exact inline payloads without
//! `unsafe-inline`.
//!
//! ## Integrity Invariant
//!
//! [`InlineScript`] is the pairing of script text and its hash. Both fields
//! are private and every constructor computes the hash from the same buffer
//! it stores as content, so `script.hash()` always equals the hash of
//! `script.content()` — the invariant is structural, not documented-only.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256, Sha384};

use crate::error::InlineJsonError;
use crate::inline::InlineJson;

/// The hash algorithm used for a CSP hash-source token.
///
/// CSP Level 2 accepts sha256, sha384, and sha512 sources. Sitewright emits
/// sha256 everywhere; sha384 is supported for operators that standardize on
/// longer digests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashAlgorithm {
    /// SHA-256 — the default for all generated tokens.
    Sha256,
    /// SHA-384.
    Sha384,
}

impl HashAlgorithm {
    /// Returns the CSP algorithm tag for this algorithm.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
        }
    }

    /// Digest length in bytes.
    pub fn digest_len(&self) -> usize {
        match self {
            Self::Sha256 => 32,
            Self::Sha384 => 48,
        }
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A script digest with its algorithm tag.
///
/// `Display` renders the CSP hash-source token, e.g.
/// `sha256-RBNvo1WzZ4oRRq0W9+hknpT7T8If536DEMBg9hyq/4o=`. The token is
/// unquoted; single quotes are added only where the header value is
/// assembled ([`crate::policy::CspPolicy`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScriptHash {
    algorithm: HashAlgorithm,
    bytes: Vec<u8>,
}

impl ScriptHash {
    /// Compute the SHA-256 hash of script source text.
    ///
    /// Hashes the exact UTF-8 byte sequence of `source`. Pure function:
    /// deterministic, no side effects, no I/O.
    pub fn sha256(source: &str) -> Self {
        Self::compute(HashAlgorithm::Sha256, source)
    }

    /// Compute the hash of script source text with the given algorithm.
    pub fn compute(algorithm: HashAlgorithm, source: &str) -> Self {
        let bytes = match algorithm {
            HashAlgorithm::Sha256 => Sha256::digest(source.as_bytes()).to_vec(),
            HashAlgorithm::Sha384 => Sha384::digest(source.as_bytes()).to_vec(),
        };
        Self { algorithm, bytes }
    }

    /// The algorithm that produced this hash.
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// The raw digest bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Standard (padded) base64 encoding of the raw digest.
    pub fn to_base64(&self) -> String {
        BASE64.encode(&self.bytes)
    }

    /// The hash-source token, identical to the `Display` rendering.
    pub fn token(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for ScriptHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.algorithm, self.to_base64())
    }
}

/// An inline script body paired with its CSP hash.
///
/// Constructed only through [`InlineScript::from_source`] and
/// [`InlineScript::from_json`]; both compute the hash from the exact string
/// stored as content. The content must be embedded verbatim, byte for byte,
/// as the `<script>` body, and the hash added to the page's `script-src`
/// allow-list — [`crate::policy::ScriptManifest`] carries it there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineScript {
    content: String,
    hash: ScriptHash,
}

impl InlineScript {
    /// Wrap literal script source text.
    pub fn from_source(source: impl Into<String>) -> Self {
        let content = source.into();
        let hash = ScriptHash::sha256(&content);
        Self { content, hash }
    }

    /// Serialize structured data to compact, order-preserving JSON and hash
    /// that exact text. This is the path for JSON-LD and similar inline
    /// data scripts.
    ///
    /// # Errors
    ///
    /// Returns [`InlineJsonError`] if the value is not an object or an array
    /// of objects, or if serialization fails.
    pub fn from_json(value: &impl Serialize) -> Result<Self, InlineJsonError> {
        Ok(Self::from_inline_json(InlineJson::new(value)?))
    }

    /// Wrap already-canonicalized inline JSON.
    pub fn from_inline_json(json: InlineJson) -> Self {
        let content = json.into_string();
        let hash = ScriptHash::sha256(&content);
        Self { content, hash }
    }

    /// The script body to embed verbatim.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The matching CSP hash.
    pub fn hash(&self) -> &ScriptHash {
        &self.hash
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Hashing is deterministic for arbitrary text.
        #[test]
        fn hash_deterministic(source in ".*") {
            prop_assert_eq!(ScriptHash::sha256(&source), ScriptHash::sha256(&source));
        }

        /// The token always has the tag prefix and fixed encoded length.
        #[test]
        fn token_shape(source in ".*") {
            let token = ScriptHash::sha256(&source).to_string();
            prop_assert!(token.starts_with("sha256-"));
            prop_assert_eq!(token.len(), "sha256-".len() + 44);
        }

        /// The coupled pair always satisfies hash == sha256(content).
        #[test]
        fn inline_script_invariant(source in ".*") {
            let script = InlineScript::from_source(source);
            prop_assert_eq!(script.hash(), &ScriptHash::sha256(script.content()));
        }
    }
}
