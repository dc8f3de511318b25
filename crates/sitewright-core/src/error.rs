//! # Error Types
//!
//! Error types for the core crate, derived with `thiserror`.
//!
//! Digest computation itself is a total function over UTF-8 text and has no
//! error conditions. The only failure point is turning structured data into
//! inline JSON text.

use thiserror::Error;

/// Error during inline-JSON serialization.
#[derive(Error, Debug)]
pub enum InlineJsonError {
    /// The value did not serialize to an object or an array of objects.
    /// Inline structured scripts carry a JSON-LD document or a list of
    /// documents; bare scalars and mixed arrays are rejected so a stray
    /// `42` or `"text"` cannot end up as a script body.
    #[error("inline script data must be a JSON object or an array of objects, got {found}")]
    NotStructured {
        /// The JSON type that was actually produced.
        found: &'static str,
    },

    /// JSON serialization failed.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
