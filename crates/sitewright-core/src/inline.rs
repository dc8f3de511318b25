//! # Inline JSON — Exact-Byte Script Text Production
//!
//! This module defines `InlineJson`, the sole construction path for the JSON
//! text of an inline `<script>` body that will be allow-listed by hash in a
//! Content-Security-Policy header.
//!
//! ## Integrity Invariant
//!
//! The `InlineJson` newtype has a private inner field. The only way to
//! construct it is through `InlineJson::new()`, which serializes the value
//! compactly (no extraneous whitespace) with key order exactly as provided.
//!
//! The browser compares the hash of the *embedded bytes* against the header's
//! allow-list. Any transformation between hashing and embedding — key
//! re-sorting, pretty-printing, minification — silently blocks the script.
//! Centralizing text production here makes that defect class structurally
//! impossible: the hash and the embedded body always come from one string.
//!
//! ## Shape Restriction
//!
//! Accepted inputs are a JSON object or an array whose elements are all
//! objects (a JSON-LD document, or a list of them). Everything else is
//! rejected with [`InlineJsonError::NotStructured`].

use serde::Serialize;
use serde_json::Value;

use crate::error::InlineJsonError;

/// Compact JSON text produced exclusively through [`InlineJson::new()`],
/// with caller-provided key order preserved.
///
/// # Invariants
///
/// - The only constructor is `InlineJson::new()`.
/// - Serialization is compact: no spaces, no newlines, no trailing bytes.
/// - Object key order is the order the caller provided (struct field order
///   for derived types, insertion order for maps). Keys are never sorted.
/// - The text is a JSON object or an array of objects.
/// - `<`, U+2028, and U+2029 are emitted as `\u003c`/`\u2028`/`\u2029`
///   escapes, so the text can never contain a `</script>` terminator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InlineJson(String);

impl InlineJson {
    /// Serialize a value to inline-script JSON text.
    ///
    /// # Errors
    ///
    /// Returns `InlineJsonError::NotStructured` if the value serializes to
    /// anything other than an object or an array of objects. Returns
    /// `InlineJsonError::Serialization` if JSON serialization fails.
    pub fn new(value: &impl Serialize) -> Result<Self, InlineJsonError> {
        let value = serde_json::to_value(value)?;
        check_structured(&value)?;
        // serde_json's compact writer emits map entries in iteration order;
        // with preserve_order that is insertion order, never sorted.
        let text = escape_for_script_element(&serde_json::to_string(&value)?);
        Ok(Self(text))
    }

    /// Access the serialized text. This exact string must be embedded
    /// verbatim as the `<script>` body.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length of the serialized text in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the serialized text is empty. Cannot occur for
    /// values passing the shape check, but kept for API completeness.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the wrapper, yielding the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for InlineJson {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for InlineJson {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Escape characters that are dangerous inside a `<script>` element body.
///
/// `serde_json` leaves `<` unescaped, so a string value containing
/// `</script>` would terminate the element mid-body and hand the rest of the
/// payload to the HTML parser as markup. In compact JSON output `<` can only
/// occur inside string literals, where the `\u003c` escape denotes the same
/// character, so this rewrite changes bytes but not the parsed document's
/// value. U+2028/U+2029
/// are escaped for the same reason: valid in JSON strings, line terminators
/// to a JavaScript parser.
///
/// Runs before the text is stored, so the hash covers the escaped bytes and
/// the content/hash pairing is unaffected.
fn escape_for_script_element(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => escaped.push_str("\\u003c"),
            '\u{2028}' => escaped.push_str("\\u2028"),
            '\u{2029}' => escaped.push_str("\\u2029"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Reject values that are not an object or an array of objects.
fn check_structured(value: &Value) -> Result<(), InlineJsonError> {
    match value {
        Value::Object(_) => Ok(()),
        Value::Array(items) => {
            for item in items {
                if !item.is_object() {
                    return Err(InlineJsonError::NotStructured {
                        found: json_type_name(item),
                    });
                }
            }
            Ok(())
        }
        other => Err(InlineJsonError::NotStructured {
            found: json_type_name(other),
        }),
    }
}

/// Human-readable JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
