//! Error types for cast operations.

use thiserror::Error;

/// Everything that can go wrong between a cast call and its typed result.
///
/// None of these are retried or recovered internally: a cast either returns
/// a valid typed value or fails with exactly one of the variants below.
#[derive(Debug, Error)]
pub enum CastError {
    /// Configuration is unusable (e.g. no model identifier set).
    #[error("configuration error: {0}")]
    Config(String),

    /// The HTTP request to the inference endpoint failed outright.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint replied, but the unwrapped completion text was blank
    /// or the `response` field was missing entirely.
    #[error("model returned an empty completion")]
    EmptyCompletion,

    /// No `{`/`}` delimiter pair could be located in the completion text.
    #[error("invalid model response: no JSON object found in completion")]
    InvalidResponse,

    /// A value could not be serialized for inclusion in the prompt.
    #[error("failed to serialize input value")]
    Serialization(#[source] serde_json::Error),

    /// The candidate JSON span did not parse as the target shape.
    #[error("failed to deserialize model response")]
    Deserialization(#[source] serde_json::Error),

    /// The candidate JSON span parsed, but yielded an absent value.
    #[error("model response deserialized to null")]
    NullResult,
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, CastError>;
