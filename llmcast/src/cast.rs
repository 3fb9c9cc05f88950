//! The transformation operations.
//!
//! [`Caster::cast`] is the single primitive: serialize the input, describe
//! the target shape, prompt the model, extract the typed result. The other
//! four operations never touch the prompt; they only pick a different
//! request/response envelope and let the model infer the semantics from the
//! shapes and the system instruction.

use std::any::type_name;

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::client::OllamaClient;
use crate::config::CastConfig;
use crate::error::{CastError, Result};
use crate::{extract, prompt, schema};

/// Entry point for all transformation operations.
///
/// Holds the immutable process configuration and one HTTP client; cheap to
/// clone and safe to share across concurrent calls, since no call mutates
/// any of it.
#[derive(Debug, Clone)]
pub struct Caster {
    config: CastConfig,
    client: OllamaClient,
}

impl Caster {
    /// Create a caster from a configuration.
    ///
    /// # Errors
    /// Returns [`CastError::Config`] if the configuration has no model set.
    pub fn new(config: CastConfig) -> Result<Self> {
        let client = OllamaClient::new(&config)?;
        Ok(Self { config, client })
    }

    /// The configuration this caster was built with.
    #[must_use]
    pub fn config(&self) -> &CastConfig {
        &self.config
    }

    /// Convert a value of one shape into a value of another shape.
    ///
    /// This is the primitive every other operation reduces to. The result
    /// either structurally matches `O` or the call fails; there is no
    /// partial or differently-shaped fallback.
    ///
    /// # Errors
    /// Any [`CastError`] from the prompt/transport/extraction pipeline.
    pub async fn cast<I, O>(&self, input: &I) -> Result<O>
    where
        I: Serialize,
        O: DeserializeOwned + JsonSchema,
    {
        let input_json =
            serde_json::to_string_pretty(input).map_err(CastError::Serialization)?;
        let target_schema = schema::describe::<O>();
        let schema_json =
            serde_json::to_string(&target_schema).map_err(CastError::Serialization)?;

        let prompt = prompt::build_prompt(
            type_name::<I>(),
            type_name::<O>(),
            &input_json,
            &schema_json,
        );
        debug!("casting {} -> {}", type_name::<I>(), type_name::<O>());

        let completion = self.client.generate(&prompt, &self.config.system).await?;
        let span = extract::extract_json(&completion)?;
        extract::parse_typed(span)
    }

    /// Synthesize a plausible value of `O` from a free-text hint, with no
    /// real input data.
    ///
    /// # Errors
    /// Propagates any failure from [`Caster::cast`] unchanged.
    pub async fn fabricate<O>(&self, hint: &str) -> Result<O>
    where
        O: DeserializeOwned + JsonSchema,
    {
        let response: FabricateResponse<O> =
            self.cast(&FabricateRequest { prompt: hint }).await?;
        Ok(response.instance)
    }

    /// Combine two typed values into one of a third shape, filling gaps
    /// plausibly.
    ///
    /// # Errors
    /// Propagates any failure from [`Caster::cast`] unchanged.
    pub async fn merge<A, B, O>(&self, input: &A, input2: &B) -> Result<O>
    where
        A: Serialize,
        B: Serialize,
        O: DeserializeOwned + JsonSchema,
    {
        let response: MergeResponse<O> =
            self.cast(&MergeRequest { input, input2 }).await?;
        Ok(response.merged_instance)
    }

    /// Decompose one value into two differently-shaped values.
    ///
    /// # Errors
    /// Propagates any failure from [`Caster::cast`] unchanged.
    pub async fn split<I, O1, O2>(&self, input: &I) -> Result<(O1, O2)>
    where
        I: Serialize,
        O1: DeserializeOwned + JsonSchema,
        O2: DeserializeOwned + JsonSchema,
    {
        let response: SplitResponse<O1, O2> =
            self.cast(&SplitRequest { input }).await?;
        Ok((response.instance, response.instance2))
    }

    /// Answer a free-text question about the input, returned as a single
    /// typed value (commonly a scalar wrapped in a one-field struct).
    ///
    /// The result shape is caller-chosen and unconstrained; the system
    /// instruction steers the model away from unwanted array wrapping in
    /// prose only, with no structural enforcement.
    ///
    /// # Errors
    /// Propagates any failure from [`Caster::cast`] unchanged.
    pub async fn query<I, O>(&self, input: &I, query: &str) -> Result<O>
    where
        I: Serialize,
        O: DeserializeOwned + JsonSchema,
    {
        let response: QueryResponse<O> =
            self.cast(&QueryRequest { input, query }).await?;
        Ok(response.instance)
    }
}

// Envelope types. These exist only to describe one operation's wire shape
// to the model and the extractor; they are never persisted and never appear
// in the public API.

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FabricateRequest<'a> {
    prompt: &'a str,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
struct FabricateResponse<T> {
    instance: T,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MergeRequest<'a, A, B> {
    input: &'a A,
    input2: &'a B,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
struct MergeResponse<T> {
    merged_instance: T,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SplitRequest<'a, I> {
    input: &'a I,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
struct SplitResponse<T1, T2> {
    instance: T1,
    instance2: T2,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryRequest<'a, I> {
    input: &'a I,
    query: &'a str,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
struct QueryResponse<T> {
    instance: T,
}
