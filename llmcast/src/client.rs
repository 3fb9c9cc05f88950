//! Model client: the sole network-I/O component.
//!
//! One synchronous-in-spirit exchange per call: POST the prompt to the
//! configured endpoint, unwrap the completion text from the endpoint's
//! response envelope, hand it back. No retries, no caching, no streaming;
//! any timeout is the transport's business.

use reqwest::Client;
use serde_json::json;
use tracing::debug;

use crate::config::CastConfig;
use crate::error::{CastError, Result};

/// Sampling temperature for every request. Deliberately high: casts lean on
/// the model inventing plausible data, not on reproducibility.
const TEMPERATURE: f64 = 1.0;

/// Client for an Ollama-style `/api/generate` endpoint.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    host: String,
    model: String,
    http: Client,
}

impl OllamaClient {
    /// Create a client from a validated configuration.
    ///
    /// # Errors
    /// Returns [`CastError::Config`] if no model identifier is set.
    pub fn new(config: &CastConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            host: config.host.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            http: Client::new(),
        })
    }

    /// Send one prompt and return the raw completion text.
    ///
    /// The endpoint's reply is itself a JSON envelope; the completion lives
    /// in its `response` field and is unwrapped here before extraction.
    ///
    /// # Errors
    /// [`CastError::Transport`] if the request fails or the endpoint returns
    /// an error status; [`CastError::EmptyCompletion`] if the unwrapped text
    /// is missing or blank.
    pub async fn generate(&self, prompt: &str, system: &str) -> Result<String> {
        let url = format!("{}/api/generate", self.host);
        let body = json!({
            "model": self.model,
            "prompt": prompt,
            "stream": false,
            "system": system,
            "options": {
                "temperature": TEMPERATURE,
            },
        });

        let response = self.http.post(&url).json(&body).send().await?;
        let payload: serde_json::Value = response.error_for_status()?.json().await?;

        let text = payload["response"].as_str().unwrap_or_default();
        if text.trim().is_empty() {
            return Err(CastError::EmptyCompletion);
        }

        debug!("model completion: {text}");
        Ok(text.to_string())
    }
}
