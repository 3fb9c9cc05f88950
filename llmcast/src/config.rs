//! Process-wide cast configuration.
//!
//! Built once at startup and handed to [`crate::Caster::new`]; never mutated
//! after the first call begins, so concurrent casts share it freely.

use serde::{Deserialize, Serialize};

use crate::error::{CastError, Result};
use crate::prompt::DEFAULT_SYSTEM_PROMPT;

/// Default inference endpoint (a local Ollama instance).
pub const DEFAULT_HOST: &str = "http://localhost:11434";

/// Configuration for the cast pipeline, loadable from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CastConfig {
    /// Base URL of the inference endpoint.
    #[serde(default = "default_host")]
    pub host: String,
    /// Model identifier the endpoint should run. Required: an empty model
    /// makes every call fail with [`CastError::Config`].
    #[serde(default)]
    pub model: String,
    /// System instruction sent with every request.
    #[serde(default = "default_system")]
    pub system: String,
}

impl Default for CastConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            model: String::new(),
            system: default_system(),
        }
    }
}

impl CastConfig {
    /// Create a configuration for the given model with default host and
    /// system instruction.
    #[must_use]
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Self::default()
        }
    }

    /// Override the endpoint host.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Override the system instruction.
    #[must_use]
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = system.into();
        self
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns [`CastError::Config`] if the TOML is invalid.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|e| CastError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CastError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml(&content)
    }

    /// Check that the configuration can actually be used for a call.
    ///
    /// # Errors
    /// Returns [`CastError::Config`] if no model identifier is set.
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(CastError::Config("no model identifier set".into()));
        }
        Ok(())
    }
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_system() -> String {
    DEFAULT_SYSTEM_PROMPT.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_ollama() {
        let config = CastConfig::default();
        assert_eq!(config.host, DEFAULT_HOST);
        assert!(config.model.is_empty());
        assert_eq!(config.system, DEFAULT_SYSTEM_PROMPT);
    }

    #[test]
    fn validate_rejects_missing_model() {
        assert!(CastConfig::default().validate().is_err());
        assert!(CastConfig::new("  ").validate().is_err());
        assert!(CastConfig::new("llama3.2").validate().is_ok());
    }

    #[test]
    fn from_toml_fills_defaults() {
        let config = CastConfig::from_toml(r#"model = "llama3.2""#).expect("should parse");
        assert_eq!(config.model, "llama3.2");
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.system, DEFAULT_SYSTEM_PROMPT);
    }

    #[test]
    fn from_toml_rejects_garbage() {
        assert!(CastConfig::from_toml("model = [not toml").is_err());
    }
}
