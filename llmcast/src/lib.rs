//! # llmcast
//!
//! Typed structural casts through a locally hosted language model.
//!
//! Given a value of one shape and a target shape, the library asks the model
//! to produce a value of the target shape and deserializes the completion
//! back into a strongly typed value. One primitive does all the work:
//!
//! - [`Caster::cast`] converts a value from one shape to another.
//!
//! Four more operations are envelope sugar over `cast`:
//!
//! - [`Caster::fabricate`] synthesizes a value from a free-text hint.
//! - [`Caster::merge`] combines two values into one of a third shape.
//! - [`Caster::split`] decomposes one value into two.
//! - [`Caster::query`] answers a free-text question about a value, typed.
//!
//! Target types declare their shape via [`schemars::JsonSchema`]; the schema
//! travels inside the prompt so the model knows exactly what to emit.
//!
//! ```no_run
//! use llmcast::{CastConfig, Caster};
//! use schemars::JsonSchema;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize)]
//! struct Celsius { degrees: f64 }
//!
//! #[derive(Deserialize, JsonSchema)]
//! struct Fahrenheit { degrees: f64 }
//!
//! # async fn run() -> llmcast::Result<()> {
//! let caster = Caster::new(CastConfig::new("llama3.2"))?;
//! let f: Fahrenheit = caster.cast(&Celsius { degrees: 100.0 }).await?;
//! # Ok(())
//! # }
//! ```
//!
//! Every call is single-shot and stateless: no retries, no caching, no
//! conversation history. Failures surface as [`CastError`] variants.

pub mod cast;
pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod prompt;
pub mod schema;

pub use cast::Caster;
pub use client::OllamaClient;
pub use config::CastConfig;
pub use error::{CastError, Result};
