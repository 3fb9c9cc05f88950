//! Schema descriptions for target shapes.
//!
//! Types opt in by deriving [`schemars::JsonSchema`]; there is no runtime
//! reflection. The schema is recomputed per call and shipped inside the
//! prompt, so it is generated fully inlined: `$ref` pointers into a
//! definitions section would be meaningless to the model.

use schemars::gen::{SchemaGenerator, SchemaSettings};
use schemars::JsonSchema;
use serde_json::Value;

/// Produce an inline draft-07 JSON Schema for `T`.
///
/// # Panics
///
/// Only if the generated schema cannot be re-serialized as JSON, which does
/// not happen for schemas `schemars` itself produces.
#[must_use]
pub fn describe<T: JsonSchema>() -> Value {
    let mut settings = SchemaSettings::draft07();
    settings.inline_subschemas = true;

    let generator = SchemaGenerator::new(settings);
    let root = generator.into_root_schema_for::<T>();

    serde_json::to_value(root).expect("schema serializes to JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize, JsonSchema)]
    #[allow(dead_code)]
    struct Inner {
        label: String,
    }

    #[derive(Deserialize, JsonSchema)]
    #[allow(dead_code)]
    struct Outer {
        count: u32,
        inner: Inner,
    }

    #[derive(Deserialize, JsonSchema)]
    #[allow(dead_code)]
    enum Mood {
        Calm,
        Stormy,
    }

    #[test]
    fn describes_nested_fields_inline() {
        let schema = describe::<Outer>();
        let text = schema.to_string();
        assert!(text.contains("count"));
        assert!(text.contains("inner"));
        assert!(text.contains("label"));
        // Inline generation means the nested shape is embedded, not referenced.
        assert!(!text.contains("$ref"));
    }

    #[test]
    fn enums_render_as_string_constants() {
        let schema = describe::<Mood>().to_string();
        assert!(schema.contains("Calm"));
        assert!(schema.contains("Stormy"));
    }
}
