//! Prompt construction for cast calls.
//!
//! The prompt is a deterministic, testable artifact: the same input value
//! and target schema always produce byte-identical prompt text. Only the
//! model's completion is non-deterministic.

/// System instruction sent with every request unless overridden in
/// [`crate::CastConfig`].
///
/// The wording is load-bearing: it is the only thing steering the model
/// toward bare JSON output, plausible gap-filling on merges, and exact
/// scalar answers on queries. There is no structural enforcement behind it.
pub const DEFAULT_SYSTEM_PROMPT: &str = r"You are a conversion assistant. Given two class definitions and input data, your job is to generate plausible output data in the target format
You always return valid JSON matching the target structure, even if you have to invent or infer values. Do not output anything but JSON.
Do not output markdown. Do not wrap the output in an object like {{ 'result': [...] }}. Only output the array directly if an array is requested.
You must not state that you are an AI model.
You must pretend data to be real and plausible.
You must infer and invent data to make it plausible.
Content must always fill the request with proper sounding data.
Do not generate things like 'this is an example' or 'this provides information about the topic' placeholders.
You must not output null values on non-nullable properties.
You must fill requested values with plausible data.
When asked to merge objects, merge what you can, fill the rest and only ever output the requested type.
Do not generate an array, unless specified by the schema.
If asked to query something, return the requested value only. Do not generate an array if not specified.
If asked to query something, respect the query EXACTLY. Do not add anything else.
Seriously, don't generate an array unless explicitly asked for it. Please.
Make sure to respect the output types defined in the schema.";

/// Build the per-call prompt: a restated conversion instruction, the
/// serialized input value, and the target schema description.
#[must_use]
pub fn build_prompt(
    input_type: &str,
    output_type: &str,
    input_json: &str,
    schema_json: &str,
) -> String {
    format!(
        "Convert the following object of type {input_type} to an object of type {output_type}.\n\
         \n\
         Input object: {input_json}\n\
         \n\
         Output type definition: {schema_json}"
    )
}
