//! Catch-all HTTP adapter.
//!
//! Every inbound request, any method and any path, is described as a
//! [`CastRequest`] and cast into a [`GeneratedResponse`]; there is no
//! routing beyond "convert whatever arrived". Two failure boundaries exist
//! per request: failures while reading the inbound request yield a generic
//! 500, failures inside the cast pipeline yield a 500 with a processing
//! error body. Details are only logged server-side.

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::extract::{Request, State};
use axum::http::{header, HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Router;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use uuid::Uuid;

use llmcast::Caster;

/// Styling and formatting guidance sent with every cast so generated pages
/// and payloads come out presentable.
pub const ADDITIONAL_MODEL_INSTRUCTIONS: &str = "In case css is used, it must be inline or appended as a <style> tag after the body. Output json when it makes sense. Ouput html where it makes sense. Ouput long html pages if not api. CSS must be fancy and modern with complex layouts. YOU MUST RESPECT CSSTHEME PARAMETERS. Ouput the full response always. Do not truncate.";

const INTERNAL_ERROR_BODY: &str = "An internal server error occurred.";
const PROCESSING_ERROR_BODY: &str = "An error occurred while processing the request.";

/// Description of one inbound HTTP request, as shown to the model.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CastRequest {
    /// Fixed formatting guidance, identical on every call.
    pub additional_model_instructions: &'static str,
    /// Fresh random identifier per request, so repeated identical requests
    /// do not collapse into one memoized answer.
    pub seed: String,
    /// HTTP method verbatim.
    pub method: String,
    /// Path including the query string.
    pub path: String,
    /// Header map, values rendered lossily as text.
    pub headers: HashMap<String, String>,
    /// Request body as text.
    pub body: String,
}

/// The response the model is asked to produce.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedResponse {
    /// HTTP status code to reply with.
    pub status_code: u16,
    /// Optional headers to set on the reply.
    pub headers: Option<HashMap<String, String>>,
    /// Response body text; may be HTML, JSON, or anything else.
    pub generated_body: String,
}

/// Build the catch-all router around a shared caster.
pub fn router(caster: Arc<Caster>) -> Router {
    Router::new().fallback(handle).with_state(caster)
}

async fn handle(State(caster): State<Arc<Caster>>, request: Request) -> Response {
    let described = match describe_request(request).await {
        Ok(described) => described,
        Err(err) => {
            error!("failed to read inbound request: {err}");
            return error_response(INTERNAL_ERROR_BODY);
        }
    };

    info!("{} {}", described.method, described.path);

    match caster.cast::<_, GeneratedResponse>(&described).await {
        Ok(generated) => apply_generated(generated),
        Err(err) => {
            error!("cast pipeline failed: {err}");
            error_response(PROCESSING_ERROR_BODY)
        }
    }
}

/// Flatten an inbound request into the value handed to the model.
async fn describe_request(request: Request) -> anyhow::Result<CastRequest> {
    let (parts, body) = request.into_parts();

    let path = parts
        .uri
        .path_and_query()
        .map_or_else(|| parts.uri.path().to_string(), |pq| pq.as_str().to_string());

    let mut headers = HashMap::new();
    for (name, value) in &parts.headers {
        headers.insert(
            name.as_str().to_string(),
            String::from_utf8_lossy(value.as_bytes()).into_owned(),
        );
    }

    let bytes = to_bytes(body, usize::MAX).await?;
    let body = String::from_utf8(bytes.to_vec())?;

    Ok(CastRequest {
        additional_model_instructions: ADDITIONAL_MODEL_INSTRUCTIONS,
        seed: Uuid::new_v4().to_string(),
        method: parts.method.to_string(),
        path,
        headers,
        body,
    })
}

/// Turn the model's response description into an actual HTTP response.
fn apply_generated(generated: GeneratedResponse) -> Response {
    let status = StatusCode::from_u16(generated.status_code).unwrap_or_else(|_| {
        warn!("generated status code {} is invalid", generated.status_code);
        StatusCode::INTERNAL_SERVER_ERROR
    });

    let mut response = Response::new(Body::empty());
    *response.status_mut() = status;

    if let Some(generated_headers) = generated.headers {
        for (name, value) in generated_headers {
            match (
                HeaderName::try_from(name.as_str()),
                HeaderValue::try_from(value.as_str()),
            ) {
                (Ok(header_name), Ok(header_value)) => {
                    response.headers_mut().insert(header_name, header_value);
                }
                _ => warn!("skipping invalid generated header: {name}"),
            }
        }
    }

    // The generated body's length is not what the model claimed it would be.
    if !generated.generated_body.trim().is_empty() {
        response.headers_mut().remove(header::CONTENT_LENGTH);
        *response.body_mut() = Body::from(generated.generated_body);
    }

    response
}

fn error_response(body: &'static str) -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
}
