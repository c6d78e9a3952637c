//! Request dispatcher
//!
//! Builds and sends one HTTP call per operator action and normalizes the
//! outcome into a uniform shape. Every call appends exactly one history entry
//! to the session before returning, and no failure of any kind escapes this
//! module as an error: transport failures, non-2xx statuses, and unreadable
//! bodies all come back as data.

use crate::session::{HistoryEntry, Session};
use crate::utils::excerpt;
use chrono::Utc;
use reqwest::multipart;
use reqwest::Method;
use serde_json::Value;
use std::time::Instant;
use url::Url;

pub const API_KEY_HEADER: &str = "X-API-Key";

/// Diagnostic excerpt cap for failed response bodies.
const BODY_EXCERPT_CHARS: usize = 500;

/// One uploaded file: field name, filename, raw bytes, content type. An
/// ordered sequence of these subsumes both single-field and repeated-field
/// uploads; repeated field names stay one part per file.
#[derive(Debug, Clone, PartialEq)]
pub struct FilePart {
    pub field: String,
    pub filename: String,
    pub bytes: Vec<u8>,
    pub content_type: String,
}

/// Everything needed for one dispatcher call: a fixed endpoint path, the
/// method, file parts, and plain form fields (query parameters for GET).
#[derive(Debug, Clone)]
pub struct RequestSpec {
    pub endpoint: &'static str,
    pub method: Method,
    pub files: Vec<FilePart>,
    pub fields: Vec<(String, String)>,
}

impl RequestSpec {
    pub fn get(endpoint: &'static str) -> Self {
        Self {
            endpoint,
            method: Method::GET,
            files: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn post(endpoint: &'static str) -> Self {
        Self {
            endpoint,
            method: Method::POST,
            files: Vec::new(),
            fields: Vec::new(),
        }
    }
}

/// What came back, as an explicit tagged variant rather than runtime type
/// sniffing at render time.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Response declared an `image/*` content type; `bytes` is the exact
    /// byte sequence received.
    Binary { bytes: Vec<u8>, content_type: String },
    /// Body decoded as JSON.
    Structured(Value),
    /// Non-image body that did not decode as JSON; kept verbatim.
    Text(String),
    /// Transport failure or non-success status, converted to data.
    Failed {
        message: String,
        body_excerpt: Option<String>,
    },
}

impl Outcome {
    pub fn is_binary(&self) -> bool {
        matches!(self, Outcome::Binary { .. })
    }
}

/// The uniform result shape the dispatcher returns regardless of transport
/// outcome. Exactly one of data (`Binary`/`Structured`/`Text`) or error
/// (`Failed`) is populated, mirrored by `success`.
#[derive(Debug, Clone)]
pub struct DispatchResult {
    pub success: bool,
    pub status_code: Option<u16>,
    pub response_time: Option<f64>,
    pub outcome: Outcome,
}

/// Send one request and normalize whatever happens. Appends the history
/// entry before returning, so history always accounts for this call by the
/// time any renderer sees the result.
pub async fn dispatch(
    client: &reqwest::Client,
    session: &mut Session,
    spec: RequestSpec,
) -> DispatchResult {
    let endpoint = spec.endpoint;
    let method = spec.method.clone();
    tracing::info!(%method, endpoint, "dispatching request");

    let url = match build_url(&session.config.base_url, endpoint) {
        Ok(url) => url,
        Err(message) => return failure(session, endpoint, &method, None, None, message, None),
    };

    let mut request = client
        .request(method.clone(), url)
        .header(API_KEY_HEADER, session.config.api_key.as_str());

    if method == Method::GET {
        request = request.query(&spec.fields);
    } else {
        let form = match build_form(spec.files, spec.fields) {
            Ok(form) => form,
            Err(message) => return failure(session, endpoint, &method, None, None, message, None),
        };
        request = request.multipart(form);
    }

    let start = Instant::now();
    match request.send().await {
        Ok(response) => {
            let elapsed = start.elapsed().as_secs_f64();
            let status = response.status();

            if status.is_success() {
                read_success_body(session, endpoint, &method, response, elapsed).await
            } else {
                let body = response.text().await.unwrap_or_default();
                let body_excerpt =
                    (!body.is_empty()).then(|| excerpt(&body, BODY_EXCERPT_CHARS));
                failure(
                    session,
                    endpoint,
                    &method,
                    Some(status.as_u16()),
                    Some(elapsed),
                    format!("HTTP {} for {}", status.as_u16(), endpoint),
                    body_excerpt,
                )
            }
        }
        Err(e) => {
            let elapsed = start.elapsed().as_secs_f64();
            let status = e.status().map(|s| s.as_u16());
            failure(
                session,
                endpoint,
                &method,
                status,
                Some(elapsed),
                format!("Request failed: {}", e),
                None,
            )
        }
    }
}

/// The original console concatenates base URL and path verbatim; keep that,
/// trimming only a trailing slash on the base.
fn build_url(base_url: &str, endpoint: &str) -> Result<Url, String> {
    let full = format!("{}{}", base_url.trim_end_matches('/'), endpoint);
    Url::parse(&full).map_err(|e| format!("Invalid URL {}: {}", full, e))
}

fn build_form(
    files: Vec<FilePart>,
    fields: Vec<(String, String)>,
) -> Result<multipart::Form, String> {
    let mut form = multipart::Form::new();
    for file in files {
        let part = multipart::Part::bytes(file.bytes)
            .file_name(file.filename.clone())
            .mime_str(&file.content_type)
            .map_err(|e| format!("Invalid content type for {}: {}", file.filename, e))?;
        form = form.part(file.field, part);
    }
    for (name, value) in fields {
        form = form.text(name, value);
    }
    Ok(form)
}

async fn read_success_body(
    session: &mut Session,
    endpoint: &str,
    method: &Method,
    response: reqwest::Response,
    elapsed: f64,
) -> DispatchResult {
    let status = response.status().as_u16();
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    if content_type.starts_with("image/") {
        match response.bytes().await {
            Ok(bytes) => {
                tracing::info!(endpoint, %content_type, size = bytes.len(), "received binary response");
                success(
                    session,
                    endpoint,
                    method,
                    status,
                    elapsed,
                    Outcome::Binary {
                        bytes: bytes.to_vec(),
                        content_type,
                    },
                )
            }
            Err(e) => failure(
                session,
                endpoint,
                method,
                Some(status),
                Some(elapsed),
                format!("Failed to read response body: {}", e),
                None,
            ),
        }
    } else {
        match response.text().await {
            Ok(body) => {
                let outcome = if body.is_empty() {
                    // Bodyless success (e.g. the health probe) counts as an
                    // empty structured object.
                    Outcome::Structured(Value::Object(Default::default()))
                } else {
                    match serde_json::from_str::<Value>(&body) {
                        Ok(value) => Outcome::Structured(value),
                        Err(_) => {
                            tracing::warn!(endpoint, "response is not valid JSON, treating as text");
                            Outcome::Text(body)
                        }
                    }
                };
                success(session, endpoint, method, status, elapsed, outcome)
            }
            Err(e) => failure(
                session,
                endpoint,
                method,
                Some(status),
                Some(elapsed),
                format!("Failed to read response body: {}", e),
                None,
            ),
        }
    }
}

fn success(
    session: &mut Session,
    endpoint: &str,
    method: &Method,
    status: u16,
    elapsed: f64,
    outcome: Outcome,
) -> DispatchResult {
    tracing::info!(endpoint, status, elapsed, "request succeeded");
    session.record(HistoryEntry {
        timestamp: Utc::now(),
        endpoint: endpoint.to_string(),
        method: method.to_string(),
        status_code: Some(status),
        response_time: Some(elapsed),
        error: None,
        success: true,
    });

    DispatchResult {
        success: true,
        status_code: Some(status),
        response_time: Some(elapsed),
        outcome,
    }
}

fn failure(
    session: &mut Session,
    endpoint: &str,
    method: &Method,
    status: Option<u16>,
    elapsed: Option<f64>,
    message: String,
    body_excerpt: Option<String>,
) -> DispatchResult {
    tracing::error!(
        endpoint,
        ?status,
        ?elapsed,
        %message,
        excerpt = body_excerpt.as_deref().unwrap_or(""),
        "request failed"
    );
    session.record(HistoryEntry {
        timestamp: Utc::now(),
        endpoint: endpoint.to_string(),
        method: method.to_string(),
        status_code: status,
        response_time: elapsed,
        error: Some(message.clone()),
        success: false,
    });

    DispatchResult {
        success: false,
        status_code: status,
        response_time: elapsed,
        outcome: Outcome::Failed {
            message,
            body_excerpt,
        },
    }
}
