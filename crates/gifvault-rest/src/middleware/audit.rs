//! Request audit middleware.
//!
//! Wraps every audited route as one scoped operation: capture the request,
//! run the handler, capture the final response, sanitize the logged copies,
//! and append a `ServiceLog` record. The response forwarded to the client is
//! rebuilt from the captured bytes and is never altered by sanitization.

use axum::{
    body::{to_bytes, Body, Bytes},
    extract::{ConnectInfo, State},
    http::{Method, Request},
    middleware::Next,
    response::Response,
};
use gifvault_core::{ServiceLog, UserId};
use gifvault_repository::ServiceLogRepository;
use gifvault_security::Claims;
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, warn};

/// Request body field stripped from logged copies.
const PASSWORD_FIELD: &str = "password";

/// Response body pointer stripped from logged copies.
const ACCESS_TOKEN_FIELD: &str = "access_token";

/// Audit middleware state.
#[derive(Clone)]
pub struct AuditState {
    pub service_logs: Arc<dyn ServiceLogRepository>,
}

impl AuditState {
    /// Creates new audit middleware state.
    #[must_use]
    pub fn new(service_logs: Arc<dyn ServiceLogRepository>) -> Self {
        Self { service_logs }
    }
}

/// Audit middleware wrapping the whole call pipeline.
pub async fn audit_middleware(
    State(state): State<AuditState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let start = Instant::now();

    let method = request.method().clone();
    let service = request.uri().path().trim_start_matches('/').to_string();
    let query = request.uri().query().map(ToString::to_string);
    let ip_address = client_ip(&request);

    // Buffer the request body so both the handler and the log can read it.
    let (parts, body) = request.into_parts();
    let request_bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Failed to buffer request body for audit: {}", e);
            Bytes::new()
        }
    };
    let request = Request::from_parts(parts, Body::from(request_bytes.clone()));

    let response = next.run(request).await;

    let user_id = response
        .extensions()
        .get::<Claims>()
        .and_then(Claims::user_id);
    let response_status = response.status().as_u16();

    // Buffer the response and forward the identical bytes to the client.
    let (parts, body) = response.into_parts();
    let response_bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Failed to buffer response body for audit: {}", e);
            Bytes::new()
        }
    };
    let response = Response::from_parts(parts, Body::from(response_bytes.clone()));

    let duration = format!("{}ms", (start.elapsed().as_secs_f64() * 1000.0).round());

    let request_body = if method == Method::GET {
        // GET carries its input in the query string; credentials never live
        // there, so it is logged verbatim.
        query_to_json(query.as_deref())
    } else {
        sanitize_request_body(&request_bytes)
    };
    let response_body = sanitize_response_body(&response_bytes);

    let log = ServiceLog::new(user_id, service, response_status)
        .with_request_body(request_body)
        .with_response_body(response_body)
        .with_ip_address(ip_address)
        .with_duration(duration);

    emit(&state, log).await;

    response
}

/// Writes the record; a failing audit store must not replace the response.
async fn emit(state: &AuditState, log: ServiceLog) {
    info!(
        target: "audit",
        user_id = ?log.user_id.map(UserId::into_inner),
        service = %log.service,
        status = log.response_status,
        ip = %log.ip_address,
        duration = %log.duration,
        "Service interaction"
    );

    if let Err(e) = state.service_logs.save(&log).await {
        error!("Failed to persist service log for '{}': {}", log.service, e);
    }
}

/// Resolves the client IP: `X-Forwarded-For` first, then the peer address.
fn client_ip(request: &Request<Body>) -> String {
    if let Some(forwarded) = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
    {
        if let Some(first) = forwarded.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return first.to_string();
            }
        }
    }

    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map_or_else(|| "unknown".to_string(), |info| info.0.ip().to_string())
}

/// Decodes the query string into a JSON object of string values.
fn query_to_json(query: Option<&str>) -> JsonValue {
    let Some(query) = query else {
        return JsonValue::Object(serde_json::Map::new());
    };

    let params: BTreeMap<String, String> =
        serde_urlencoded::from_str(query).unwrap_or_default();

    JsonValue::Object(
        params
            .into_iter()
            .map(|(k, v)| (k, JsonValue::String(v)))
            .collect(),
    )
}

/// Parses the request body and strips the top-level `password` field.
fn sanitize_request_body(bytes: &Bytes) -> JsonValue {
    let mut value = parse_json(bytes);
    if let Some(object) = value.as_object_mut() {
        object.remove(PASSWORD_FIELD);
    }
    value
}

/// Parses the response body and strips `data.access_token` when present.
fn sanitize_response_body(bytes: &Bytes) -> JsonValue {
    let mut value = parse_json(bytes);
    if let Some(data) = value.get_mut("data").and_then(JsonValue::as_object_mut) {
        data.remove(ACCESS_TOKEN_FIELD);
    }
    value
}

fn parse_json(bytes: &Bytes) -> JsonValue {
    if bytes.is_empty() {
        return JsonValue::Null;
    }
    serde_json::from_slice(bytes).unwrap_or(JsonValue::Null)
}
