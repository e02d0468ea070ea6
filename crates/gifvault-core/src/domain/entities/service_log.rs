//! Service log entity.

use crate::UserId;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Audit record for one handled request.
///
/// Created once after the wrapped handler completes, persisted append-only
/// and never updated or deleted. Request/response bodies are the sanitized
/// copies; the live response is not affected by sanitization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceLog {
    /// User who issued the request, if authenticated.
    pub user_id: Option<UserId>,

    /// Request path, without the leading slash.
    pub service: String,

    /// Sanitized request body (query parameters for GET requests).
    pub request_body: JsonValue,

    /// Final response status code.
    pub response_status: u16,

    /// Sanitized response body.
    pub response_body: JsonValue,

    /// Client IP address.
    pub ip_address: String,

    /// Elapsed handling time, formatted with a trailing "ms".
    pub duration: String,
}

impl ServiceLog {
    /// Creates a new service log record.
    #[must_use]
    pub fn new(user_id: Option<UserId>, service: impl Into<String>, response_status: u16) -> Self {
        Self {
            user_id,
            service: service.into(),
            request_body: JsonValue::Null,
            response_status,
            response_body: JsonValue::Null,
            ip_address: String::new(),
            duration: String::new(),
        }
    }

    /// Sets the sanitized request body.
    #[must_use]
    pub fn with_request_body(mut self, body: JsonValue) -> Self {
        self.request_body = body;
        self
    }

    /// Sets the sanitized response body.
    #[must_use]
    pub fn with_response_body(mut self, body: JsonValue) -> Self {
        self.response_body = body;
        self
    }

    /// Sets the client IP address.
    #[must_use]
    pub fn with_ip_address(mut self, ip: impl Into<String>) -> Self {
        self.ip_address = ip.into();
        self
    }

    /// Sets the formatted duration.
    #[must_use]
    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = duration.into();
        self
    }
}
