//! Error types for the Huobi client library.

use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde_json::Value;
use thiserror::Error;

/// The main error type for all Huobi client operations.
#[derive(Error, Debug)]
pub enum HuobiError {
    /// Client configuration is invalid (missing keys, bad hostname, bad proxy)
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Only GET and POST are accepted by the exchange
    #[error("Unsupported HTTP method: {0} (only GET or POST)")]
    UnsupportedMethod(String),

    /// Request path cannot be signed
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Request parameters cannot be flattened into a query string
    #[error("Invalid request parameters: {0}")]
    InvalidParams(String),

    /// Signing failed
    #[error("Authentication error: {0}")]
    Auth(String),

    /// HTTP request failed. The request URL is stripped, it carries the signature.
    #[error("HTTP request failed: {0}")]
    Http(reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(reqwest_middleware::Error),

    /// Request timeout
    #[error("Request timed out")]
    Timeout,

    /// Server answered with a status other than 200
    #[error("{0}")]
    HttpStatus(HttpStatusError),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Huobi API returned an error envelope
    #[error("Huobi API error: {0}")]
    Api(ApiError),
}

impl HuobiError {
    /// Map a transport error, pulling timeouts out into [`HuobiError::Timeout`].
    pub(crate) fn from_transport(err: reqwest_middleware::Error) -> Self {
        match err {
            reqwest_middleware::Error::Reqwest(e) => Self::from_reqwest(e),
            middleware => HuobiError::HttpMiddleware(middleware),
        }
    }

    /// Map a reqwest error from sending or reading a response.
    ///
    /// The URL is dropped from the error since signed requests carry
    /// `AccessKeyId` and `Signature` in the query string.
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            HuobiError::Timeout
        } else {
            HuobiError::Http(err.without_url())
        }
    }

    /// The parsed error body, when the exchange rejected the request.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            HuobiError::Api(e) => Some(e),
            _ => None,
        }
    }
}

/// A non-200 HTTP response, kept raw.
#[derive(Debug, Clone)]
pub struct HttpStatusError {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Response body, undecoded
    pub body: String,
}

impl std::fmt::Display for HttpStatusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HTTP {}: {}", self.status, self.body)
    }
}

/// Error envelope returned by Huobi with HTTP 200.
///
/// The whole parsed body is kept so callers can read exchange specific
/// fields. Legacy endpoints answer with
/// `{"status": "error", "err-code": "...", "err-msg": "..."}`, `/v2`
/// endpoints with `{"code": 2002, "message": "...", "success": false}`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    /// The response body as returned by the exchange
    pub body: Value,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.code(), self.message()) {
            (Some(code), Some(message)) => write!(f, "{code}: {message}"),
            (Some(code), None) => write!(f, "{code}"),
            (None, Some(message)) => write!(f, "{message}"),
            (None, None) => write!(f, "{}", self.body),
        }
    }
}

impl ApiError {
    /// Wrap a parsed error body.
    pub fn new(body: Value) -> Self {
        Self { body }
    }

    /// Error code from either envelope (`err-code` or `code`).
    pub fn code(&self) -> Option<String> {
        self.body
            .get("err-code")
            .or_else(|| self.body.get("code"))
            .and_then(scalar_to_string)
    }

    /// Human-readable message from either envelope (`err-msg` or `message`).
    pub fn message(&self) -> Option<String> {
        self.body
            .get("err-msg")
            .or_else(|| self.body.get("message"))
            .and_then(scalar_to_string)
    }

    /// Check if the signature was rejected.
    pub fn is_signature_error(&self) -> bool {
        self.code().is_some_and(|c| {
            c == error_codes::SIGNATURE_FAILED || c == error_codes::V2_SIGNATURE_FAILED
        })
    }

    /// Check if the server saw no usable authentication fields.
    pub fn is_login_required(&self) -> bool {
        self.code().as_deref() == Some(error_codes::LOGIN_REQUIRED)
    }

    /// Check if the access key is unknown or disabled.
    pub fn is_invalid_access_key(&self) -> bool {
        self.code()
            .is_some_and(|c| c == error_codes::ACCESS_KEY_INVALID || c == error_codes::V2_INVALID_KEY)
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Known Huobi error codes for pattern matching.
pub mod error_codes {
    /// Legacy envelope codes
    pub const SIGNATURE_FAILED: &str = "api-signature-not-valid";
    pub const LOGIN_REQUIRED: &str = "login-required";
    pub const ACCESS_KEY_INVALID: &str = "invalid-access-key";
    pub const INVALID_PARAMETER: &str = "invalid-parameter";
    pub const INVALID_SYMBOL: &str = "base-symbol-error";
    pub const INSUFFICIENT_BALANCE: &str = "account-frozen-balance-insufficient-error";

    /// `/v2` envelope codes
    pub const V2_INVALID_KEY: &str = "1002";
    pub const V2_SIGNATURE_FAILED: &str = "1003";
    pub const V2_INVALID_PARAMETER: &str = "2002";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_api_error_legacy_envelope() {
        let error = ApiError::new(json!({
            "status": "error",
            "err-code": "api-signature-not-valid",
            "err-msg": "Signature not valid"
        }));
        assert_eq!(error.code().as_deref(), Some("api-signature-not-valid"));
        assert!(error.is_signature_error());
        assert_eq!(
            error.to_string(),
            "api-signature-not-valid: Signature not valid"
        );
    }

    #[test]
    fn test_api_error_v2_envelope() {
        let error = ApiError::new(json!({
            "code": 1002,
            "message": "unauthorized",
            "success": false
        }));
        assert_eq!(error.code().as_deref(), Some("1002"));
        assert!(error.is_invalid_access_key());
        assert!(!error.is_signature_error());
    }

    #[test]
    fn test_api_error_display_falls_back_to_body() {
        let error = ApiError::new(json!({"status": "error"}));
        assert_eq!(error.to_string(), r#"{"status":"error"}"#);
    }
}
