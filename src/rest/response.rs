//! Classification of Huobi response envelopes.
//!
//! Huobi serves two generations of endpoints with different envelopes:
//! - Legacy: `{ "status": "ok", "data": ... }` or
//!   `{ "status": "error", "err-code": "...", "err-msg": "..." }`
//! - `/v2`: `{ "code": 200, "ok": true, "data": ... }` or
//!   `{ "code": 2002, "message": "...", "success": false }`

use serde_json::Value;

use crate::error::{ApiError, HuobiError};
use crate::rest::endpoints::V2_PREFIX;

/// Which envelope convention a path answers with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiGeneration {
    /// `status` field, `"ok"` or `"error"`
    Legacy,
    /// `ok` / `success` boolean fields
    V2,
}

impl ApiGeneration {
    /// Infer the generation from a normalized request path.
    pub fn from_path(path: &str) -> Self {
        if path.starts_with(V2_PREFIX) {
            ApiGeneration::V2
        } else {
            ApiGeneration::Legacy
        }
    }
}

/// Values of the legacy `status` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseStatus {
    /// Request succeeded
    Ok,
    /// Request failed
    Error,
}

impl ResponseStatus {
    /// Parse a status string, ignoring case.
    pub fn parse(status: &str) -> Option<Self> {
        if status.eq_ignore_ascii_case("ok") {
            Some(ResponseStatus::Ok)
        } else if status.eq_ignore_ascii_case("error") {
            Some(ResponseStatus::Error)
        } else {
            None
        }
    }
}

/// Accept or reject a parsed 200 body.
///
/// On success the body is returned untouched; on failure it is carried in
/// [`HuobiError::Api`].
pub fn classify_response(generation: ApiGeneration, body: Value) -> Result<Value, HuobiError> {
    let accepted = match generation {
        ApiGeneration::V2 => is_true(&body, "ok") || is_true(&body, "success"),
        ApiGeneration::Legacy => body
            .get("status")
            .and_then(Value::as_str)
            .and_then(ResponseStatus::parse)
            == Some(ResponseStatus::Ok),
    };

    if accepted {
        Ok(body)
    } else {
        Err(HuobiError::Api(ApiError::new(body)))
    }
}

fn is_true(body: &Value, field: &str) -> bool {
    body.get(field).and_then(Value::as_bool) == Some(true)
}
