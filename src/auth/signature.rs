//! HMAC-SHA256 signature generation for Huobi API authentication.
//!
//! Huobi private endpoints use Signature Version 2. The request carries four
//! extra query parameters (`AccessKeyId`, `SignatureMethod`,
//! `SignatureVersion`, `Timestamp`) and a `Signature` computed as:
//!
//! ```text
//! pairs     = sort(key + "=" + encodeURIComponent(value))
//! query     = join(pairs, "&")
//! payload   = METHOD + "\n" + hostname + "\n" + path + "\n" + query
//! Signature = encodeURIComponent(base64(HMAC-SHA256(payload, secret_key)))
//! ```
//!
//! Pairs are sorted on the whole `key=value` string, not on the key alone.
//! Paths under `/market` are public and go out unsigned.

use std::sync::Arc;

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::Method;
use sha2::Sha256;
use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::auth::{Clock, Credentials, SystemClock};
use crate::error::HuobiError;
use crate::rest::endpoints::MARKET_PREFIX;
use crate::types::Params;

type HmacSha256 = Hmac<Sha256>;

/// Value of the `SignatureMethod` parameter.
pub const SIGNATURE_METHOD: &str = "HmacSHA256";
/// Value of the `SignatureVersion` parameter.
pub const SIGNATURE_VERSION: &str = "2";

/// Reserved parameter names injected into every signed request.
pub const ACCESS_KEY_ID: &str = "AccessKeyId";
pub const SIGNATURE_METHOD_KEY: &str = "SignatureMethod";
pub const SIGNATURE_VERSION_KEY: &str = "SignatureVersion";
pub const TIMESTAMP_KEY: &str = "Timestamp";
pub const SIGNATURE_KEY: &str = "Signature";

/// `YYYY-MM-DDTHH:mm:ss` in UTC, no fraction and no zone suffix.
const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

/// Characters left untouched by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Result of signing one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    /// Sorted, encoded `key=value` pairs joined by `&`
    pub canonical_query: String,
    /// URL-encoded signature, empty for public endpoints
    pub signature: String,
    /// The parameters the query was built from, reserved fields included
    pub effective_params: Params,
}

impl SignedRequest {
    /// Whether the request carries a signature.
    pub fn is_signed(&self) -> bool {
        !self.signature.is_empty()
    }

    /// Query string to put on the URL, `Signature` appended when signed.
    pub fn query_string(&self) -> String {
        if !self.is_signed() {
            return self.canonical_query.clone();
        }
        if self.canonical_query.is_empty() {
            format!("{SIGNATURE_KEY}={}", self.signature)
        } else {
            format!(
                "{}&{SIGNATURE_KEY}={}",
                self.canonical_query, self.signature
            )
        }
    }
}

/// Signs requests with a fixed set of credentials against one hostname.
///
/// The signer holds no mutable state; the only input that varies between two
/// calls with the same arguments is the clock reading.
#[derive(Clone)]
pub struct Signer {
    credentials: Credentials,
    hostname: String,
    clock: Arc<dyn Clock>,
}

impl Signer {
    /// Create a signer using the system clock.
    pub fn new(credentials: Credentials, hostname: impl Into<String>) -> Self {
        Self {
            credentials,
            hostname: hostname.into(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the clock used for the `Timestamp` parameter.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Hostname included in the signing payload.
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Access key sent as `AccessKeyId`.
    pub fn access_key_id(&self) -> &str {
        self.credentials.access_key_id()
    }

    /// Sign a request.
    ///
    /// `path` must already be normalized (see
    /// [`format_path`](crate::rest::format_path)). Reserved signing fields
    /// take precedence over caller parameters with the same name.
    pub fn sign(
        &self,
        method: &Method,
        path: &str,
        params: &Params,
    ) -> Result<SignedRequest, HuobiError> {
        if !path.starts_with('/') {
            return Err(HuobiError::InvalidPath(format!(
                "path must start with '/': {path}"
            )));
        }
        if *method != Method::GET && *method != Method::POST {
            return Err(HuobiError::UnsupportedMethod(method.to_string()));
        }

        if !needs_signature(path) {
            return Ok(SignedRequest {
                canonical_query: canonical_query(params),
                signature: String::new(),
                effective_params: params.clone(),
            });
        }

        let timestamp = format_timestamp(self.clock.now_utc())?;
        let mut effective_params = params.clone();
        let reserved = [
            (ACCESS_KEY_ID, self.credentials.access_key_id()),
            (SIGNATURE_METHOD_KEY, SIGNATURE_METHOD),
            (SIGNATURE_VERSION_KEY, SIGNATURE_VERSION),
            (TIMESTAMP_KEY, timestamp.as_str()),
        ];
        for (key, value) in reserved {
            if effective_params.insert(key, value).is_some() {
                tracing::warn!(key, "caller parameter replaced by reserved signing field");
            }
        }

        let canonical_query = canonical_query(&effective_params);
        let signature = sign_payload(
            &self.credentials,
            method.as_str(),
            &self.hostname,
            path,
            &canonical_query,
        )?;

        Ok(SignedRequest {
            canonical_query,
            signature,
            effective_params,
        })
    }
}

impl std::fmt::Debug for Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signer")
            .field("credentials", &self.credentials)
            .field("hostname", &self.hostname)
            .finish()
    }
}

/// Whether a path needs authentication. Market data paths do not.
pub fn needs_signature(path: &str) -> bool {
    !path.starts_with(MARKET_PREFIX)
}

/// Build the canonical query string for a parameter set.
///
/// # Example
///
/// ```rust
/// use huobi_api_client::auth::canonical_query;
/// use huobi_api_client::types::Params;
///
/// let params: Params = [("b", "1"), ("a", "2")].into_iter().collect();
/// assert_eq!(canonical_query(&params), "a=2&b=1");
/// ```
pub fn canonical_query(params: &Params) -> String {
    let mut pairs: Vec<String> = params
        .iter()
        .map(|(key, value)| format!("{key}={}", encode_uri_component(value)))
        .collect();
    pairs.sort();
    pairs.join("&")
}

/// Percent-encode a value the way `encodeURIComponent` does.
pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Format an instant as a Signature Version 2 timestamp.
pub fn format_timestamp(instant: OffsetDateTime) -> Result<String, HuobiError> {
    instant
        .to_offset(time::UtcOffset::UTC)
        .format(TIMESTAMP_FORMAT)
        .map_err(|e| HuobiError::Auth(format!("Failed to format timestamp: {e}")))
}

/// Compute the encoded signature over an already canonical query.
///
/// # Arguments
///
/// * `credentials` - API credentials containing the secret
/// * `method` - `GET` or `POST`
/// * `hostname` - Host the request is sent to (e.g., "api.huobi.pro")
/// * `path` - Normalized request path (e.g., "/v1/order/orders")
/// * `canonical_query` - Output of [`canonical_query`], reserved fields included
///
/// # Returns
///
/// The Base64 HMAC-SHA256 digest, URI-component encoded.
pub fn sign_payload(
    credentials: &Credentials,
    method: &str,
    hostname: &str,
    path: &str,
    canonical_query: &str,
) -> Result<String, HuobiError> {
    let payload = [method, hostname, path, canonical_query].join("\n");

    let mut hmac = HmacSha256::new_from_slice(credentials.expose_secret().as_bytes())
        .map_err(|e| HuobiError::Auth(format!("Invalid HMAC key: {e}")))?;
    hmac.update(payload.as_bytes());
    let digest = hmac.finalize().into_bytes();

    Ok(encode_uri_component(&BASE64.encode(digest)))
}
