//! Authentication module for Huobi API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - An injectable clock for the signed `Timestamp` parameter
//! - Signature Version 2 (HMAC-SHA256) request signing

mod clock;
mod credentials;
mod signature;

pub use clock::{Clock, FixedClock, SystemClock};
pub use credentials::{ACCESS_KEY_VAR, Credentials, SECRET_KEY_VAR};
pub use signature::{
    ACCESS_KEY_ID, SIGNATURE_KEY, SIGNATURE_METHOD, SIGNATURE_METHOD_KEY, SIGNATURE_VERSION,
    SIGNATURE_VERSION_KEY, SignedRequest, Signer, TIMESTAMP_KEY, canonical_query,
    encode_uri_component, format_timestamp, needs_signature, sign_payload,
};
