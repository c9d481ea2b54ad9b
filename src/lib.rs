//! # Huobi Client
//!
//! An async Rust client library for the Huobi exchange signed REST API.
//!
//! ## Features
//!
//! - Signature Version 2 (HMAC-SHA256) request signing
//! - Deterministic parameter canonicalization with an injectable clock
//! - One call path for the legacy `status` envelope and the `/v2` `ok`/`success` envelope
//! - Typed errors carrying the raw error payload
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use huobi_api_client::rest::HuobiRestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HuobiRestClient::new("access_key", "secret_key")?;
//!     let accounts = client.get("/v1/account/accounts", &()).await?;
//!     println!("Accounts: {}", accounts["data"]);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{ApiError, HuobiError};
pub use rest::{HuobiClient, HuobiRestClient};
pub use types::Params;

/// Result type alias using HuobiError
pub type Result<T> = std::result::Result<T, HuobiError>;
