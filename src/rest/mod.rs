//! Huobi REST API client.
//!
//! # Trait-based API
//!
//! The [`HuobiClient`] trait abstracts the request operations, enabling
//! mock implementations and decorators:
//!
//! ```rust,ignore
//! use huobi_api_client::rest::{HuobiClient, HuobiRestClient};
//!
//! async fn use_client<C: HuobiClient>(client: &C) -> Result<(), huobi_api_client::HuobiError> {
//!     let tickers = client.get("/market/tickers", &()).await?;
//!     println!("Tickers: {}", tickers["data"]);
//!     Ok(())
//! }
//! ```

mod client;
pub mod endpoints;
pub mod response;
mod span;
mod traits;

pub use client::{
    ClientConfig, HuobiRestClient, HuobiRestClientBuilder, JSON_CONTENT_TYPE, ProxyConfig,
    ProxySetting, format_path,
};
pub use response::{ApiGeneration, ResponseStatus, classify_response};
pub use span::RedactedSpanBackend;
pub use traits::HuobiClient;
