//! Trait definition for the Huobi REST API client.
//!
//! The [`HuobiClient`] trait abstracts the two request verbs the exchange
//! accepts. This enables:
//! - Mock implementations for testing
//! - Decorator pattern (e.g., a caching or auditing wrapper)
//! - Alternative implementations
//!
//! # Example
//!
//! ```rust,ignore
//! use huobi_api_client::rest::{HuobiClient, HuobiRestClient};
//!
//! async fn list_accounts<C: HuobiClient>(client: &C) -> Result<(), huobi_api_client::HuobiError> {
//!     let accounts = client.get("/v1/account/accounts", &()).await?;
//!     println!("Accounts: {}", accounts["data"]);
//!     Ok(())
//! }
//! ```

use std::future::Future;

use serde::Serialize;
use serde_json::Value;

use crate::error::HuobiError;

/// Trait defining the Huobi REST API operations.
///
/// Both methods resolve with the exchange's body once its envelope has been
/// accepted, and fail with the typed error otherwise.
pub trait HuobiClient: Send + Sync {
    /// Send a GET request.
    fn get<P>(
        &self,
        path: &str,
        params: &P,
    ) -> impl Future<Output = Result<Value, HuobiError>> + Send
    where
        P: Serialize + ?Sized + Sync;

    /// Send a POST request with `params` as the JSON body.
    fn post<P>(
        &self,
        path: &str,
        params: &P,
    ) -> impl Future<Output = Result<Value, HuobiError>> + Send
    where
        P: Serialize + ?Sized + Sync;
}
