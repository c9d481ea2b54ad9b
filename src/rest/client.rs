//! Huobi REST API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Method, StatusCode};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::auth::{Clock, Credentials, Signer};
use crate::error::{HttpStatusError, HuobiError};
use crate::rest::endpoints::{DEFAULT_HOSTNAME, DEFAULT_PROTOCOL, DEFAULT_TIMEOUT_MS};
use crate::rest::response::{ApiGeneration, classify_response};
use crate::rest::span::RedactedSpanBackend;
use crate::rest::traits::HuobiClient;
use crate::types::Params;

/// Content type sent with every request.
pub const JSON_CONTENT_TYPE: &str = "application/json;charset=utf-8";

/// Normalize a request path before signing.
///
/// Trims surrounding whitespace, prepends `/` when missing and strips one
/// trailing `/`. The signed path has to match the path the server reads off
/// the request line.
///
/// ```rust
/// use huobi_api_client::rest::format_path;
///
/// assert_eq!(format_path(" /v1/order/ "), "/v1/order");
/// assert_eq!(format_path("v1/order/"), "/v1/order");
/// ```
pub fn format_path(path: &str) -> String {
    let path = path.trim();
    let mut formatted = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };
    if formatted.ends_with('/') {
        formatted.pop();
    }
    formatted
}

/// Forward proxy settings for the HTTP transport.
#[derive(Debug, Clone, Default)]
pub enum ProxySetting {
    /// Connect directly, ignoring proxy environment variables
    #[default]
    Disabled,
    /// Use proxies from `HTTP_PROXY`/`HTTPS_PROXY`/`ALL_PROXY`
    System,
    /// Route every request through the given proxy
    Custom(ProxyConfig),
}

/// An explicit forward proxy.
#[derive(Clone)]
pub struct ProxyConfig {
    /// Proxy URL (e.g., "http://127.0.0.1:8080")
    pub url: String,
    username: Option<String>,
    password: Option<SecretString>,
}

impl ProxyConfig {
    /// Create a proxy configuration with just a URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            username: None,
            password: None,
        }
    }

    /// Set basic auth credentials for the proxy.
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(SecretString::from(password.into()));
        self
    }

    fn to_reqwest(&self) -> Result<reqwest::Proxy, HuobiError> {
        let mut proxy = reqwest::Proxy::all(&self.url)
            .map_err(|e| HuobiError::Config(format!("Invalid proxy URL: {e}")))?;
        if let (Some(username), Some(password)) = (&self.username, &self.password) {
            proxy = proxy.basic_auth(username, password.expose_secret());
        }
        Ok(proxy)
    }
}

impl std::fmt::Debug for ProxyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProxyConfig")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Resolved, non-secret client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API hostname, optionally with a port; also part of the signed payload
    pub hostname: String,
    /// URL scheme, `https` unless pointed at a test server
    pub protocol: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Forward proxy
    pub proxy: ProxySetting,
    /// `User-Agent` header value
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            hostname: DEFAULT_HOSTNAME.to_string(),
            protocol: DEFAULT_PROTOCOL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            proxy: ProxySetting::Disabled,
            user_agent: format!("huobi-api-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// `protocol://hostname`, the prefix every request URL starts with.
    pub fn host(&self) -> String {
        format!("{}://{}", self.protocol, self.hostname)
    }
}

/// The Huobi REST API client.
///
/// Every request goes through the same steps: the path is normalized,
/// parameters are signed (unless the path is public market data), the call
/// is dispatched and the response envelope is checked. The client holds only
/// immutable configuration and can be cloned and shared across tasks.
///
/// # Example
///
/// ```rust,no_run
/// use huobi_api_client::rest::HuobiRestClient;
/// use serde_json::json;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = HuobiRestClient::builder()
///         .credentials("access_key", "secret_key")
///         .build()?;
///
///     let tickers = client.get("/market/tickers", &()).await?;
///     println!("Tickers: {tickers}");
///
///     let orders = client
///         .get("/v1/order/openOrders", &json!({ "symbol": "btcusdt" }))
///         .await?;
///     println!("Open orders: {orders}");
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct HuobiRestClient {
    http_client: ClientWithMiddleware,
    config: Arc<ClientConfig>,
    signer: Arc<Signer>,
}

impl HuobiRestClient {
    /// Create a client against the default host with default settings.
    pub fn new(
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Result<Self, HuobiError> {
        Self::builder().credentials(access_key, secret_key).build()
    }

    /// Create a new client builder.
    pub fn builder() -> HuobiRestClientBuilder {
        HuobiRestClientBuilder::new()
    }

    /// The resolved configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `protocol://hostname`.
    pub fn host(&self) -> String {
        self.config.host()
    }

    /// The signer used for private endpoints.
    pub fn signer(&self) -> &Signer {
        &self.signer
    }

    /// Send a GET request and return the accepted response body.
    pub async fn get<P>(&self, path: &str, params: &P) -> Result<Value, HuobiError>
    where
        P: Serialize + ?Sized,
    {
        self.request(Method::GET, path, params).await
    }

    /// Send a POST request and return the accepted response body.
    ///
    /// Authentication fields still travel in the query string; `params`
    /// themselves are sent as the JSON body.
    pub async fn post<P>(&self, path: &str, params: &P) -> Result<Value, HuobiError>
    where
        P: Serialize + ?Sized,
    {
        self.request(Method::POST, path, params).await
    }

    /// Send a GET request and deserialize the accepted body.
    pub async fn get_json<T, P>(&self, path: &str, params: &P) -> Result<T, HuobiError>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        Ok(serde_json::from_value(self.get(path, params).await?)?)
    }

    /// Send a POST request and deserialize the accepted body.
    pub async fn post_json<T, P>(&self, path: &str, params: &P) -> Result<T, HuobiError>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        Ok(serde_json::from_value(self.post(path, params).await?)?)
    }

    /// Shared dispatch for GET and POST.
    pub async fn request<P>(
        &self,
        method: Method,
        path: &str,
        params: &P,
    ) -> Result<Value, HuobiError>
    where
        P: Serialize + ?Sized,
    {
        if method != Method::GET && method != Method::POST {
            return Err(HuobiError::UnsupportedMethod(method.to_string()));
        }

        let path = format_path(path);
        let original = serde_json::to_value(params)?;
        let signed = self
            .signer
            .sign(&method, &path, &Params::from_value(&original)?)?;

        let query = signed.query_string();
        let url = if query.is_empty() {
            format!("{}{}", self.config.host(), path)
        } else {
            format!("{}{}?{}", self.config.host(), path, query)
        };

        tracing::debug!(%method, %path, signed = signed.is_signed(), "sending Huobi request");

        let mut request = self.http_client.request(method.clone(), url.as_str());
        if method == Method::POST {
            let body = match original {
                Value::Null => Value::Object(Default::default()),
                other => other,
            };
            request = request.body(serde_json::to_vec(&body)?);
        }

        let response = request.send().await.map_err(HuobiError::from_transport)?;
        let body = self.read_body(response).await?;
        classify_response(ApiGeneration::from_path(&path), body)
    }

    /// Reject anything but HTTP 200, then parse the body as JSON.
    async fn read_body(&self, response: reqwest::Response) -> Result<Value, HuobiError> {
        let status = response.status();
        if status != StatusCode::OK {
            let headers = response.headers().clone();
            let body = response.text().await.map_err(HuobiError::from_reqwest)?;
            tracing::debug!(%status, "Huobi request rejected by HTTP status");
            return Err(HuobiError::HttpStatus(HttpStatusError {
                status,
                headers,
                body,
            }));
        }

        let body = response.text().await.map_err(HuobiError::from_reqwest)?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl std::fmt::Debug for HuobiRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HuobiRestClient")
            .field("host", &self.config.host())
            .field("signer", &self.signer)
            .finish()
    }
}

/// Builder for [`HuobiRestClient`].
pub struct HuobiRestClientBuilder {
    config: ClientConfig,
    credentials: Option<Result<Credentials, HuobiError>>,
    clock: Option<Arc<dyn Clock>>,
}

impl HuobiRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
            credentials: None,
            clock: None,
        }
    }

    /// Set the access key and secret key. Both are required.
    ///
    /// An empty key is reported by [`build`](Self::build).
    pub fn credentials(
        mut self,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        self.credentials = Some(Credentials::new(access_key, secret_key));
        self
    }

    /// Use already validated credentials, e.g. from [`Credentials::from_env`].
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(Ok(credentials));
        self
    }

    /// Set the API hostname (e.g., "api-aws.huobi.pro").
    pub fn hostname(mut self, hostname: impl Into<String>) -> Self {
        self.config.hostname = hostname.into();
        self
    }

    /// Set the URL scheme.
    pub fn protocol(mut self, protocol: impl Into<String>) -> Self {
        self.config.protocol = protocol.into();
        self
    }

    /// Set protocol and hostname from a base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        match url.split_once("://") {
            Some((protocol, hostname)) => {
                self.config.protocol = protocol.to_string();
                self.config.hostname = hostname.trim_end_matches('/').to_string();
            }
            None => self.config.hostname = url.trim_end_matches('/').to_string(),
        }
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the forward proxy.
    pub fn proxy(mut self, proxy: ProxySetting) -> Self {
        self.config.proxy = proxy;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Set the clock used for signature timestamps.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Build the client.
    ///
    /// Fails with [`HuobiError::Config`] when credentials are missing, or when
    /// the host, proxy or user agent is unusable. No request is made.
    pub fn build(self) -> Result<HuobiRestClient, HuobiError> {
        let credentials = self.credentials.unwrap_or_else(|| {
            Err(HuobiError::Config(
                "Params missing: access key or secret key".to_string(),
            ))
        })?;

        let config = self.config;
        let base = Url::parse(&config.host())?;
        if base.host_str().is_none() || base.path() != "/" {
            return Err(HuobiError::Config(format!(
                "hostname must be a bare host: {}",
                config.hostname
            )));
        }

        // Build default headers.
        let mut headers = HeaderMap::new();
        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|e| HuobiError::Config(format!("Invalid user agent: {e}")))?;
        headers.insert(USER_AGENT, user_agent);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));

        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout);
        builder = match &config.proxy {
            ProxySetting::Disabled => builder.no_proxy(),
            ProxySetting::System => builder,
            ProxySetting::Custom(proxy) => builder.proxy(proxy.to_reqwest()?),
        };
        let reqwest_client = builder
            .build()
            .map_err(|e| HuobiError::Config(format!("Failed to build HTTP client: {e}")))?;

        let http_client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::<RedactedSpanBackend>::new())
            .build();

        let mut signer = Signer::new(credentials, config.hostname.clone());
        if let Some(clock) = self.clock {
            signer = signer.with_clock(clock);
        }

        Ok(HuobiRestClient {
            http_client,
            config: Arc::new(config),
            signer: Arc::new(signer),
        })
    }
}

impl Default for HuobiRestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HuobiClient for HuobiRestClient {
    async fn get<P>(&self, path: &str, params: &P) -> Result<Value, HuobiError>
    where
        P: Serialize + ?Sized + Sync,
    {
        HuobiRestClient::get(self, path, params).await
    }

    async fn post<P>(&self, path: &str, params: &P) -> Result<Value, HuobiError>
    where
        P: Serialize + ?Sized + Sync,
    {
        HuobiRestClient::post(self, path, params).await
    }
}
