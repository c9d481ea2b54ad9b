//! Huobi REST API endpoint constants.

/// Default API hostname.
pub const DEFAULT_HOSTNAME: &str = "api.huobi.pro";

/// Default URL scheme.
pub const DEFAULT_PROTOCOL: &str = "https";

/// Default per-request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Paths under this prefix are public market data and go out unsigned.
pub const MARKET_PREFIX: &str = "/market";

/// Paths under this prefix use the `ok`/`success` response envelope.
pub const V2_PREFIX: &str = "/v2";

/// Public endpoints (no authentication required).
pub mod public {
    /// Aggregated tickers for all symbols.
    pub const TICKERS: &str = "/market/tickers";
    /// Merged ticker for one symbol.
    pub const DETAIL_MERGED: &str = "/market/detail/merged";
    /// Market depth.
    pub const DEPTH: &str = "/market/depth";
    /// Candlesticks.
    pub const KLINE: &str = "/market/history/kline";
    /// Latest trade.
    pub const TRADE: &str = "/market/trade";
    /// Recent trades.
    pub const HISTORY_TRADE: &str = "/market/history/trade";
}

/// Endpoints that require a signature.
///
/// Reference data under `/v1/common` is not under `/market`, so it is signed
/// as well.
pub mod private {
    // Reference data
    /// Server timestamp.
    pub const TIMESTAMP: &str = "/v1/common/timestamp";
    /// Tradable symbols.
    pub const SYMBOLS: &str = "/v1/common/symbols";
    /// Supported currencies.
    pub const CURRENCYS: &str = "/v1/common/currencys";

    // Account endpoints
    /// List accounts.
    pub const ACCOUNTS: &str = "/v1/account/accounts";
    /// Account valuation.
    pub const ACCOUNT_VALUATION: &str = "/v2/account/valuation";
    /// Account ledger.
    pub const ACCOUNT_LEDGER: &str = "/v2/account/ledger";

    // Trading endpoints
    /// Place an order.
    pub const PLACE_ORDER: &str = "/v1/order/orders/place";
    /// Open orders.
    pub const OPEN_ORDERS: &str = "/v1/order/openOrders";
    /// Order history.
    pub const ORDERS: &str = "/v1/order/orders";
    /// Cancel orders in batch.
    pub const BATCH_CANCEL: &str = "/v1/order/orders/batchcancel";
    /// Match results.
    pub const MATCH_RESULTS: &str = "/v1/order/matchresults";

    // Wallet endpoints
    /// Deposit addresses.
    pub const DEPOSIT_ADDRESS: &str = "/v2/account/deposit/address";
    /// Withdrawal quota.
    pub const WITHDRAW_QUOTA: &str = "/v2/account/withdraw/quota";

    /// Single order, by id.
    pub fn order(order_id: &str) -> String {
        format!("/v1/order/orders/{order_id}")
    }

    /// Cancel a single order, by id.
    pub fn submit_cancel(order_id: &str) -> String {
        format!("/v1/order/orders/{order_id}/submitcancel")
    }

    /// Balance of one account.
    pub fn account_balance(account_id: &str) -> String {
        format!("/v1/account/accounts/{account_id}/balance")
    }
}
