use crate::core::errors::ClientError;
use crate::exchanges::kucoin::types::{
    KuCoin24hStats, KuCoinAccount, KuCoinAllTickers, KuCoinCandle, KuCoinDepositAddress,
    KuCoinOrder, KuCoinOrderAccepted, KuCoinOrderBook, KuCoinOrderRequest, KuCoinSymbol,
    KuCoinTicker,
};
use async_trait::async_trait;

/// KuCoin REST endpoints the connector relies on
#[async_trait]
pub trait KuCoinClient: Send + Sync {
    /// `GET /api/v1/symbols`
    async fn get_symbols(&self) -> Result<Vec<KuCoinSymbol>, ClientError>;

    /// `GET /api/v1/accounts`
    async fn get_accounts(&self) -> Result<Vec<KuCoinAccount>, ClientError>;

    /// `GET /api/v1/market/orderbook/level1`
    async fn get_ticker(&self, symbol: &str) -> Result<KuCoinTicker, ClientError>;

    /// `GET /api/v1/market/stats`
    async fn get_24h_stats(&self, symbol: &str) -> Result<KuCoin24hStats, ClientError>;

    /// `GET /api/v1/market/allTickers`
    async fn get_all_tickers(&self) -> Result<KuCoinAllTickers, ClientError>;

    /// `GET /api/v1/market/orderbook/level2_{depth}`, depth 20 or 100
    async fn get_order_book(&self, symbol: &str, depth: u32)
        -> Result<KuCoinOrderBook, ClientError>;

    /// `GET /api/v1/market/candles`, bounds in epoch seconds, newest first
    async fn get_candles(
        &self,
        symbol: &str,
        interval: &str,
        start_at: i64,
        end_at: i64,
    ) -> Result<Vec<KuCoinCandle>, ClientError>;

    /// `GET /api/v1/deposit-addresses`
    async fn get_deposit_address(&self, currency: &str)
        -> Result<KuCoinDepositAddress, ClientError>;

    /// `POST /api/v1/orders`
    async fn place_order(
        &self,
        request: &KuCoinOrderRequest,
    ) -> Result<KuCoinOrderAccepted, ClientError>;

    /// Cancel on one side of the book; `false` when no such order rests there
    async fn cancel_order(
        &self,
        symbol: &str,
        order_id: &str,
        side: &str,
    ) -> Result<bool, ClientError>;

    /// `GET /api/v1/orders/{id}`
    async fn get_order(&self, order_id: &str) -> Result<KuCoinOrder, ClientError>;

    /// `GET /api/v1/orders`, optionally filtered by `active` / `done`
    async fn list_orders(
        &self,
        symbol: &str,
        status: Option<&str>,
        page_size: u32,
    ) -> Result<Vec<KuCoinOrder>, ClientError>;
}
