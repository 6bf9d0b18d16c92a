use crate::core::errors::ClientError;
use crate::exchanges::binance::types::{
    BinanceAccountInfo, BinanceDepositAddress, BinanceDepth, BinanceExchangeInfo, BinanceKline,
    BinanceOrder, BinanceOrderRequest, BinancePriceTicker, BinanceTicker24h,
};
use async_trait::async_trait;

/// Binance spot REST endpoints the connector relies on
///
/// Implementations own transport and request signing. Symbols are
/// Binance's concatenated form (`ETHBTC`).
#[async_trait]
pub trait BinanceClient: Send + Sync {
    /// `GET /api/v3/exchangeInfo`
    async fn exchange_info(&self) -> Result<BinanceExchangeInfo, ClientError>;

    /// `GET /api/v3/account`
    async fn account(&self) -> Result<BinanceAccountInfo, ClientError>;

    /// `POST /api/v3/order` with `newOrderRespType=FULL`
    async fn new_order(&self, request: &BinanceOrderRequest) -> Result<BinanceOrder, ClientError>;

    /// `DELETE /api/v3/order`
    async fn cancel_order(&self, symbol: &str, order_id: u64) -> Result<BinanceOrder, ClientError>;

    /// `GET /api/v3/order`
    async fn query_order(&self, symbol: &str, order_id: u64) -> Result<BinanceOrder, ClientError>;

    /// `GET /api/v3/allOrders`
    async fn all_orders(&self, symbol: &str, limit: u32) -> Result<Vec<BinanceOrder>, ClientError>;

    /// `GET /api/v3/openOrders`
    async fn open_orders(&self, symbol: &str) -> Result<Vec<BinanceOrder>, ClientError>;

    /// `GET /api/v3/klines`
    async fn klines(
        &self,
        symbol: &str,
        interval: &str,
        limit: u32,
    ) -> Result<Vec<BinanceKline>, ClientError>;

    /// `GET /api/v3/ticker/24hr`
    async fn ticker_24h(&self, symbol: &str) -> Result<BinanceTicker24h, ClientError>;

    /// `GET /api/v3/ticker/price` for every symbol
    async fn ticker_prices(&self) -> Result<Vec<BinancePriceTicker>, ClientError>;

    /// `GET /api/v3/depth`
    async fn depth(&self, symbol: &str, limit: u32) -> Result<BinanceDepth, ClientError>;

    /// `GET /sapi/v1/capital/deposit/address`
    async fn deposit_address(&self, coin: &str) -> Result<BinanceDepositAddress, ClientError>;
}
