use crate::core::errors::ClientError;
use crate::exchanges::coinbase_pro::types::{
    CoinbaseAccount, CoinbaseOrder, CoinbaseOrderBook, CoinbaseOrderRequest, CoinbaseProduct,
    CoinbaseProductStats, CoinbaseProductTicker,
};
use async_trait::async_trait;

/// Coinbase Pro REST endpoints the connector relies on
///
/// Requests are signed with key, secret and passphrase by the implementation.
#[async_trait]
pub trait CoinbaseProClient: Send + Sync {
    /// `GET /products`
    async fn get_products(&self) -> Result<Vec<CoinbaseProduct>, ClientError>;

    /// `GET /accounts`
    async fn get_accounts(&self) -> Result<Vec<CoinbaseAccount>, ClientError>;

    /// `POST /orders`
    async fn place_order(&self, request: &CoinbaseOrderRequest)
        -> Result<CoinbaseOrder, ClientError>;

    /// `DELETE /orders/{id}`; `false` when the order could not be canceled
    async fn cancel_order(&self, order_id: &str) -> Result<bool, ClientError>;

    /// `GET /orders/{id}`
    async fn get_order(&self, order_id: &str) -> Result<CoinbaseOrder, ClientError>;

    /// `GET /orders?product_id=..&status=open`
    async fn get_open_orders(&self, product_id: &str) -> Result<Vec<CoinbaseOrder>, ClientError>;

    /// `GET /products/{id}/stats`
    async fn get_product_stats(&self, product_id: &str)
        -> Result<CoinbaseProductStats, ClientError>;

    /// `GET /products/{id}/ticker`
    async fn get_product_ticker(
        &self,
        product_id: &str,
    ) -> Result<CoinbaseProductTicker, ClientError>;

    /// `GET /products/{id}/book?level=..`
    async fn get_product_book(
        &self,
        product_id: &str,
        level: u8,
    ) -> Result<CoinbaseOrderBook, ClientError>;
}
