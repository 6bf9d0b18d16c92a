use crate::core::{
    errors::{ClientResultExt, ExchangeError},
    types::{Exchange, OrderBook, Ticker},
};
use crate::exchanges::coinbase_pro::{
    client::CoinbaseProClient,
    conversions::{convert_coinbase_order_book, convert_coinbase_ticker, BOOK_LEVEL},
};
use std::sync::Arc;
use tracing::instrument;

const EXCHANGE: Exchange = Exchange::CoinbasePro;

/// Market data implementation for Coinbase Pro
pub struct MarketData {
    client: Arc<dyn CoinbaseProClient>,
}

impl MarketData {
    pub fn new(client: &Arc<dyn CoinbaseProClient>) -> Self {
        Self {
            client: Arc::clone(client),
        }
    }

    #[instrument(skip(self), fields(exchange = "coinbase_pro"))]
    pub async fn list_markets(&self) -> Result<Vec<String>, ExchangeError> {
        let products = self.client.get_products().await.upstream(EXCHANGE)?;
        Ok(products.into_iter().map(|product| product.id).collect())
    }

    #[instrument(skip(self), fields(exchange = "coinbase_pro"))]
    pub async fn get_order_book(&self, pair: &str, limit: u32) -> Result<OrderBook, ExchangeError> {
        let book = self
            .client
            .get_product_book(pair, BOOK_LEVEL)
            .await
            .upstream(EXCHANGE)?;
        convert_coinbase_order_book(book, limit as usize)
    }

    /// Stats and ticker are separate endpoints
    #[instrument(skip(self), fields(exchange = "coinbase_pro"))]
    pub async fn get_24h_stats(&self, pair: &str) -> Result<Ticker, ExchangeError> {
        let stats = self
            .client
            .get_product_stats(pair)
            .await
            .upstream(EXCHANGE)?;
        let ticker = self
            .client
            .get_product_ticker(pair)
            .await
            .upstream(EXCHANGE)?;
        convert_coinbase_ticker(pair, stats, ticker)
    }
}
