use crate::core::{
    errors::{ClientResultExt, ExchangeError},
    types::{Exchange, OrderBook, PairPrice, Ticker},
};
use crate::exchanges::bittrex::{
    client::BittrexClient,
    conversions::{convert_bittrex_order_book, convert_bittrex_price, convert_bittrex_summary},
};
use std::sync::Arc;
use tracing::instrument;

const EXCHANGE: Exchange = Exchange::Bittrex;

/// Market data implementation for Bittrex
pub struct MarketData {
    client: Arc<dyn BittrexClient>,
}

impl MarketData {
    pub fn new(client: &Arc<dyn BittrexClient>) -> Self {
        Self {
            client: Arc::clone(client),
        }
    }

    #[instrument(skip(self), fields(exchange = "bittrex"))]
    pub async fn list_markets(&self) -> Result<Vec<String>, ExchangeError> {
        let markets = self.client.get_markets().await.upstream(EXCHANGE)?;
        Ok(markets.into_iter().map(|market| market.market_name).collect())
    }

    #[instrument(skip(self), fields(exchange = "bittrex"))]
    pub async fn get_order_book(&self, pair: &str, limit: u32) -> Result<OrderBook, ExchangeError> {
        let book = self.client.get_order_book(pair).await.upstream(EXCHANGE)?;
        Ok(convert_bittrex_order_book(book, limit as usize))
    }

    #[instrument(skip(self), fields(exchange = "bittrex"))]
    pub async fn get_24h_stats(&self, pair: &str) -> Result<Ticker, ExchangeError> {
        let summary = self
            .client
            .get_market_summary(pair)
            .await
            .upstream(EXCHANGE)?;
        convert_bittrex_summary(summary)
    }

    #[instrument(skip(self), fields(exchange = "bittrex"))]
    pub async fn get_prices(&self) -> Result<Vec<PairPrice>, ExchangeError> {
        let summaries = self
            .client
            .get_market_summaries()
            .await
            .upstream(EXCHANGE)?;
        Ok(summaries.into_iter().map(convert_bittrex_price).collect())
    }
}
