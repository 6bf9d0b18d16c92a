use crate::core::{
    errors::{ClientResultExt, ExchangeError},
    types::{Exchange, KLine, OrderBook, PairPrice, Ticker, TimeInterval},
};
use crate::exchanges::binance::{
    client::BinanceClient,
    conversions::{
        convert_binance_depth, convert_binance_kline, convert_binance_price,
        convert_binance_ticker, interval_to_binance,
    },
};
use std::sync::Arc;
use tracing::{debug, instrument};

const EXCHANGE: Exchange = Exchange::Binance;

/// Market data implementation for Binance
pub struct MarketData {
    client: Arc<dyn BinanceClient>,
}

impl MarketData {
    pub fn new(client: &Arc<dyn BinanceClient>) -> Self {
        Self {
            client: Arc::clone(client),
        }
    }

    #[instrument(skip(self), fields(exchange = "binance"))]
    pub async fn list_markets(&self) -> Result<Vec<String>, ExchangeError> {
        let info = self.client.exchange_info().await.upstream(EXCHANGE)?;
        Ok(info.symbols.into_iter().map(|market| market.symbol).collect())
    }

    #[instrument(skip(self), fields(exchange = "binance"))]
    pub async fn get_order_book(&self, pair: &str, limit: u32) -> Result<OrderBook, ExchangeError> {
        let depth = self.client.depth(pair, limit).await.upstream(EXCHANGE)?;
        convert_binance_depth(depth)
    }

    #[instrument(skip(self), fields(exchange = "binance"))]
    pub async fn get_klines(
        &self,
        pair: &str,
        interval: TimeInterval,
        limit: u32,
    ) -> Result<Vec<KLine>, ExchangeError> {
        let native_interval = interval_to_binance(interval);
        debug!(native_interval, "requesting klines");
        let klines = self
            .client
            .klines(pair, native_interval, limit)
            .await
            .upstream(EXCHANGE)?;
        klines.into_iter().map(convert_binance_kline).collect()
    }

    #[instrument(skip(self), fields(exchange = "binance"))]
    pub async fn get_24h_stats(&self, pair: &str) -> Result<Ticker, ExchangeError> {
        let ticker = self.client.ticker_24h(pair).await.upstream(EXCHANGE)?;
        convert_binance_ticker(ticker)
    }

    #[instrument(skip(self), fields(exchange = "binance"))]
    pub async fn get_prices(&self) -> Result<Vec<PairPrice>, ExchangeError> {
        let prices = self.client.ticker_prices().await.upstream(EXCHANGE)?;
        prices.into_iter().map(convert_binance_price).collect()
    }
}
