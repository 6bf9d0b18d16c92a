use crate::core::{
    errors::{ClientResultExt, ExchangeError},
    types::{Exchange, KLine, OrderBook, PairPrice, Ticker, TimeInterval},
};
use crate::exchanges::kucoin::{
    client::KuCoinClient,
    conversions::{
        book_depth, convert_kucoin_candle, convert_kucoin_order_book, convert_kucoin_prices,
        convert_kucoin_ticker, interval_to_kucoin, kucoin_granularity,
    },
};
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, instrument};

const EXCHANGE: Exchange = Exchange::KuCoin;

/// Market data implementation for KuCoin
pub struct MarketData {
    client: Arc<dyn KuCoinClient>,
}

impl MarketData {
    pub fn new(client: &Arc<dyn KuCoinClient>) -> Self {
        Self {
            client: Arc::clone(client),
        }
    }

    #[instrument(skip(self), fields(exchange = "kucoin"))]
    pub async fn list_markets(&self) -> Result<Vec<String>, ExchangeError> {
        let symbols = self.client.get_symbols().await.upstream(EXCHANGE)?;
        Ok(symbols.into_iter().map(|symbol| symbol.symbol).collect())
    }

    #[instrument(skip(self), fields(exchange = "kucoin"))]
    pub async fn get_order_book(&self, pair: &str, limit: u32) -> Result<OrderBook, ExchangeError> {
        let book = self
            .client
            .get_order_book(pair, book_depth(limit))
            .await
            .upstream(EXCHANGE)?;
        convert_kucoin_order_book(book, limit as usize)
    }

    /// The candle endpoint takes a time window, so ask for the last `limit`
    /// intervals up to now
    #[instrument(skip(self), fields(exchange = "kucoin"))]
    pub async fn get_klines(
        &self,
        pair: &str,
        interval: TimeInterval,
        limit: u32,
    ) -> Result<Vec<KLine>, ExchangeError> {
        let native_interval = interval_to_kucoin(interval);
        let end_at = Utc::now().timestamp();
        let span = kucoin_granularity(interval).duration().num_seconds() * i64::from(limit);
        debug!(native_interval, end_at, span, "requesting candles");

        let candles = self
            .client
            .get_candles(pair, native_interval, end_at - span, end_at)
            .await
            .upstream(EXCHANGE)?;
        candles
            .into_iter()
            .take(limit as usize)
            .map(|candle| convert_kucoin_candle(candle, interval))
            .collect()
    }

    /// Best bid/ask and last trade come from level 1, the rest from stats
    #[instrument(skip(self), fields(exchange = "kucoin"))]
    pub async fn get_24h_stats(&self, pair: &str) -> Result<Ticker, ExchangeError> {
        let ticker = self.client.get_ticker(pair).await.upstream(EXCHANGE)?;
        let stats = self.client.get_24h_stats(pair).await.upstream(EXCHANGE)?;
        convert_kucoin_ticker(ticker, stats)
    }

    #[instrument(skip(self), fields(exchange = "kucoin"))]
    pub async fn get_prices(&self) -> Result<Vec<PairPrice>, ExchangeError> {
        let tickers = self.client.get_all_tickers().await.upstream(EXCHANGE)?;
        convert_kucoin_prices(tickers)
    }
}
