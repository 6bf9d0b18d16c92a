use crate::core::{
    config::ApiInformation,
    errors::ExchangeError,
    traits::ExchangeAdapter,
    types::{
        Balance, DepositAddress, Exchange, KLine, Operation, OrderBook, OrderResponse, PairPrice,
        Side, Ticker, TimeInterval,
    },
};
use crate::utils::exchange_factory::{ClientFactory, ExchangeFactory};
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, info, instrument};

/// One trading surface over whichever exchange is selected
///
/// Pairs may be passed in any notation the resolver understands (`BTC-ETH`,
/// `BTCETH`); they are canonicalized for the active exchange before each call.
pub struct ExchangeHub {
    adapter: Box<dyn ExchangeAdapter>,
    factory: Arc<dyn ClientFactory>,
    markets: OnceCell<Vec<String>>,
}

impl ExchangeHub {
    pub async fn new(
        exchange: Exchange,
        credentials: &ApiInformation,
        factory: Arc<dyn ClientFactory>,
    ) -> Result<Self, ExchangeError> {
        let adapter = ExchangeFactory::create_adapter(exchange, credentials, factory.as_ref()).await?;
        info!(%exchange, "exchange hub ready");
        Ok(Self {
            adapter,
            factory,
            markets: OnceCell::new(),
        })
    }

    /// Replace the adapter wholesale and drop the cached market list
    ///
    /// On failure the current adapter stays in place.
    pub async fn reload(
        &mut self,
        exchange: Exchange,
        credentials: &ApiInformation,
    ) -> Result<(), ExchangeError> {
        let adapter =
            ExchangeFactory::create_adapter(exchange, credentials, self.factory.as_ref()).await?;
        self.adapter = adapter;
        self.markets = OnceCell::new();
        info!(%exchange, "exchange hub reloaded");
        Ok(())
    }

    /// Fetch the market list now, replacing any cached copy
    pub async fn refresh_markets(&mut self) -> Result<(), ExchangeError> {
        let markets = self.adapter.list_markets().await?;
        debug!(markets = markets.len(), "market cache refreshed");
        self.markets = OnceCell::new_with(Some(markets));
        Ok(())
    }

    pub fn exchange(&self) -> Exchange {
        self.adapter.exchange()
    }

    pub fn supports(&self, operation: Operation) -> bool {
        self.adapter.supports(operation)
    }

    pub fn unsupported_operations(&self) -> &'static [(Operation, &'static str)] {
        self.adapter.unsupported_operations()
    }

    /// Pair in the active exchange's native notation
    pub fn canonicalize(&self, pair: &str) -> Result<String, ExchangeError> {
        self.adapter.canonicalize(pair)
    }

    /// Cached after the first successful fetch
    #[instrument(skip(self))]
    pub async fn list_markets(&self) -> Result<Vec<String>, ExchangeError> {
        self.markets
            .get_or_try_init(|| self.adapter.list_markets())
            .await
            .cloned()
    }

    /// Markets quoted in `base`, e.g. every `...BTC` market for `"BTC"`
    #[instrument(skip(self))]
    pub async fn list_markets_for(&self, base: &str) -> Result<Vec<String>, ExchangeError> {
        match self.markets.get() {
            Some(markets) => Ok(markets
                .iter()
                .filter(|market| market.ends_with(base))
                .cloned()
                .collect()),
            None => self.adapter.list_markets_for(base).await,
        }
    }

    pub async fn get_balances(&self) -> Result<Vec<Balance>, ExchangeError> {
        self.adapter.get_balances().await
    }

    pub async fn get_deposit_address(&self, symbol: &str) -> Result<DepositAddress, ExchangeError> {
        self.adapter.get_deposit_address(symbol).await
    }

    pub async fn get_prices(&self) -> Result<Vec<PairPrice>, ExchangeError> {
        self.adapter.get_prices().await
    }

    #[instrument(skip(self))]
    pub async fn place_limit_order(
        &self,
        pair: &str,
        quantity: Decimal,
        price: Decimal,
        side: Side,
    ) -> Result<OrderResponse, ExchangeError> {
        let pair = self.canonicalize(pair)?;
        self.adapter
            .place_limit_order(&pair, quantity, price, side)
            .await
    }

    #[instrument(skip(self))]
    pub async fn place_market_order(
        &self,
        pair: &str,
        quantity: Decimal,
        side: Side,
    ) -> Result<OrderResponse, ExchangeError> {
        let pair = self.canonicalize(pair)?;
        self.adapter.place_market_order(&pair, quantity, side).await
    }

    #[instrument(skip(self))]
    pub async fn place_stop_loss_order(
        &self,
        pair: &str,
        quantity: Decimal,
        price: Decimal,
        stop_price: Decimal,
        side: Side,
    ) -> Result<OrderResponse, ExchangeError> {
        let pair = self.canonicalize(pair)?;
        self.adapter
            .place_stop_loss_order(&pair, quantity, price, stop_price, side)
            .await
    }

    #[instrument(skip(self))]
    pub async fn cancel_order(
        &self,
        order_id: &str,
        pair: &str,
    ) -> Result<OrderResponse, ExchangeError> {
        let pair = self.canonicalize(pair)?;
        self.adapter.cancel_order(order_id, &pair).await
    }

    pub async fn get_klines(
        &self,
        pair: &str,
        interval: TimeInterval,
        limit: u32,
    ) -> Result<Vec<KLine>, ExchangeError> {
        let pair = self.canonicalize(pair)?;
        self.adapter.get_klines(&pair, interval, limit).await
    }

    pub async fn get_24h_stats(&self, pair: &str) -> Result<Ticker, ExchangeError> {
        let pair = self.canonicalize(pair)?;
        self.adapter.get_24h_stats(&pair).await
    }

    pub async fn get_order_book(&self, pair: &str, limit: u32) -> Result<OrderBook, ExchangeError> {
        let pair = self.canonicalize(pair)?;
        self.adapter.get_order_book(&pair, limit).await
    }

    pub async fn get_order(&self, pair: &str, order_id: &str) -> Result<OrderResponse, ExchangeError> {
        let pair = self.canonicalize(pair)?;
        self.adapter.get_order(&pair, order_id).await
    }

    pub async fn list_orders(
        &self,
        pair: &str,
        limit: u32,
    ) -> Result<Vec<OrderResponse>, ExchangeError> {
        let pair = self.canonicalize(pair)?;
        self.adapter.list_orders(&pair, limit).await
    }

    pub async fn list_open_orders(&self, pair: &str) -> Result<Vec<OrderResponse>, ExchangeError> {
        let pair = self.canonicalize(pair)?;
        self.adapter.list_open_orders(&pair).await
    }
}
