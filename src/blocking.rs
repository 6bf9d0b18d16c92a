use crate::core::{
    config::{ApiInformation, ConfigError},
    errors::ExchangeError,
    types::{
        Balance, DepositAddress, Exchange, KLine, Operation, OrderBook, OrderResponse, PairPrice,
        Side, Ticker, TimeInterval,
    },
};
use crate::hub::ExchangeHub;
use crate::utils::exchange_factory::ClientFactory;
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::runtime::{Builder, Runtime};

/// Synchronous front for callers without an async runtime
///
/// Owns a current-thread runtime; must not be used from inside another
/// tokio runtime.
pub struct BlockingExchangeHub {
    runtime: Runtime,
    hub: ExchangeHub,
}

impl BlockingExchangeHub {
    pub fn new(
        exchange: Exchange,
        credentials: &ApiInformation,
        factory: Arc<dyn ClientFactory>,
    ) -> Result<Self, ExchangeError> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ConfigError::Runtime(e.to_string()))?;
        let hub = runtime.block_on(ExchangeHub::new(exchange, credentials, factory))?;
        Ok(Self { runtime, hub })
    }

    pub fn hub(&self) -> &ExchangeHub {
        &self.hub
    }

    pub fn reload(
        &mut self,
        exchange: Exchange,
        credentials: &ApiInformation,
    ) -> Result<(), ExchangeError> {
        self.runtime.block_on(self.hub.reload(exchange, credentials))
    }

    pub fn refresh_markets(&mut self) -> Result<(), ExchangeError> {
        self.runtime.block_on(self.hub.refresh_markets())
    }

    pub fn exchange(&self) -> Exchange {
        self.hub.exchange()
    }

    pub fn supports(&self, operation: Operation) -> bool {
        self.hub.supports(operation)
    }

    pub fn list_markets(&self) -> Result<Vec<String>, ExchangeError> {
        self.runtime.block_on(self.hub.list_markets())
    }

    pub fn list_markets_for(&self, base: &str) -> Result<Vec<String>, ExchangeError> {
        self.runtime.block_on(self.hub.list_markets_for(base))
    }

    pub fn get_balances(&self) -> Result<Vec<Balance>, ExchangeError> {
        self.runtime.block_on(self.hub.get_balances())
    }

    pub fn get_deposit_address(&self, symbol: &str) -> Result<DepositAddress, ExchangeError> {
        self.runtime.block_on(self.hub.get_deposit_address(symbol))
    }

    pub fn get_prices(&self) -> Result<Vec<PairPrice>, ExchangeError> {
        self.runtime.block_on(self.hub.get_prices())
    }

    pub fn place_limit_order(
        &self,
        pair: &str,
        quantity: Decimal,
        price: Decimal,
        side: Side,
    ) -> Result<OrderResponse, ExchangeError> {
        self.runtime
            .block_on(self.hub.place_limit_order(pair, quantity, price, side))
    }

    pub fn place_market_order(
        &self,
        pair: &str,
        quantity: Decimal,
        side: Side,
    ) -> Result<OrderResponse, ExchangeError> {
        self.runtime
            .block_on(self.hub.place_market_order(pair, quantity, side))
    }

    pub fn place_stop_loss_order(
        &self,
        pair: &str,
        quantity: Decimal,
        price: Decimal,
        stop_price: Decimal,
        side: Side,
    ) -> Result<OrderResponse, ExchangeError> {
        self.runtime.block_on(
            self.hub
                .place_stop_loss_order(pair, quantity, price, stop_price, side),
        )
    }

    pub fn cancel_order(&self, order_id: &str, pair: &str) -> Result<OrderResponse, ExchangeError> {
        self.runtime.block_on(self.hub.cancel_order(order_id, pair))
    }

    pub fn get_klines(
        &self,
        pair: &str,
        interval: TimeInterval,
        limit: u32,
    ) -> Result<Vec<KLine>, ExchangeError> {
        self.runtime
            .block_on(self.hub.get_klines(pair, interval, limit))
    }

    pub fn get_24h_stats(&self, pair: &str) -> Result<Ticker, ExchangeError> {
        self.runtime.block_on(self.hub.get_24h_stats(pair))
    }

    pub fn get_order_book(&self, pair: &str, limit: u32) -> Result<OrderBook, ExchangeError> {
        self.runtime.block_on(self.hub.get_order_book(pair, limit))
    }

    pub fn get_order(&self, pair: &str, order_id: &str) -> Result<OrderResponse, ExchangeError> {
        self.runtime.block_on(self.hub.get_order(pair, order_id))
    }

    pub fn list_orders(&self, pair: &str, limit: u32) -> Result<Vec<OrderResponse>, ExchangeError> {
        self.runtime.block_on(self.hub.list_orders(pair, limit))
    }

    pub fn list_open_orders(&self, pair: &str) -> Result<Vec<OrderResponse>, ExchangeError> {
        self.runtime.block_on(self.hub.list_open_orders(pair))
    }
}
