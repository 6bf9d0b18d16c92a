use crate::core::errors::ExchangeError;
use crate::core::symbols::PairResolver;
use crate::core::traits::{AccountInfo, ExchangeAdapter, MarketDataSource, OrderPlacer};
use crate::core::types::{
    Balance, DepositAddress, Exchange, KLine, Operation, OrderBook, OrderResponse, PairPrice,
    Side, Ticker, TimeInterval,
};
use crate::exchanges::binance::client::BinanceClient;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;

pub mod account;
pub mod market_data;
pub mod trading;

pub use account::Account;
pub use market_data::MarketData;
pub use trading::Trading;

/// Binance serves the whole contract
pub const UNSUPPORTED: &[(Operation, &str)] = &[];

/// Binance connector that composes all sub-component implementations
pub struct BinanceConnector {
    pub market: MarketData,
    pub trading: Trading,
    pub account: Account,
    resolver: PairResolver,
}

impl BinanceConnector {
    /// Binance symbols are concatenated, so no market list is needed up front
    pub fn new(client: Arc<dyn BinanceClient>) -> Self {
        Self {
            market: MarketData::new(&client),
            trading: Trading::new(&client),
            account: Account::new(&client),
            resolver: PairResolver::empty(),
        }
    }
}

impl ExchangeAdapter for BinanceConnector {
    fn exchange(&self) -> Exchange {
        Exchange::Binance
    }

    fn resolver(&self) -> &PairResolver {
        &self.resolver
    }

    fn unsupported_operations(&self) -> &'static [(Operation, &'static str)] {
        UNSUPPORTED
    }
}

#[async_trait]
impl MarketDataSource for BinanceConnector {
    async fn list_markets(&self) -> Result<Vec<String>, ExchangeError> {
        self.market.list_markets().await
    }

    async fn get_order_book(&self, pair: &str, limit: u32) -> Result<OrderBook, ExchangeError> {
        self.market.get_order_book(pair, limit).await
    }

    async fn get_klines(
        &self,
        pair: &str,
        interval: TimeInterval,
        limit: u32,
    ) -> Result<Vec<KLine>, ExchangeError> {
        self.market.get_klines(pair, interval, limit).await
    }

    async fn get_24h_stats(&self, pair: &str) -> Result<Ticker, ExchangeError> {
        self.market.get_24h_stats(pair).await
    }

    async fn get_prices(&self) -> Result<Vec<PairPrice>, ExchangeError> {
        self.market.get_prices().await
    }
}

#[async_trait]
impl OrderPlacer for BinanceConnector {
    async fn place_limit_order(
        &self,
        pair: &str,
        quantity: Decimal,
        price: Decimal,
        side: Side,
    ) -> Result<OrderResponse, ExchangeError> {
        self.trading
            .place_limit_order(pair, quantity, price, side)
            .await
    }

    async fn place_market_order(
        &self,
        pair: &str,
        quantity: Decimal,
        side: Side,
    ) -> Result<OrderResponse, ExchangeError> {
        self.trading.place_market_order(pair, quantity, side).await
    }

    async fn place_stop_loss_order(
        &self,
        pair: &str,
        quantity: Decimal,
        price: Decimal,
        stop_price: Decimal,
        side: Side,
    ) -> Result<OrderResponse, ExchangeError> {
        self.trading
            .place_stop_loss_order(pair, quantity, price, stop_price, side)
            .await
    }

    async fn cancel_order(
        &self,
        order_id: &str,
        pair: &str,
    ) -> Result<OrderResponse, ExchangeError> {
        self.trading.cancel_order(order_id, pair).await
    }

    async fn get_order(&self, pair: &str, order_id: &str) -> Result<OrderResponse, ExchangeError> {
        self.trading.get_order(pair, order_id).await
    }

    async fn list_orders(
        &self,
        pair: &str,
        limit: u32,
    ) -> Result<Vec<OrderResponse>, ExchangeError> {
        self.trading.list_orders(pair, limit).await
    }

    async fn list_open_orders(&self, pair: &str) -> Result<Vec<OrderResponse>, ExchangeError> {
        self.trading.list_open_orders(pair).await
    }
}

#[async_trait]
impl AccountInfo for BinanceConnector {
    async fn get_balances(&self) -> Result<Vec<Balance>, ExchangeError> {
        self.account.get_balances().await
    }

    async fn get_deposit_address(&self, symbol: &str) -> Result<DepositAddress, ExchangeError> {
        self.account.get_deposit_address(symbol).await
    }
}
