use crate::core::errors::ExchangeError;
use crate::core::symbols::PairResolver;
use crate::core::traits::{
    unsupported, AccountInfo, ExchangeAdapter, MarketDataSource, OrderPlacer,
};
use crate::core::types::{
    Balance, DepositAddress, Exchange, KLine, Operation, OrderBook, OrderResponse, PairPrice,
    Side, Ticker, TimeInterval,
};
use crate::exchanges::kucoin::client::KuCoinClient;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;

pub mod account;
pub mod market_data;
pub mod trading;

pub use account::Account;
pub use market_data::MarketData;
pub use trading::Trading;

pub const UNSUPPORTED: &[(Operation, &str)] = &[(
    Operation::PlaceStopLossOrder,
    "KuCoin does not offer stop-loss orders",
)];

/// KuCoin connector that composes all sub-component implementations
pub struct KuCoinConnector {
    pub market: MarketData,
    pub trading: Trading,
    pub account: Account,
    resolver: PairResolver,
}

impl KuCoinConnector {
    pub fn new(client: Arc<dyn KuCoinClient>, resolver: PairResolver) -> Self {
        Self {
            market: MarketData::new(&client),
            trading: Trading::new(&client),
            account: Account::new(&client),
            resolver,
        }
    }
}

impl ExchangeAdapter for KuCoinConnector {
    fn exchange(&self) -> Exchange {
        Exchange::KuCoin
    }

    fn resolver(&self) -> &PairResolver {
        &self.resolver
    }

    fn unsupported_operations(&self) -> &'static [(Operation, &'static str)] {
        UNSUPPORTED
    }
}

#[async_trait]
impl MarketDataSource for KuCoinConnector {
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
impl OrderPlacer for KuCoinConnector {
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
        _pair: &str,
        _quantity: Decimal,
        _price: Decimal,
        _stop_price: Decimal,
        _side: Side,
    ) -> Result<OrderResponse, ExchangeError> {
        unsupported(Exchange::KuCoin, UNSUPPORTED, Operation::PlaceStopLossOrder)
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
impl AccountInfo for KuCoinConnector {
    async fn get_balances(&self) -> Result<Vec<Balance>, ExchangeError> {
        self.account.get_balances().await
    }

    async fn get_deposit_address(&self, symbol: &str) -> Result<DepositAddress, ExchangeError> {
        self.account.get_deposit_address(symbol).await
    }
}
