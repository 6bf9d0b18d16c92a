use crate::core::errors::ExchangeError;
use crate::core::symbols::PairResolver;
use crate::core::traits::{
    unsupported, AccountInfo, ExchangeAdapter, MarketDataSource, OrderPlacer,
};
use crate::core::types::{
    Balance, DepositAddress, Exchange, KLine, Operation, OrderBook, OrderResponse, PairPrice,
    Side, Ticker, TimeInterval,
};
use crate::exchanges::coinbase_pro::client::CoinbaseProClient;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;

pub mod account;
pub mod market_data;
pub mod trading;

pub use account::Account;
pub use market_data::MarketData;
pub use trading::Trading;

const EXCHANGE: Exchange = Exchange::CoinbasePro;

pub const UNSUPPORTED: &[(Operation, &str)] = &[
    (
        Operation::GetKLines,
        "Coinbase Pro does not offer a candlestick/kline endpoint",
    ),
    (
        Operation::GetDepositAddress,
        "Coinbase Pro does not expose deposit addresses",
    ),
    (
        Operation::ListOrders,
        "Coinbase Pro does not offer an order history endpoint",
    ),
    (
        Operation::GetPrices,
        "Coinbase Pro has no all-markets price endpoint",
    ),
];

/// Coinbase Pro connector that composes all sub-component implementations
pub struct CoinbaseProConnector {
    pub market: MarketData,
    pub trading: Trading,
    pub account: Account,
    resolver: PairResolver,
}

impl CoinbaseProConnector {
    pub fn new(client: Arc<dyn CoinbaseProClient>, resolver: PairResolver) -> Self {
        Self {
            market: MarketData::new(&client),
            trading: Trading::new(&client),
            account: Account::new(&client),
            resolver,
        }
    }
}

impl ExchangeAdapter for CoinbaseProConnector {
    fn exchange(&self) -> Exchange {
        EXCHANGE
    }

    fn resolver(&self) -> &PairResolver {
        &self.resolver
    }

    fn unsupported_operations(&self) -> &'static [(Operation, &'static str)] {
        UNSUPPORTED
    }
}

#[async_trait]
impl MarketDataSource for CoinbaseProConnector {
    async fn list_markets(&self) -> Result<Vec<String>, ExchangeError> {
        self.market.list_markets().await
    }

    async fn get_order_book(&self, pair: &str, limit: u32) -> Result<OrderBook, ExchangeError> {
        self.market.get_order_book(pair, limit).await
    }

    async fn get_klines(
        &self,
        _pair: &str,
        _interval: TimeInterval,
        _limit: u32,
    ) -> Result<Vec<KLine>, ExchangeError> {
        unsupported(EXCHANGE, UNSUPPORTED, Operation::GetKLines)
    }

    async fn get_24h_stats(&self, pair: &str) -> Result<Ticker, ExchangeError> {
        self.market.get_24h_stats(pair).await
    }

    async fn get_prices(&self) -> Result<Vec<PairPrice>, ExchangeError> {
        unsupported(EXCHANGE, UNSUPPORTED, Operation::GetPrices)
    }
}

#[async_trait]
impl OrderPlacer for CoinbaseProConnector {
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
        _pair: &str,
        _limit: u32,
    ) -> Result<Vec<OrderResponse>, ExchangeError> {
        unsupported(EXCHANGE, UNSUPPORTED, Operation::ListOrders)
    }

    async fn list_open_orders(&self, pair: &str) -> Result<Vec<OrderResponse>, ExchangeError> {
        self.trading.list_open_orders(pair).await
    }
}

#[async_trait]
impl AccountInfo for CoinbaseProConnector {
    async fn get_balances(&self) -> Result<Vec<Balance>, ExchangeError> {
        self.account.get_balances().await
    }

    async fn get_deposit_address(&self, _symbol: &str) -> Result<DepositAddress, ExchangeError> {
        unsupported(EXCHANGE, UNSUPPORTED, Operation::GetDepositAddress)
    }
}
