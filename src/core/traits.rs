use crate::core::{
    errors::ExchangeError,
    symbols::PairResolver,
    types::{
        Balance, DepositAddress, Exchange, KLine, Operation, OrderBook, OrderResponse, PairPrice,
        Side, Ticker, TimeInterval,
    },
};
use async_trait::async_trait;
use rust_decimal::Decimal;

// Pair arguments below are native exchange symbols; `ExchangeHub` canonicalizes
// caller input before it reaches an adapter.

#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Native symbols of every market the exchange lists
    async fn list_markets(&self) -> Result<Vec<String>, ExchangeError>;

    /// Markets quoted in `base`, e.g. every `*BTC` market
    async fn list_markets_for(&self, base: &str) -> Result<Vec<String>, ExchangeError> {
        Ok(self
            .list_markets()
            .await?
            .into_iter()
            .filter(|market| market.ends_with(base))
            .collect())
    }

    async fn get_order_book(&self, pair: &str, limit: u32) -> Result<OrderBook, ExchangeError>;

    async fn get_klines(
        &self,
        pair: &str,
        interval: TimeInterval,
        limit: u32,
    ) -> Result<Vec<KLine>, ExchangeError>;

    async fn get_24h_stats(&self, pair: &str) -> Result<Ticker, ExchangeError>;

    /// Latest price of every market
    async fn get_prices(&self) -> Result<Vec<PairPrice>, ExchangeError>;
}

#[async_trait]
pub trait OrderPlacer: Send + Sync {
    async fn place_limit_order(
        &self,
        pair: &str,
        quantity: Decimal,
        price: Decimal,
        side: Side,
    ) -> Result<OrderResponse, ExchangeError>;

    async fn place_market_order(
        &self,
        pair: &str,
        quantity: Decimal,
        side: Side,
    ) -> Result<OrderResponse, ExchangeError>;

    /// Stop-limit order: rests at `price` once `stop_price` trades
    async fn place_stop_loss_order(
        &self,
        pair: &str,
        quantity: Decimal,
        price: Decimal,
        stop_price: Decimal,
        side: Side,
    ) -> Result<OrderResponse, ExchangeError>;

    async fn cancel_order(&self, order_id: &str, pair: &str)
        -> Result<OrderResponse, ExchangeError>;

    async fn get_order(&self, pair: &str, order_id: &str) -> Result<OrderResponse, ExchangeError>;

    async fn list_orders(&self, pair: &str, limit: u32)
        -> Result<Vec<OrderResponse>, ExchangeError>;

    async fn list_open_orders(&self, pair: &str) -> Result<Vec<OrderResponse>, ExchangeError>;
}

#[async_trait]
pub trait AccountInfo: Send + Sync {
    async fn get_balances(&self) -> Result<Vec<Balance>, ExchangeError>;

    async fn get_deposit_address(&self, symbol: &str) -> Result<DepositAddress, ExchangeError>;
}

/// Everything the hub needs from one exchange
pub trait ExchangeAdapter: MarketDataSource + OrderPlacer + AccountInfo {
    fn exchange(&self) -> Exchange;

    fn resolver(&self) -> &PairResolver;

    /// Operations this exchange cannot serve, with the reason
    fn unsupported_operations(&self) -> &'static [(Operation, &'static str)];

    fn canonicalize(&self, pair: &str) -> Result<String, ExchangeError> {
        self.resolver().canonicalize(pair, self.exchange())
    }

    fn supports(&self, operation: Operation) -> bool {
        !self
            .unsupported_operations()
            .iter()
            .any(|(unsupported, _)| *unsupported == operation)
    }
}

/// Gap error for `operation`, with the reason listed in `table`
pub fn unsupported<T>(
    exchange: Exchange,
    table: &'static [(Operation, &'static str)],
    operation: Operation,
) -> Result<T, ExchangeError> {
    let reason = table
        .iter()
        .find(|(listed, _)| *listed == operation)
        .map_or("not offered by the exchange", |(_, reason)| *reason);
    Err(ExchangeError::UnsupportedOperation {
        exchange,
        operation,
        reason,
    })
}
