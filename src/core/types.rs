use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Default depth requested by `get_order_book`
pub const DEFAULT_BOOK_DEPTH: u32 = 100;
/// Default number of candles requested by `get_klines`
pub const DEFAULT_KLINE_LIMIT: u32 = 20;
/// Default number of orders requested by `list_orders`
pub const DEFAULT_ORDER_LIMIT: u32 = 20;

/// Typed errors for parsing canonical enums from their short codes
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypesError {
    #[error("Invalid exchange: {0}")]
    InvalidExchange(String),
    #[error("Invalid time interval: {0}")]
    InvalidInterval(String),
    #[error("Invalid side: {0}")]
    InvalidSide(String),
}

/// Exchanges that can be selected when constructing a hub
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Exchange {
    Binance,
    Bittrex,
    CoinbasePro,
    CoinEx,
    KuCoin,
    Switcheo,
}

/// How an exchange spells its market symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairNotation {
    /// `BTCUSDT`: the canonical form with separators stripped
    Concatenated,
    /// `BTC-USDT`, `USDT-BTC`, ...: looked up in the exchange's market list
    Mapped,
}

impl Exchange {
    pub fn all() -> Vec<Self> {
        vec![
            Self::Binance,
            Self::Bittrex,
            Self::CoinbasePro,
            Self::CoinEx,
            Self::KuCoin,
            Self::Switcheo,
        ]
    }

    pub const fn pair_notation(self) -> PairNotation {
        match self {
            Self::Binance => PairNotation::Concatenated,
            _ => PairNotation::Mapped,
        }
    }

    /// Whether orders on this exchange need a trading passphrase (`api_extra`)
    pub const fn requires_passphrase(self) -> bool {
        matches!(self, Self::CoinbasePro)
    }

    /// Lowercase identifier used for tracing fields and environment prefixes
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Binance => "binance",
            Self::Bittrex => "bittrex",
            Self::CoinbasePro => "coinbase_pro",
            Self::CoinEx => "coinex",
            Self::KuCoin => "kucoin",
            Self::Switcheo => "switcheo",
        }
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Binance => write!(f, "Binance"),
            Self::Bittrex => write!(f, "Bittrex"),
            Self::CoinbasePro => write!(f, "CoinbasePro"),
            Self::CoinEx => write!(f, "CoinEx"),
            Self::KuCoin => write!(f, "KuCoin"),
            Self::Switcheo => write!(f, "Switcheo"),
        }
    }
}

impl FromStr for Exchange {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|exchange| {
                exchange.as_str() == s.to_lowercase()
                    || exchange.to_string().eq_ignore_ascii_case(s)
            })
            .ok_or_else(|| TypesError::InvalidExchange(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub const fn opposite(self) -> Self {
        match self {
            Self::Buy => Self::Sell,
            Self::Sell => Self::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

impl FromStr for Side {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "buy" => Ok(Self::Buy),
            "sell" => Ok(Self::Sell),
            _ => Err(TypesError::InvalidSide(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Open,
    Filled,
    PartialFill,
    Canceled,
}

/// Candle granularity shared by every adapter
///
/// Adapters map each value onto their own vocabulary and fall back to the
/// nearest granularity the exchange offers when there is no exact match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeInterval {
    Minutes1,
    Minutes3,
    Minutes5,
    Minutes15,
    Minutes30,
    Hours1,
    Hours2,
    Hours4,
    Hours6,
    Hours8,
    Hours12,
    Days1,
    Days3,
    Weeks1,
    Months1,
}

impl TimeInterval {
    pub fn all() -> Vec<Self> {
        vec![
            Self::Minutes1,
            Self::Minutes3,
            Self::Minutes5,
            Self::Minutes15,
            Self::Minutes30,
            Self::Hours1,
            Self::Hours2,
            Self::Hours4,
            Self::Hours6,
            Self::Hours8,
            Self::Hours12,
            Self::Days1,
            Self::Days3,
            Self::Weeks1,
            Self::Months1,
        ]
    }

    /// Short code, e.g. `15m`, `4h`, `1month`
    pub const fn code(self) -> &'static str {
        match self {
            Self::Minutes1 => "1m",
            Self::Minutes3 => "3m",
            Self::Minutes5 => "5m",
            Self::Minutes15 => "15m",
            Self::Minutes30 => "30m",
            Self::Hours1 => "1h",
            Self::Hours2 => "2h",
            Self::Hours4 => "4h",
            Self::Hours6 => "6h",
            Self::Hours8 => "8h",
            Self::Hours12 => "12h",
            Self::Days1 => "1d",
            Self::Days3 => "3d",
            Self::Weeks1 => "1w",
            Self::Months1 => "1month",
        }
    }

    /// Length of one candle. A month counts as 30 days.
    pub fn duration(self) -> Duration {
        match self {
            Self::Minutes1 => Duration::minutes(1),
            Self::Minutes3 => Duration::minutes(3),
            Self::Minutes5 => Duration::minutes(5),
            Self::Minutes15 => Duration::minutes(15),
            Self::Minutes30 => Duration::minutes(30),
            Self::Hours1 => Duration::hours(1),
            Self::Hours2 => Duration::hours(2),
            Self::Hours4 => Duration::hours(4),
            Self::Hours6 => Duration::hours(6),
            Self::Hours8 => Duration::hours(8),
            Self::Hours12 => Duration::hours(12),
            Self::Days1 => Duration::days(1),
            Self::Days3 => Duration::days(3),
            Self::Weeks1 => Duration::weeks(1),
            Self::Months1 => Duration::days(30),
        }
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for TimeInterval {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|interval| interval.code() == s)
            .ok_or_else(|| TypesError::InvalidInterval(s.to_string()))
    }
}

/// Operations of the common contract, used to describe capability gaps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    ListMarkets,
    GetBalances,
    PlaceLimitOrder,
    PlaceMarketOrder,
    PlaceStopLossOrder,
    CancelOrder,
    GetKLines,
    Get24hStats,
    GetDepositAddress,
    GetOrderBook,
    GetOrder,
    ListOrders,
    ListOpenOrders,
    GetPrices,
}

impl Operation {
    pub fn all() -> Vec<Self> {
        vec![
            Self::ListMarkets,
            Self::GetBalances,
            Self::PlaceLimitOrder,
            Self::PlaceMarketOrder,
            Self::PlaceStopLossOrder,
            Self::CancelOrder,
            Self::GetKLines,
            Self::Get24hStats,
            Self::GetDepositAddress,
            Self::GetOrderBook,
            Self::GetOrder,
            Self::ListOrders,
            Self::ListOpenOrders,
            Self::GetPrices,
        ]
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            Self::ListMarkets => "list markets",
            Self::GetBalances => "get balances",
            Self::PlaceLimitOrder => "limit order",
            Self::PlaceMarketOrder => "market order",
            Self::PlaceStopLossOrder => "stop-loss order",
            Self::CancelOrder => "cancel order",
            Self::GetKLines => "klines",
            Self::Get24hStats => "24h stats",
            Self::GetDepositAddress => "deposit address",
            Self::GetOrderBook => "order book",
            Self::GetOrder => "get order",
            Self::ListOrders => "order history",
            Self::ListOpenOrders => "open orders",
            Self::GetPrices => "prices",
        };
        f.pad(description)
    }
}

/// Account holding of one asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    pub symbol: String,
    pub available: Decimal,
    pub frozen: Decimal,
}

impl Balance {
    pub fn total(&self) -> Decimal {
        self.available + self.frozen
    }
}

/// One resting price level of an order book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBookEntry {
    pub price: Decimal,
    pub quantity: Decimal,
}

/// Book snapshot, ordered as the source exchange sent it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBook {
    pub bids: Vec<OrderBookEntry>,
    pub asks: Vec<OrderBookEntry>,
}

/// A placed or queried order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderResponse {
    pub pair: String,
    pub order_id: String,
    pub side: Side,
    pub price: Decimal,
    pub stop_price: Decimal,
    pub order_quantity: Decimal,
    pub filled_quantity: Decimal,
    pub status: OrderStatus,
    pub transact_time: Option<DateTime<Utc>>,
}

impl OrderResponse {
    pub fn remaining_quantity(&self) -> Decimal {
        self.order_quantity - self.filled_quantity
    }
}

/// 24 hour market snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticker {
    pub pair: String,
    pub open_time: Option<DateTime<Utc>>,
    pub close_time: Option<DateTime<Utc>>,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub last_price: Decimal,
    pub last_qty: Decimal,
    pub bid_price: Decimal,
    pub bid_qty: Decimal,
    pub ask_price: Decimal,
    pub ask_qty: Decimal,
    pub volume: Decimal,
    pub previous_close_price: Decimal,
    pub weighted_avg_price: Decimal,
    pub price_change: Decimal,
    pub price_change_percent: Decimal,
}

/// One OHLCV candle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KLine {
    pub open_time: DateTime<Utc>,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: Decimal,
    pub close_time: DateTime<Utc>,
}

/// Latest trade price of a market
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairPrice {
    pub pair: String,
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositAddress {
    pub symbol: String,
    pub address: String,
    /// Memo/tag some assets require next to the address
    pub tag: Option<String>,
}
