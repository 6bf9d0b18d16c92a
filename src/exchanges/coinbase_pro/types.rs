use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct CoinbaseProduct {
    /// e.g. `BTC-USD`
    pub id: String,
    pub base_currency: String,
    pub quote_currency: String,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CoinbaseAccount {
    pub id: String,
    pub currency: String,
    pub balance: String,
    pub available: String,
    pub hold: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoinbaseOrderRequest {
    pub product_id: String,
    /// `buy` or `sell`
    pub side: String,
    /// `limit` or `market`
    #[serde(rename = "type")]
    pub order_type: String,
    pub size: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    /// `loss` or `entry` for stop orders
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CoinbaseOrder {
    pub id: String,
    pub product_id: String,
    pub side: String,
    #[serde(rename = "type")]
    pub order_type: String,
    #[serde(default)]
    pub price: Option<String>,
    /// Absent on market orders placed by funds
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub filled_size: Option<String>,
    pub status: String,
    #[serde(default)]
    pub done_reason: Option<String>,
    #[serde(default)]
    pub stop_price: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub done_at: Option<String>,
    #[serde(default)]
    pub settled: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CoinbaseProductStats {
    pub open: String,
    pub high: String,
    pub low: String,
    pub volume: String,
    #[serde(default)]
    pub last: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CoinbaseProductTicker {
    pub trade_id: u64,
    pub price: String,
    pub size: String,
    pub bid: String,
    pub ask: String,
    pub volume: String,
    pub time: String,
}

/// Level 2 row: `[price, size, num_orders]`
#[derive(Debug, Clone, Deserialize)]
pub struct CoinbaseBookLevel(pub String, pub String, pub u64);

#[derive(Debug, Clone, Deserialize)]
pub struct CoinbaseOrderBook {
    pub sequence: u64,
    pub bids: Vec<CoinbaseBookLevel>,
    pub asks: Vec<CoinbaseBookLevel>,
}
