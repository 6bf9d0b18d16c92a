use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KuCoinSymbol {
    /// e.g. `BTC-USDT`
    pub symbol: String,
    pub base_currency: String,
    pub quote_currency: String,
    #[serde(default)]
    pub enable_trading: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KuCoinAccount {
    pub id: String,
    pub currency: String,
    /// `main`, `trade` or `margin`
    #[serde(rename = "type")]
    pub account_type: String,
    pub balance: String,
    pub available: String,
    pub holds: String,
}

/// Level 1 snapshot from `/market/orderbook/level1`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KuCoinTicker {
    pub sequence: String,
    pub price: String,
    pub size: String,
    pub best_bid: String,
    pub best_bid_size: String,
    pub best_ask: String,
    pub best_ask_size: String,
    pub time: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KuCoin24hStats {
    pub symbol: String,
    pub high: Option<String>,
    pub low: Option<String>,
    pub vol: Option<String>,
    pub last: Option<String>,
    pub change_price: Option<String>,
    pub change_rate: Option<String>,
    pub average_price: Option<String>,
    pub time: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KuCoinTickerItem {
    pub symbol: String,
    pub last: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KuCoinAllTickers {
    pub time: i64,
    pub ticker: Vec<KuCoinTickerItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KuCoinOrderBook {
    pub sequence: String,
    pub time: i64,
    pub bids: Vec<[String; 2]>,
    pub asks: Vec<[String; 2]>,
}

/// Raw candle row: `[startSeconds, open, close, high, low, volume, turnover]`
pub type KuCoinCandleRow = (String, String, String, String, String, String, String);

#[derive(Debug, Clone, Deserialize)]
#[serde(from = "KuCoinCandleRow")]
pub struct KuCoinCandle {
    pub start: String,
    pub open: String,
    pub close: String,
    pub high: String,
    pub low: String,
    pub volume: String,
}

impl From<KuCoinCandleRow> for KuCoinCandle {
    fn from(row: KuCoinCandleRow) -> Self {
        Self {
            start: row.0,
            open: row.1,
            close: row.2,
            high: row.3,
            low: row.4,
            volume: row.5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct KuCoinDepositAddress {
    pub address: String,
    #[serde(default)]
    pub memo: Option<String>,
    #[serde(default)]
    pub chain: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KuCoinOrderRequest {
    pub client_oid: String,
    /// `buy` or `sell`
    pub side: String,
    pub symbol: String,
    #[serde(rename = "type")]
    pub order_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    pub size: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KuCoinOrderAccepted {
    pub order_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KuCoinOrder {
    pub id: String,
    pub symbol: String,
    #[serde(rename = "type")]
    pub order_type: String,
    pub side: String,
    pub price: String,
    pub size: String,
    pub deal_size: String,
    #[serde(default)]
    pub stop_price: Option<String>,
    pub is_active: bool,
    pub cancel_exist: bool,
    pub created_at: i64,
}
