use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BittrexMarket {
    /// Quote first, e.g. `BTC-LTC`
    pub market_name: String,
    pub market_currency: String,
    pub base_currency: String,
    #[serde(default)]
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BittrexMarketSummary {
    pub market_name: String,
    pub high: Option<Decimal>,
    pub low: Option<Decimal>,
    pub volume: Option<Decimal>,
    pub last: Option<Decimal>,
    pub base_volume: Option<Decimal>,
    pub time_stamp: Option<String>,
    pub bid: Option<Decimal>,
    pub ask: Option<Decimal>,
    pub open_buy_orders: Option<u64>,
    pub open_sell_orders: Option<u64>,
    pub prev_day: Option<Decimal>,
    pub created: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BittrexBookLevel {
    pub quantity: Decimal,
    pub rate: Decimal,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BittrexOrderBook {
    #[serde(default)]
    pub buy: Vec<BittrexBookLevel>,
    #[serde(default)]
    pub sell: Vec<BittrexBookLevel>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BittrexBalance {
    pub currency: String,
    pub balance: Decimal,
    pub available: Decimal,
    #[serde(default)]
    pub pending: Decimal,
    #[serde(default)]
    pub crypto_address: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BittrexDepositAddress {
    pub currency: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BittrexOrderRequest {
    pub market: String,
    /// `BUY` or `SELL`
    pub side: String,
    /// `LIMIT` or `MARKET`
    #[serde(rename = "type")]
    pub order_type: String,
    pub quantity: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<Decimal>,
    pub time_in_force: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BittrexOrderAccepted {
    pub uuid: String,
}

/// Order as returned by `getorder`, `getorderhistory` and `getopenorders`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BittrexOrder {
    pub order_uuid: String,
    pub exchange: String,
    /// `LIMIT_BUY`, `LIMIT_SELL`, ...
    #[serde(alias = "Type")]
    pub order_type: String,
    pub quantity: Decimal,
    pub quantity_remaining: Decimal,
    #[serde(default)]
    pub limit: Option<Decimal>,
    #[serde(default)]
    pub price_per_unit: Option<Decimal>,
    #[serde(alias = "TimeStamp", default)]
    pub opened: Option<String>,
    #[serde(default)]
    pub closed: Option<String>,
    #[serde(default)]
    pub cancel_initiated: bool,
}
