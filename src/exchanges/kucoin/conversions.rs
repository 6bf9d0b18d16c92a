use super::types as kucoin_types;
use crate::core::errors::ExchangeError;
use crate::core::normalize::{
    check_fill, check_kline, check_non_negative, check_ticker, infer_order_status, millis_to_utc,
    parse_decimal, parse_decimal_or_zero, price_change_percent,
};
use crate::core::types::{
    Balance, DepositAddress, KLine, OrderBook, OrderBookEntry, OrderResponse, PairPrice, Side,
    Ticker, TimeInterval,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Balances are read from the spot trading accounts only
pub const TRADE_ACCOUNT: &str = "trade";

/// Page size when listing active orders
pub const OPEN_ORDERS_PAGE_SIZE: u32 = 100;

pub const fn side_to_kucoin(side: Side) -> &'static str {
    match side {
        Side::Buy => "buy",
        Side::Sell => "sell",
    }
}

pub fn side_from_kucoin(side: &str) -> Result<Side, ExchangeError> {
    match side.to_lowercase().as_str() {
        "buy" => Ok(Side::Buy),
        "sell" => Ok(Side::Sell),
        _ => Err(ExchangeError::malformed("side", side)),
    }
}

/// Granularity KuCoin actually serves for `interval`
///
/// There are no 3 day or monthly candles, those fall back to weekly.
pub const fn kucoin_granularity(interval: TimeInterval) -> TimeInterval {
    match interval {
        TimeInterval::Days3 | TimeInterval::Months1 => TimeInterval::Weeks1,
        other => other,
    }
}

pub const fn interval_to_kucoin(interval: TimeInterval) -> &'static str {
    match kucoin_granularity(interval) {
        TimeInterval::Minutes1 => "1min",
        TimeInterval::Minutes3 => "3min",
        TimeInterval::Minutes5 => "5min",
        TimeInterval::Minutes15 => "15min",
        TimeInterval::Minutes30 => "30min",
        TimeInterval::Hours1 => "1hour",
        TimeInterval::Hours2 => "2hour",
        TimeInterval::Hours4 => "4hour",
        TimeInterval::Hours6 => "6hour",
        TimeInterval::Hours8 => "8hour",
        TimeInterval::Hours12 => "12hour",
        TimeInterval::Days1 => "1day",
        TimeInterval::Days3 | TimeInterval::Weeks1 | TimeInterval::Months1 => "1week",
    }
}

/// Partial book depth to request for `limit` levels
pub const fn book_depth(limit: u32) -> u32 {
    if limit <= 20 {
        20
    } else {
        100
    }
}

pub fn client_order_id() -> String {
    format!("{:016x}", rand::random::<u64>())
}

pub fn limit_order_request(
    symbol: &str,
    quantity: Decimal,
    price: Decimal,
    side: Side,
) -> kucoin_types::KuCoinOrderRequest {
    kucoin_types::KuCoinOrderRequest {
        client_oid: client_order_id(),
        side: side_to_kucoin(side).to_string(),
        symbol: symbol.to_string(),
        order_type: "limit".to_string(),
        price: Some(price.to_string()),
        size: quantity.to_string(),
        time_in_force: Some("GTC".to_string()),
    }
}

/// Balance of a `trade` account; `holds` is the frozen part
pub fn convert_kucoin_account(
    account: kucoin_types::KuCoinAccount,
) -> Result<Balance, ExchangeError> {
    Ok(Balance {
        available: check_non_negative("available", parse_decimal("available", &account.available)?)?,
        frozen: check_non_negative("holds", parse_decimal("holds", &account.holds)?)?,
        symbol: account.currency,
    })
}

pub fn convert_kucoin_order(
    order: kucoin_types::KuCoinOrder,
) -> Result<OrderResponse, ExchangeError> {
    let order_quantity = parse_decimal("size", &order.size)?;
    let filled_quantity = parse_decimal("dealSize", &order.deal_size)?;
    check_fill(filled_quantity, order_quantity)?;

    Ok(OrderResponse {
        side: side_from_kucoin(&order.side)?,
        price: parse_decimal_or_zero("price", &order.price)?,
        stop_price: match order.stop_price.as_deref() {
            Some(raw) => parse_decimal_or_zero("stopPrice", raw)?,
            None => Decimal::ZERO,
        },
        status: infer_order_status(
            order_quantity,
            order_quantity - filled_quantity,
            order.cancel_exist,
        ),
        order_quantity,
        filled_quantity,
        transact_time: Some(millis_to_utc("createdAt", order.created_at)?),
        pair: order.symbol,
        order_id: order.id,
    })
}

/// Candle with a close time of start plus one served interval
pub fn convert_kucoin_candle(
    candle: kucoin_types::KuCoinCandle,
    interval: TimeInterval,
) -> Result<KLine, ExchangeError> {
    let start_seconds: i64 = candle
        .start
        .parse()
        .map_err(|_| ExchangeError::malformed("time", &candle.start))?;
    let open_time = DateTime::<Utc>::from_timestamp(start_seconds, 0)
        .ok_or_else(|| ExchangeError::malformed("time", &candle.start))?;

    let kline = KLine {
        open_time,
        open: parse_decimal("open", &candle.open)?,
        high: parse_decimal("high", &candle.high)?,
        low: parse_decimal("low", &candle.low)?,
        close: parse_decimal("close", &candle.close)?,
        volume: parse_decimal("volume", &candle.volume)?,
        close_time: open_time + kucoin_granularity(interval).duration(),
    };
    check_kline(&kline)?;
    Ok(kline)
}

fn optional_decimal(field: &'static str, raw: Option<&str>) -> Result<Decimal, ExchangeError> {
    raw.map_or(Ok(Decimal::ZERO), |value| parse_decimal_or_zero(field, value))
}

/// Ticker from the level 1 snapshot plus the 24h stats
pub fn convert_kucoin_ticker(
    ticker: kucoin_types::KuCoinTicker,
    stats: kucoin_types::KuCoin24hStats,
) -> Result<Ticker, ExchangeError> {
    let last_price = parse_decimal("price", &ticker.price)?;
    let price_change = optional_decimal("changePrice", stats.change_price.as_deref())?;
    let open = last_price - price_change;
    let close_time = millis_to_utc("time", stats.time)?;

    check_ticker(Ticker {
        open_time: Some(close_time - chrono::Duration::days(1)),
        close_time: Some(close_time),
        open,
        high: optional_decimal("high", stats.high.as_deref())?,
        low: optional_decimal("low", stats.low.as_deref())?,
        last_price,
        last_qty: parse_decimal("size", &ticker.size)?,
        bid_price: parse_decimal("bestBid", &ticker.best_bid)?,
        bid_qty: parse_decimal("bestBidSize", &ticker.best_bid_size)?,
        ask_price: parse_decimal("bestAsk", &ticker.best_ask)?,
        ask_qty: parse_decimal("bestAskSize", &ticker.best_ask_size)?,
        volume: optional_decimal("vol", stats.vol.as_deref())?,
        previous_close_price: open,
        weighted_avg_price: optional_decimal("averagePrice", stats.average_price.as_deref())?,
        price_change,
        price_change_percent: price_change_percent(open, last_price),
        pair: stats.symbol,
    })
}

/// Markets that have not traded yet carry no price and are skipped
pub fn convert_kucoin_prices(
    tickers: kucoin_types::KuCoinAllTickers,
) -> Result<Vec<PairPrice>, ExchangeError> {
    tickers
        .ticker
        .into_iter()
        .filter_map(|item| {
            item.last.map(|last| {
                Ok(PairPrice {
                    price: parse_decimal("last", &last)?,
                    pair: item.symbol,
                })
            })
        })
        .collect()
}

fn convert_levels(
    levels: Vec<[String; 2]>,
    limit: usize,
) -> Result<Vec<OrderBookEntry>, ExchangeError> {
    levels
        .into_iter()
        .take(limit)
        .map(|[price, size]| {
            Ok(OrderBookEntry {
                price: parse_decimal("price", &price)?,
                quantity: parse_decimal("size", &size)?,
            })
        })
        .collect()
}

pub fn convert_kucoin_order_book(
    book: kucoin_types::KuCoinOrderBook,
    limit: usize,
) -> Result<OrderBook, ExchangeError> {
    Ok(OrderBook {
        bids: convert_levels(book.bids, limit)?,
        asks: convert_levels(book.asks, limit)?,
    })
}

pub fn convert_kucoin_deposit_address(
    currency: &str,
    address: kucoin_types::KuCoinDepositAddress,
) -> DepositAddress {
    DepositAddress {
        symbol: currency.to_string(),
        address: address.address,
        tag: address.memo.filter(|memo| !memo.is_empty()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::OrderStatus;
    use crate::exchanges::kucoin::types::{KuCoinCandle, KuCoinOrder};
    use rust_decimal_macros::dec;

    fn order(deal_size: &str, cancel_exist: bool) -> KuCoinOrder {
        KuCoinOrder {
            id: "5c35c02703aa673ceec2a168".into(),
            symbol: "BTC-USDT".into(),
            order_type: "limit".into(),
            side: "buy".into(),
            price: "10".into(),
            size: "2".into(),
            deal_size: deal_size.into(),
            stop_price: None,
            is_active: !cancel_exist,
            cancel_exist,
            created_at: 1_547_026_471_000,
        }
    }

    #[test]
    fn test_order_status_is_inferred() {
        assert_eq!(convert_kucoin_order(order("0", false)).unwrap().status, OrderStatus::Open);
        assert_eq!(
            convert_kucoin_order(order("1", false)).unwrap().status,
            OrderStatus::PartialFill
        );
        assert_eq!(convert_kucoin_order(order("2", false)).unwrap().status, OrderStatus::Filled);
        assert_eq!(
            convert_kucoin_order(order("1", true)).unwrap().status,
            OrderStatus::Canceled
        );
    }

    #[test]
    fn test_interval_fallbacks() {
        assert_eq!(interval_to_kucoin(TimeInterval::Minutes15), "15min");
        assert_eq!(interval_to_kucoin(TimeInterval::Days3), "1week");
        assert_eq!(interval_to_kucoin(TimeInterval::Months1), "1week");
        assert_eq!(kucoin_granularity(TimeInterval::Hours4), TimeInterval::Hours4);
    }

    #[test]
    fn test_candle_close_time_follows_interval() {
        let candle: KuCoinCandle = serde_json::from_str(
            r#"["1545904980","0.058","0.049","0.058","0.049","0.018","0.000945"]"#,
        )
        .unwrap();
        let kline = convert_kucoin_candle(candle, TimeInterval::Minutes1).unwrap();
        assert_eq!(kline.open, dec!(0.058));
        assert_eq!(kline.close, dec!(0.049));
        assert_eq!(kline.open_time.timestamp(), 1_545_904_980);
        assert_eq!(kline.close_time.timestamp(), 1_545_905_040);
    }

    #[test]
    fn test_fallback_candle_spans_a_week() {
        let candle: KuCoinCandle =
            serde_json::from_str(r#"["1545696000","1","1","1","1","1","1"]"#).unwrap();
        let kline = convert_kucoin_candle(candle, TimeInterval::Days3).unwrap();
        assert_eq!(kline.close_time - kline.open_time, chrono::Duration::weeks(1));
    }

    #[test]
    fn test_prices_skip_untraded_markets() {
        let tickers: kucoin_types::KuCoinAllTickers = serde_json::from_str(
            r#"{"time":1602832092060,"ticker":[
                {"symbol":"BTC-USDT","last":"11328.9"},
                {"symbol":"NEW-USDT","last":null}]}"#,
        )
        .unwrap();
        let prices = convert_kucoin_prices(tickers).unwrap();
        assert_eq!(prices.len(), 1);
        assert_eq!(prices[0].price, dec!(11328.9));
    }

    #[test]
    fn test_book_depth_choice() {
        assert_eq!(book_depth(5), 20);
        assert_eq!(book_depth(20), 20);
        assert_eq!(book_depth(21), 100);
    }

    #[test]
    fn test_client_order_ids_are_unique() {
        assert_ne!(client_order_id(), client_order_id());
    }
}
