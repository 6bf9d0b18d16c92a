use super::types as coinbase_types;
use crate::core::errors::ExchangeError;
use crate::core::normalize::{
    check_fill, check_non_negative, check_ticker, parse_decimal, parse_decimal_or_zero,
    parse_optional_timestamp, parse_timestamp, price_change_percent,
};
use crate::core::types::{
    Balance, OrderBook, OrderBookEntry, OrderResponse, OrderStatus, Side, Ticker,
};
use rust_decimal::Decimal;

/// Level 2 aggregates the best 50 price levels per side
pub const BOOK_LEVEL: u8 = 2;

pub const fn side_to_coinbase(side: Side) -> &'static str {
    match side {
        Side::Buy => "buy",
        Side::Sell => "sell",
    }
}

pub fn side_from_coinbase(side: &str) -> Result<Side, ExchangeError> {
    match side {
        "buy" => Ok(Side::Buy),
        "sell" => Ok(Side::Sell),
        other => Err(ExchangeError::malformed("side", other)),
    }
}

/// Coinbase reports a lifecycle state, not a fill state, so partial fills
/// are read off the filled size
pub fn status_from_coinbase(
    status: &str,
    done_reason: Option<&str>,
    filled: Decimal,
    size: Decimal,
) -> Result<OrderStatus, ExchangeError> {
    match status {
        "open" | "pending" | "active" | "received" => {
            if filled > Decimal::ZERO && filled < size {
                Ok(OrderStatus::PartialFill)
            } else {
                Ok(OrderStatus::Open)
            }
        }
        "done" | "settled" | "closed" => match done_reason {
            Some("canceled") => Ok(OrderStatus::Canceled),
            _ => Ok(OrderStatus::Filled),
        },
        "rejected" => Ok(OrderStatus::Canceled),
        other => Err(ExchangeError::malformed("status", other)),
    }
}

pub fn limit_order_request(
    product_id: &str,
    quantity: Decimal,
    price: Decimal,
    side: Side,
) -> coinbase_types::CoinbaseOrderRequest {
    coinbase_types::CoinbaseOrderRequest {
        product_id: product_id.to_string(),
        side: side_to_coinbase(side).to_string(),
        order_type: "limit".to_string(),
        size: quantity.to_string(),
        price: Some(price.to_string()),
        stop: None,
        stop_price: None,
        time_in_force: Some("GTC".to_string()),
    }
}

pub fn market_order_request(
    product_id: &str,
    quantity: Decimal,
    side: Side,
) -> coinbase_types::CoinbaseOrderRequest {
    coinbase_types::CoinbaseOrderRequest {
        product_id: product_id.to_string(),
        side: side_to_coinbase(side).to_string(),
        order_type: "market".to_string(),
        size: quantity.to_string(),
        price: None,
        stop: None,
        stop_price: None,
        time_in_force: None,
    }
}

/// Stop-limit order; sells trigger on `loss`, buys on `entry`
pub fn stop_loss_order_request(
    product_id: &str,
    quantity: Decimal,
    price: Decimal,
    stop_price: Decimal,
    side: Side,
) -> coinbase_types::CoinbaseOrderRequest {
    let stop = match side {
        Side::Sell => "loss",
        Side::Buy => "entry",
    };
    coinbase_types::CoinbaseOrderRequest {
        stop: Some(stop.to_string()),
        stop_price: Some(stop_price.to_string()),
        ..limit_order_request(product_id, quantity, price, side)
    }
}

pub fn convert_coinbase_account(
    account: coinbase_types::CoinbaseAccount,
) -> Result<Balance, ExchangeError> {
    Ok(Balance {
        available: check_non_negative("available", parse_decimal("available", &account.available)?)?,
        frozen: check_non_negative("hold", parse_decimal("hold", &account.hold)?)?,
        symbol: account.currency,
    })
}

fn optional_decimal(field: &'static str, raw: Option<&str>) -> Result<Decimal, ExchangeError> {
    raw.map_or(Ok(Decimal::ZERO), |value| parse_decimal_or_zero(field, value))
}

pub fn convert_coinbase_order(
    order: coinbase_types::CoinbaseOrder,
) -> Result<OrderResponse, ExchangeError> {
    let filled_quantity = optional_decimal("filled_size", order.filled_size.as_deref())?;
    // funds-based market orders carry no size
    let order_quantity = match order.size.as_deref() {
        Some(size) => parse_decimal("size", size)?,
        None => filled_quantity,
    };
    check_fill(filled_quantity, order_quantity)?;

    let status = status_from_coinbase(
        &order.status,
        order.done_reason.as_deref(),
        filled_quantity,
        order_quantity,
    )?;
    let transact_time = match parse_optional_timestamp("done_at", order.done_at.as_deref())? {
        Some(done) => Some(done),
        None => Some(parse_timestamp("created_at", &order.created_at)?),
    };

    Ok(OrderResponse {
        side: side_from_coinbase(&order.side)?,
        price: optional_decimal("price", order.price.as_deref())?,
        stop_price: optional_decimal("stop_price", order.stop_price.as_deref())?,
        order_quantity,
        filled_quantity,
        status,
        transact_time,
        pair: order.product_id,
        order_id: order.id,
    })
}

/// Ticker from the 24h stats plus the latest trade snapshot
pub fn convert_coinbase_ticker(
    product_id: &str,
    stats: coinbase_types::CoinbaseProductStats,
    ticker: coinbase_types::CoinbaseProductTicker,
) -> Result<Ticker, ExchangeError> {
    let open = parse_decimal("open", &stats.open)?;
    let last_price = parse_decimal("price", &ticker.price)?;
    check_ticker(Ticker {
        pair: product_id.to_string(),
        close_time: Some(parse_timestamp("time", &ticker.time)?),
        open,
        high: parse_decimal("high", &stats.high)?,
        low: parse_decimal("low", &stats.low)?,
        volume: parse_decimal("volume", &stats.volume)?,
        last_price,
        last_qty: parse_decimal("size", &ticker.size)?,
        bid_price: parse_decimal("bid", &ticker.bid)?,
        ask_price: parse_decimal("ask", &ticker.ask)?,
        price_change: last_price - open,
        price_change_percent: price_change_percent(open, last_price),
        ..Ticker::default()
    })
}

fn convert_levels(
    levels: Vec<coinbase_types::CoinbaseBookLevel>,
    limit: usize,
) -> Result<Vec<OrderBookEntry>, ExchangeError> {
    levels
        .into_iter()
        .take(limit)
        .map(|coinbase_types::CoinbaseBookLevel(price, size, _)| {
            Ok(OrderBookEntry {
                price: parse_decimal("price", &price)?,
                quantity: parse_decimal("size", &size)?,
            })
        })
        .collect()
}

pub fn convert_coinbase_order_book(
    book: coinbase_types::CoinbaseOrderBook,
    limit: usize,
) -> Result<OrderBook, ExchangeError> {
    Ok(OrderBook {
        bids: convert_levels(book.bids, limit)?,
        asks: convert_levels(book.asks, limit)?,
    })
}
