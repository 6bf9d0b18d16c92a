use super::types as bittrex_types;
use crate::core::errors::ExchangeError;
use crate::core::normalize::{
    check_fill, check_non_negative, check_ticker, infer_order_status, parse_optional_timestamp,
    price_change_percent,
};
use crate::core::types::{
    Balance, DepositAddress, OrderBook, OrderBookEntry, OrderResponse, PairPrice, Side, Ticker,
};
use rust_decimal::Decimal;

pub const fn side_to_bittrex(side: Side) -> &'static str {
    match side {
        Side::Buy => "BUY",
        Side::Sell => "SELL",
    }
}

/// Side from an order type such as `LIMIT_BUY`
pub fn side_from_order_type(order_type: &str) -> Result<Side, ExchangeError> {
    if order_type.ends_with("BUY") {
        Ok(Side::Buy)
    } else if order_type.ends_with("SELL") {
        Ok(Side::Sell)
    } else {
        Err(ExchangeError::malformed("OrderType", order_type))
    }
}

pub fn limit_order_request(
    market: &str,
    quantity: Decimal,
    price: Decimal,
    side: Side,
) -> bittrex_types::BittrexOrderRequest {
    bittrex_types::BittrexOrderRequest {
        market: market.to_string(),
        side: side_to_bittrex(side).to_string(),
        order_type: "LIMIT".to_string(),
        quantity,
        rate: Some(price),
        time_in_force: "GOOD_TIL_CANCELLED".to_string(),
    }
}

pub fn market_order_request(
    market: &str,
    quantity: Decimal,
    side: Side,
) -> bittrex_types::BittrexOrderRequest {
    bittrex_types::BittrexOrderRequest {
        market: market.to_string(),
        side: side_to_bittrex(side).to_string(),
        order_type: "MARKET".to_string(),
        quantity,
        rate: None,
        time_in_force: "IMMEDIATE_OR_CANCEL".to_string(),
    }
}

/// Frozen is whatever is on the account but not available
pub fn convert_bittrex_balance(
    balance: bittrex_types::BittrexBalance,
) -> Result<Balance, ExchangeError> {
    let available = check_non_negative("Available", balance.available)?;
    let frozen = check_non_negative("Balance", balance.balance - balance.available)?;
    Ok(Balance {
        symbol: balance.currency,
        available,
        frozen,
    })
}

pub fn convert_bittrex_order(
    order: bittrex_types::BittrexOrder,
) -> Result<OrderResponse, ExchangeError> {
    let remaining = check_non_negative("QuantityRemaining", order.quantity_remaining)?;
    let filled_quantity = order.quantity - remaining;
    check_fill(filled_quantity, order.quantity)?;

    let transact_time = match parse_optional_timestamp("Closed", order.closed.as_deref())? {
        Some(closed) => Some(closed),
        None => parse_optional_timestamp("Opened", order.opened.as_deref())?,
    };

    Ok(OrderResponse {
        side: side_from_order_type(&order.order_type)?,
        price: order
            .limit
            .or(order.price_per_unit)
            .unwrap_or(Decimal::ZERO),
        stop_price: Decimal::ZERO,
        status: infer_order_status(order.quantity, remaining, order.cancel_initiated),
        order_quantity: order.quantity,
        filled_quantity,
        transact_time,
        pair: order.exchange,
        order_id: order.order_uuid,
    })
}

/// Ticker from a market summary; `PrevDay` stands in for the open price
pub fn convert_bittrex_summary(
    summary: bittrex_types::BittrexMarketSummary,
) -> Result<Ticker, ExchangeError> {
    let last_price = summary.last.unwrap_or_default();
    let open = summary.prev_day.unwrap_or_default();
    check_ticker(Ticker {
        open_time: parse_optional_timestamp("Created", summary.created.as_deref())?,
        close_time: parse_optional_timestamp("TimeStamp", summary.time_stamp.as_deref())?,
        open,
        high: summary.high.unwrap_or_default(),
        low: summary.low.unwrap_or_default(),
        last_price,
        bid_price: summary.bid.unwrap_or_default(),
        ask_price: summary.ask.unwrap_or_default(),
        volume: summary.volume.unwrap_or_default(),
        previous_close_price: open,
        price_change: last_price - open,
        price_change_percent: price_change_percent(open, last_price),
        pair: summary.market_name,
        ..Ticker::default()
    })
}

pub fn convert_bittrex_price(summary: bittrex_types::BittrexMarketSummary) -> PairPrice {
    PairPrice {
        price: summary.last.unwrap_or_default(),
        pair: summary.market_name,
    }
}

fn convert_levels(levels: Vec<bittrex_types::BittrexBookLevel>, limit: usize) -> Vec<OrderBookEntry> {
    levels
        .into_iter()
        .take(limit)
        .map(|level| OrderBookEntry {
            price: level.rate,
            quantity: level.quantity,
        })
        .collect()
}

/// Bittrex always sends its full book; cut each side to `limit`
pub fn convert_bittrex_order_book(book: bittrex_types::BittrexOrderBook, limit: usize) -> OrderBook {
    OrderBook {
        bids: convert_levels(book.buy, limit),
        asks: convert_levels(book.sell, limit),
    }
}

pub fn convert_bittrex_deposit_address(
    address: bittrex_types::BittrexDepositAddress,
) -> DepositAddress {
    DepositAddress {
        symbol: address.currency,
        address: address.address,
        tag: None,
    }
}
