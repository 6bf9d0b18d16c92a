use super::types as binance_types;
use crate::core::errors::ExchangeError;
use crate::core::normalize::{
    check_fill, check_kline, check_non_negative, check_ticker, millis_to_utc, parse_decimal,
    parse_decimal_or_zero,
};
use crate::core::types::{
    Balance, DepositAddress, KLine, OrderBook, OrderBookEntry, OrderResponse, OrderStatus,
    PairPrice, Side, Ticker, TimeInterval,
};
use rust_decimal::Decimal;

pub const fn side_to_binance(side: Side) -> &'static str {
    match side {
        Side::Buy => "BUY",
        Side::Sell => "SELL",
    }
}

pub fn side_from_binance(side: &str) -> Result<Side, ExchangeError> {
    match side {
        "BUY" => Ok(Side::Buy),
        "SELL" => Ok(Side::Sell),
        other => Err(ExchangeError::malformed("side", other)),
    }
}

pub fn status_from_binance(status: &str) -> Result<OrderStatus, ExchangeError> {
    match status {
        "NEW" | "PENDING_NEW" => Ok(OrderStatus::Open),
        "PARTIALLY_FILLED" => Ok(OrderStatus::PartialFill),
        "FILLED" => Ok(OrderStatus::Filled),
        "CANCELED" | "PENDING_CANCEL" | "EXPIRED" | "EXPIRED_IN_MATCH" | "REJECTED" => {
            Ok(OrderStatus::Canceled)
        }
        other => Err(ExchangeError::malformed("status", other)),
    }
}

/// Binance offers every canonical interval
pub const fn interval_to_binance(interval: TimeInterval) -> &'static str {
    match interval {
        TimeInterval::Minutes1 => "1m",
        TimeInterval::Minutes3 => "3m",
        TimeInterval::Minutes5 => "5m",
        TimeInterval::Minutes15 => "15m",
        TimeInterval::Minutes30 => "30m",
        TimeInterval::Hours1 => "1h",
        TimeInterval::Hours2 => "2h",
        TimeInterval::Hours4 => "4h",
        TimeInterval::Hours6 => "6h",
        TimeInterval::Hours8 => "8h",
        TimeInterval::Hours12 => "12h",
        TimeInterval::Days1 => "1d",
        TimeInterval::Days3 => "3d",
        TimeInterval::Weeks1 => "1w",
        TimeInterval::Months1 => "1M",
    }
}

/// Binance order ids are numeric
pub fn parse_order_id(order_id: &str) -> Result<u64, ExchangeError> {
    order_id.trim().parse::<u64>().map_err(|_| {
        ExchangeError::InvalidParameters(format!("Binance order id must be numeric: {}", order_id))
    })
}

pub fn limit_order_request(
    pair: &str,
    quantity: Decimal,
    price: Decimal,
    side: Side,
) -> binance_types::BinanceOrderRequest {
    binance_types::BinanceOrderRequest {
        symbol: pair.to_string(),
        side: side_to_binance(side).to_string(),
        order_type: "LIMIT".to_string(),
        quantity: quantity.to_string(),
        price: Some(price.to_string()),
        time_in_force: Some("GTC".to_string()),
        stop_price: None,
    }
}

pub fn market_order_request(
    pair: &str,
    quantity: Decimal,
    side: Side,
) -> binance_types::BinanceOrderRequest {
    binance_types::BinanceOrderRequest {
        symbol: pair.to_string(),
        side: side_to_binance(side).to_string(),
        order_type: "MARKET".to_string(),
        quantity: quantity.to_string(),
        price: None,
        time_in_force: None,
        stop_price: None,
    }
}

pub fn stop_loss_order_request(
    pair: &str,
    quantity: Decimal,
    price: Decimal,
    stop_price: Decimal,
    side: Side,
) -> binance_types::BinanceOrderRequest {
    binance_types::BinanceOrderRequest {
        symbol: pair.to_string(),
        side: side_to_binance(side).to_string(),
        order_type: "STOP_LOSS_LIMIT".to_string(),
        quantity: quantity.to_string(),
        price: Some(price.to_string()),
        time_in_force: Some("GTC".to_string()),
        stop_price: Some(stop_price.to_string()),
    }
}

pub fn convert_binance_balance(
    balance: binance_types::BinanceBalance,
) -> Result<Balance, ExchangeError> {
    Ok(Balance {
        available: check_non_negative("free", parse_decimal("free", &balance.free)?)?,
        frozen: check_non_negative("locked", parse_decimal("locked", &balance.locked)?)?,
        symbol: balance.asset,
    })
}

pub fn convert_binance_order(
    order: binance_types::BinanceOrder,
) -> Result<OrderResponse, ExchangeError> {
    let order_quantity = parse_decimal("origQty", &order.orig_qty)?;
    let filled_quantity = parse_decimal("executedQty", &order.executed_qty)?;
    check_fill(filled_quantity, order_quantity)?;

    let stop_price = match order.stop_price.as_deref() {
        Some(raw) => parse_decimal_or_zero("stopPrice", raw)?,
        None => Decimal::ZERO,
    };
    let transact_time = order
        .transact_time
        .or(order.update_time)
        .or(order.time)
        .map(|millis| millis_to_utc("transactTime", millis))
        .transpose()?;

    Ok(OrderResponse {
        order_id: order.order_id.to_string(),
        side: side_from_binance(&order.side)?,
        price: parse_decimal("price", &order.price)?,
        stop_price,
        order_quantity,
        filled_quantity,
        status: status_from_binance(&order.status)?,
        transact_time,
        pair: order.symbol,
    })
}

pub fn convert_binance_kline(kline: binance_types::BinanceKline) -> Result<KLine, ExchangeError> {
    let converted = KLine {
        open_time: millis_to_utc("openTime", kline.open_time)?,
        open: parse_decimal("open", &kline.open)?,
        high: parse_decimal("high", &kline.high)?,
        low: parse_decimal("low", &kline.low)?,
        close: parse_decimal("close", &kline.close)?,
        volume: parse_decimal("volume", &kline.volume)?,
        close_time: millis_to_utc("closeTime", kline.close_time)?,
    };
    check_kline(&converted)?;
    Ok(converted)
}

pub fn convert_binance_ticker(
    ticker: binance_types::BinanceTicker24h,
) -> Result<Ticker, ExchangeError> {
    check_ticker(Ticker {
        open_time: Some(millis_to_utc("openTime", ticker.open_time)?),
        close_time: Some(millis_to_utc("closeTime", ticker.close_time)?),
        open: parse_decimal("openPrice", &ticker.open_price)?,
        high: parse_decimal("highPrice", &ticker.high_price)?,
        low: parse_decimal("lowPrice", &ticker.low_price)?,
        last_price: parse_decimal("lastPrice", &ticker.last_price)?,
        last_qty: parse_decimal("lastQty", &ticker.last_qty)?,
        bid_price: parse_decimal("bidPrice", &ticker.bid_price)?,
        bid_qty: parse_decimal("bidQty", &ticker.bid_qty)?,
        ask_price: parse_decimal("askPrice", &ticker.ask_price)?,
        ask_qty: parse_decimal("askQty", &ticker.ask_qty)?,
        volume: parse_decimal("volume", &ticker.volume)?,
        previous_close_price: parse_decimal("prevClosePrice", &ticker.prev_close_price)?,
        weighted_avg_price: parse_decimal("weightedAvgPrice", &ticker.weighted_avg_price)?,
        price_change: parse_decimal("priceChange", &ticker.price_change)?,
        price_change_percent: parse_decimal("priceChangePercent", &ticker.price_change_percent)?,
        pair: ticker.symbol,
    })
}

fn convert_levels(levels: Vec<[String; 2]>) -> Result<Vec<OrderBookEntry>, ExchangeError> {
    levels
        .into_iter()
        .map(|[price, quantity]| {
            Ok(OrderBookEntry {
                price: parse_decimal("price", &price)?,
                quantity: parse_decimal("quantity", &quantity)?,
            })
        })
        .collect()
}

pub fn convert_binance_depth(depth: binance_types::BinanceDepth) -> Result<OrderBook, ExchangeError> {
    Ok(OrderBook {
        bids: convert_levels(depth.bids)?,
        asks: convert_levels(depth.asks)?,
    })
}

pub fn convert_binance_price(
    price: binance_types::BinancePriceTicker,
) -> Result<PairPrice, ExchangeError> {
    Ok(PairPrice {
        price: parse_decimal("price", &price.price)?,
        pair: price.symbol,
    })
}

pub fn convert_binance_deposit_address(
    address: binance_types::BinanceDepositAddress,
) -> DepositAddress {
    DepositAddress {
        symbol: address.coin,
        address: address.address,
        tag: Some(address.tag).filter(|tag| !tag.is_empty()),
    }
}
