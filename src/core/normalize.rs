//! Shared helpers for turning exchange payloads into canonical values.
//!
//! Every adapter's `conversions.rs` goes through these so that status
//! inference, number parsing and timestamp handling behave the same
//! across exchanges.

use crate::core::errors::ExchangeError;
use crate::core::types::{KLine, OrderResponse, OrderStatus, Side, Ticker};
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Status for exchanges that only report quantities and a cancel flag
///
/// A canceled order stays canceled even if it was partly filled. An
/// untouched order is open even when its quantity is zero.
pub fn infer_order_status(quantity: Decimal, remaining: Decimal, canceled: bool) -> OrderStatus {
    if canceled {
        OrderStatus::Canceled
    } else if remaining == quantity {
        OrderStatus::Open
    } else if remaining > Decimal::ZERO {
        OrderStatus::PartialFill
    } else {
        OrderStatus::Filled
    }
}

pub fn parse_decimal(field: &'static str, raw: &str) -> Result<Decimal, ExchangeError> {
    Decimal::from_str(raw.trim()).map_err(|_| ExchangeError::malformed(field, raw))
}

/// Like `parse_decimal`, with an empty string read as zero
pub fn parse_decimal_or_zero(field: &'static str, raw: &str) -> Result<Decimal, ExchangeError> {
    if raw.trim().is_empty() {
        Ok(Decimal::ZERO)
    } else {
        parse_decimal(field, raw)
    }
}

pub fn millis_to_utc(field: &'static str, millis: i64) -> Result<DateTime<Utc>, ExchangeError> {
    Utc.timestamp_millis_opt(millis)
        .single()
        .ok_or_else(|| ExchangeError::malformed(field, millis))
}

/// Parse an ISO-8601 timestamp; values without an offset are taken as UTC
pub fn parse_timestamp(field: &'static str, raw: &str) -> Result<DateTime<Utc>, ExchangeError> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|_| ExchangeError::malformed(field, raw))
}

pub fn parse_optional_timestamp(
    field: &'static str,
    raw: Option<&str>,
) -> Result<Option<DateTime<Utc>>, ExchangeError> {
    raw.filter(|value| !value.is_empty())
        .map(|value| parse_timestamp(field, value))
        .transpose()
}

pub fn check_non_negative(field: &'static str, value: Decimal) -> Result<Decimal, ExchangeError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ExchangeError::malformed(field, value));
    }
    Ok(value)
}

/// Filled quantity must lie within `0..=quantity`
pub fn check_fill(filled: Decimal, quantity: Decimal) -> Result<(), ExchangeError> {
    check_non_negative("filled_quantity", filled)?;
    if filled > quantity {
        return Err(ExchangeError::malformed(
            "filled_quantity",
            format!("{} of {}", filled, quantity),
        ));
    }
    Ok(())
}

pub fn check_kline(kline: &KLine) -> Result<(), ExchangeError> {
    if kline.close_time <= kline.open_time {
        return Err(ExchangeError::malformed(
            "close_time",
            kline.close_time.to_rfc3339(),
        ));
    }
    let body_high = kline.open.max(kline.close);
    let body_low = kline.open.min(kline.close);
    if kline.high < body_high || kline.low > body_low {
        return Err(ExchangeError::malformed(
            "high/low",
            format!("{}/{}", kline.high, kline.low),
        ));
    }
    Ok(())
}

pub fn check_ticker(ticker: Ticker) -> Result<Ticker, ExchangeError> {
    if ticker.high < ticker.low {
        return Err(ExchangeError::malformed(
            "high/low",
            format!("{}/{}", ticker.high, ticker.low),
        ));
    }
    Ok(ticker)
}

/// Percentage move from `open` to `last`, zero when there is no open price
pub fn price_change_percent(open: Decimal, last: Decimal) -> Decimal {
    if open.is_zero() {
        return Decimal::ZERO;
    }
    ((last - open) / open * Decimal::ONE_HUNDRED).round_dp(4)
}

/// Response for a cancel the exchange only acknowledged with yes/no
///
/// Quantities and prices are not reported and stay zero.
pub fn cancel_acknowledgement(pair: &str, order_id: &str, side: Side) -> OrderResponse {
    OrderResponse {
        pair: pair.to_string(),
        order_id: order_id.to_string(),
        side,
        price: Decimal::ZERO,
        stop_price: Decimal::ZERO,
        order_quantity: Decimal::ZERO,
        filled_quantity: Decimal::ZERO,
        status: OrderStatus::Canceled,
        transact_time: Some(Utc::now()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use rust_decimal_macros::dec;

    #[test]
    fn test_status_inference() {
        assert_eq!(infer_order_status(dec!(5), dec!(5), false), OrderStatus::Open);
        assert_eq!(
            infer_order_status(dec!(5), dec!(2), false),
            OrderStatus::PartialFill
        );
        assert_eq!(infer_order_status(dec!(5), dec!(0), false), OrderStatus::Filled);
        assert_eq!(
            infer_order_status(dec!(5), dec!(2), true),
            OrderStatus::Canceled
        );
        assert_eq!(infer_order_status(dec!(0), dec!(0), false), OrderStatus::Open);
        assert_eq!(
            infer_order_status(dec!(10), dec!(12), false),
            OrderStatus::PartialFill
        );
        assert_eq!(infer_order_status(dec!(5), dec!(-1), false), OrderStatus::Filled);
    }

    #[test]
    fn test_decimal_parsing_keeps_precision() {
        assert_eq!(
            parse_decimal("price", "0.00000001").unwrap(),
            dec!(0.00000001)
        );
        assert!(matches!(
            parse_decimal("price", "abc"),
            Err(ExchangeError::MalformedResponse { field: "price", .. })
        ));
        assert_eq!(parse_decimal_or_zero("price", "").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_timestamps_with_and_without_offset() {
        let with_offset = parse_timestamp("time", "2019-01-02T03:04:05.123Z").unwrap();
        let naive = parse_timestamp("time", "2019-01-02T03:04:05.123").unwrap();
        assert_eq!(with_offset, naive);
        assert_eq!(with_offset.year(), 2019);
        assert!(parse_timestamp("time", "yesterday").is_err());
        assert_eq!(parse_optional_timestamp("time", Some("")).unwrap(), None);
    }

    #[test]
    fn test_millis_conversion() {
        let time = millis_to_utc("time", 1_546_300_800_000).unwrap();
        assert_eq!(time.to_rfc3339(), "2019-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_fill_bounds() {
        assert!(check_fill(dec!(1), dec!(2)).is_ok());
        assert!(check_fill(dec!(2), dec!(2)).is_ok());
        assert!(check_fill(dec!(3), dec!(2)).is_err());
        assert!(check_fill(dec!(-1), dec!(2)).is_err());
    }

    #[test]
    fn test_kline_shape() {
        let open_time = millis_to_utc("t", 0).unwrap();
        let mut kline = KLine {
            open_time,
            open: dec!(10),
            high: dec!(12),
            low: dec!(9),
            close: dec!(11),
            volume: dec!(100),
            close_time: open_time + chrono::Duration::minutes(1),
        };
        assert!(check_kline(&kline).is_ok());

        kline.high = dec!(10.5);
        assert!(check_kline(&kline).is_err());

        kline.high = dec!(12);
        kline.close_time = open_time;
        assert!(check_kline(&kline).is_err());
    }

    #[test]
    fn test_ticker_high_low() {
        let ticker = Ticker {
            high: dec!(2),
            low: dec!(1),
            ..Ticker::default()
        };
        assert!(check_ticker(ticker.clone()).is_ok());

        let inverted = Ticker {
            high: dec!(1),
            low: dec!(2),
            ..ticker
        };
        assert!(matches!(
            check_ticker(inverted),
            Err(ExchangeError::MalformedResponse { field: "high/low", .. })
        ));
    }

    #[test]
    fn test_price_change_percent() {
        assert_eq!(price_change_percent(dec!(100), dec!(110)), dec!(10));
        assert_eq!(price_change_percent(Decimal::ZERO, dec!(110)), Decimal::ZERO);
    }
}
