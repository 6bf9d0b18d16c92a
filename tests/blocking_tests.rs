mod common;

use common::{credentials, FakeFactory};
use exchangehub::{BlockingExchangeHub, Exchange, ExchangeError, Operation, Side};
use rust_decimal_macros::dec;

#[test]
fn test_blocking_hub_delegates_to_async_hub() {
    let factory = FakeFactory::new();
    let hub = BlockingExchangeHub::new(Exchange::Binance, &credentials(), factory.clone()).unwrap();

    assert_eq!(hub.exchange(), Exchange::Binance);
    assert!(hub.supports(Operation::PlaceStopLossOrder));

    let markets = hub.list_markets().unwrap();
    assert_eq!(markets, vec!["ETHBTC", "LTCBTC", "BNBUSDT"]);

    let order = hub
        .place_limit_order("ETH-BTC", dec!(2), dec!(0.05), Side::Buy)
        .unwrap();
    assert_eq!(order.pair, "ETHBTC");
    assert_eq!(order.order_id, "42");
    assert_eq!(order.order_quantity, dec!(2));
}

#[test]
fn test_blocking_hub_reload() {
    let factory = FakeFactory::new();
    let mut hub = BlockingExchangeHub::new(Exchange::Binance, &credentials(), factory.clone()).unwrap();
    hub.list_markets().unwrap();

    hub.reload(Exchange::KuCoin, &credentials()).unwrap();
    assert_eq!(hub.exchange(), Exchange::KuCoin);
    assert!(hub.list_markets().unwrap().contains(&"ETH-BTC".to_string()));

    let err = hub
        .place_stop_loss_order("ETH-BTC", dec!(1), dec!(0.03), dec!(0.031), Side::Sell)
        .unwrap_err();
    assert!(err.is_unsupported());
}

#[test]
fn test_blocking_hub_gates_unsupported_exchanges() {
    let factory = FakeFactory::new();
    let result = BlockingExchangeHub::new(Exchange::CoinEx, &credentials(), factory.clone());
    assert!(matches!(result, Err(ExchangeError::UnsupportedExchange(Exchange::CoinEx))));
    assert_eq!(factory.created(), 0);
}
