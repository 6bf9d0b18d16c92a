pub mod blocking;
pub mod core;
pub mod exchanges;
pub mod hub;
pub mod utils;

pub use blocking::BlockingExchangeHub;
pub use crate::core::{
    config::ApiInformation,
    errors::{ClientError, ExchangeError},
    traits::{AccountInfo, ExchangeAdapter, MarketDataSource, OrderPlacer},
    types::*,
};
pub use exchanges::binance::BinanceConnector;
pub use exchanges::bittrex::BittrexConnector;
pub use exchanges::coinbase_pro::CoinbaseProConnector;
pub use exchanges::kucoin::KuCoinConnector;
pub use hub::ExchangeHub;
pub use utils::exchange_factory::{ClientFactory, ExchangeClient, ExchangeFactory};
