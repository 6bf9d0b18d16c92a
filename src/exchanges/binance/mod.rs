pub mod builder;
pub mod client;
pub mod connector;
pub mod conversions;
pub mod types;

pub use builder::build_connector;
pub use client::BinanceClient;
pub use connector::BinanceConnector;
pub use types::{
    BinanceAccountInfo, BinanceBalance, BinanceDepositAddress, BinanceDepth, BinanceExchangeInfo,
    BinanceKline, BinanceMarket, BinanceOrder, BinanceOrderRequest, BinancePriceTicker,
    BinanceTicker24h,
};
