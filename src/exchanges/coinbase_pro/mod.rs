pub mod builder;
pub mod client;
pub mod connector;
pub mod conversions;
pub mod types;

pub use builder::build_connector;
pub use client::CoinbaseProClient;
pub use connector::CoinbaseProConnector;
pub use types::{
    CoinbaseAccount, CoinbaseBookLevel, CoinbaseOrder, CoinbaseOrderBook, CoinbaseOrderRequest,
    CoinbaseProduct, CoinbaseProductStats, CoinbaseProductTicker,
};
