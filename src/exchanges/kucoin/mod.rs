pub mod builder;
pub mod client;
pub mod connector;
pub mod conversions;
pub mod types;

pub use builder::build_connector;
pub use client::KuCoinClient;
pub use connector::KuCoinConnector;
pub use types::{
    KuCoin24hStats, KuCoinAccount, KuCoinAllTickers, KuCoinCandle, KuCoinDepositAddress,
    KuCoinOrder, KuCoinOrderAccepted, KuCoinOrderBook, KuCoinOrderRequest, KuCoinSymbol,
    KuCoinTicker, KuCoinTickerItem,
};
