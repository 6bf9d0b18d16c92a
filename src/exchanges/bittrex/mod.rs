pub mod builder;
pub mod client;
pub mod connector;
pub mod conversions;
pub mod types;

pub use builder::build_connector;
pub use client::BittrexClient;
pub use connector::BittrexConnector;
pub use types::{
    BittrexBalance, BittrexBookLevel, BittrexDepositAddress, BittrexMarket, BittrexMarketSummary,
    BittrexOrder, BittrexOrderAccepted, BittrexOrderBook, BittrexOrderRequest,
};
