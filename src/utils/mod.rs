pub mod exchange_factory;

pub use exchange_factory::{ClientFactory, ExchangeClient, ExchangeFactory};
