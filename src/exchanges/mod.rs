pub mod binance;
pub mod bittrex;
pub mod coinbase_pro;
pub mod kucoin;
