use crate::core::errors::ClientError;
use crate::exchanges::bittrex::types::{
    BittrexBalance, BittrexDepositAddress, BittrexMarket, BittrexMarketSummary, BittrexOrder,
    BittrexOrderAccepted, BittrexOrderBook, BittrexOrderRequest,
};
use async_trait::async_trait;

/// Bittrex REST endpoints the connector relies on
///
/// Markets use Bittrex's quote-first dashed form (`BTC-LTC`).
#[async_trait]
pub trait BittrexClient: Send + Sync {
    async fn get_markets(&self) -> Result<Vec<BittrexMarket>, ClientError>;

    async fn get_market_summaries(&self) -> Result<Vec<BittrexMarketSummary>, ClientError>;

    async fn get_market_summary(&self, market: &str) -> Result<BittrexMarketSummary, ClientError>;

    /// Both sides of the book
    async fn get_order_book(&self, market: &str) -> Result<BittrexOrderBook, ClientError>;

    async fn get_balances(&self) -> Result<Vec<BittrexBalance>, ClientError>;

    async fn get_deposit_address(&self, currency: &str)
        -> Result<BittrexDepositAddress, ClientError>;

    /// Returns only the new order's uuid
    async fn place_order(
        &self,
        request: &BittrexOrderRequest,
    ) -> Result<BittrexOrderAccepted, ClientError>;

    /// `false` when Bittrex refused to cancel
    async fn cancel_order(&self, uuid: &str) -> Result<bool, ClientError>;

    async fn get_order(&self, uuid: &str) -> Result<BittrexOrder, ClientError>;

    async fn get_order_history(&self, market: &str) -> Result<Vec<BittrexOrder>, ClientError>;

    async fn get_open_orders(&self, market: &str) -> Result<Vec<BittrexOrder>, ClientError>;
}
