use crate::core::errors::ExchangeError;
use crate::exchanges::binance::{client::BinanceClient, connector::BinanceConnector};
use std::sync::Arc;
use tracing::debug;

/// Build a Binance connector over an already authenticated client
///
/// Makes no client calls: Binance pairs resolve without the market list.
pub async fn build_connector(
    client: Arc<dyn BinanceClient>,
) -> Result<BinanceConnector, ExchangeError> {
    debug!(exchange = "binance", "building connector");
    Ok(BinanceConnector::new(client))
}
