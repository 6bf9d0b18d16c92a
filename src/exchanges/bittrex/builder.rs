use crate::core::errors::{ClientResultExt, ExchangeError};
use crate::core::symbols::PairResolver;
use crate::core::types::Exchange;
use crate::exchanges::bittrex::{client::BittrexClient, connector::BittrexConnector};
use std::sync::Arc;
use tracing::debug;

/// Build a Bittrex connector, loading the market list for pair resolution
pub async fn build_connector(
    client: Arc<dyn BittrexClient>,
) -> Result<BittrexConnector, ExchangeError> {
    let markets = client.get_markets().await.upstream(Exchange::Bittrex)?;
    let symbols: Vec<String> = markets.into_iter().map(|market| market.market_name).collect();
    let resolver = PairResolver::build(&symbols)?;
    debug!(exchange = "bittrex", pairs = resolver.len(), "pair resolver ready");
    Ok(BittrexConnector::new(client, resolver))
}
