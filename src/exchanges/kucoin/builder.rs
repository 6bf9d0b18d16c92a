use crate::core::errors::{ClientResultExt, ExchangeError};
use crate::core::symbols::PairResolver;
use crate::core::types::Exchange;
use crate::exchanges::kucoin::{client::KuCoinClient, connector::KuCoinConnector};
use std::sync::Arc;
use tracing::debug;

/// Build a KuCoin connector, loading the symbol list for pair resolution
pub async fn build_connector(
    client: Arc<dyn KuCoinClient>,
) -> Result<KuCoinConnector, ExchangeError> {
    let symbols = client.get_symbols().await.upstream(Exchange::KuCoin)?;
    let symbols: Vec<String> = symbols.into_iter().map(|symbol| symbol.symbol).collect();
    let resolver = PairResolver::build(&symbols)?;
    debug!(exchange = "kucoin", pairs = resolver.len(), "pair resolver ready");
    Ok(KuCoinConnector::new(client, resolver))
}
