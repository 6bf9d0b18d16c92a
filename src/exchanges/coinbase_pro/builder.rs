use crate::core::errors::{ClientResultExt, ExchangeError};
use crate::core::symbols::PairResolver;
use crate::core::types::Exchange;
use crate::exchanges::coinbase_pro::{client::CoinbaseProClient, connector::CoinbaseProConnector};
use std::sync::Arc;
use tracing::debug;

/// Build a Coinbase Pro connector, loading the product list for pair resolution
///
/// The passphrase check happens before the client exists, see
/// `ApiInformation::validate_for`.
pub async fn build_connector(
    client: Arc<dyn CoinbaseProClient>,
) -> Result<CoinbaseProConnector, ExchangeError> {
    let products = client
        .get_products()
        .await
        .upstream(Exchange::CoinbasePro)?;
    let symbols: Vec<String> = products.into_iter().map(|product| product.id).collect();
    let resolver = PairResolver::build(&symbols)?;
    debug!(exchange = "coinbase_pro", pairs = resolver.len(), "pair resolver ready");
    Ok(CoinbaseProConnector::new(client, resolver))
}
