use crate::core::{
    errors::{ClientResultExt, ExchangeError},
    types::{Balance, Exchange},
};
use crate::exchanges::coinbase_pro::{
    client::CoinbaseProClient, conversions::convert_coinbase_account,
};
use std::sync::Arc;
use tracing::instrument;

/// Account implementation for Coinbase Pro
pub struct Account {
    client: Arc<dyn CoinbaseProClient>,
}

impl Account {
    pub fn new(client: &Arc<dyn CoinbaseProClient>) -> Self {
        Self {
            client: Arc::clone(client),
        }
    }

    /// One balance per currency account
    #[instrument(skip(self), fields(exchange = "coinbase_pro"))]
    pub async fn get_balances(&self) -> Result<Vec<Balance>, ExchangeError> {
        let accounts = self
            .client
            .get_accounts()
            .await
            .upstream(Exchange::CoinbasePro)?;
        accounts.into_iter().map(convert_coinbase_account).collect()
    }
}
