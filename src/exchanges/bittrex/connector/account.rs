use crate::core::{
    errors::{ClientResultExt, ExchangeError},
    types::{Balance, DepositAddress, Exchange},
};
use crate::exchanges::bittrex::{
    client::BittrexClient,
    conversions::{convert_bittrex_balance, convert_bittrex_deposit_address},
};
use std::sync::Arc;
use tracing::instrument;

/// Account implementation for Bittrex
pub struct Account {
    client: Arc<dyn BittrexClient>,
}

impl Account {
    pub fn new(client: &Arc<dyn BittrexClient>) -> Self {
        Self {
            client: Arc::clone(client),
        }
    }

    #[instrument(skip(self), fields(exchange = "bittrex"))]
    pub async fn get_balances(&self) -> Result<Vec<Balance>, ExchangeError> {
        let balances = self.client.get_balances().await.upstream(Exchange::Bittrex)?;
        balances.into_iter().map(convert_bittrex_balance).collect()
    }

    #[instrument(skip(self), fields(exchange = "bittrex"))]
    pub async fn get_deposit_address(&self, symbol: &str) -> Result<DepositAddress, ExchangeError> {
        let address = self
            .client
            .get_deposit_address(symbol)
            .await
            .upstream(Exchange::Bittrex)?;
        Ok(convert_bittrex_deposit_address(address))
    }
}
