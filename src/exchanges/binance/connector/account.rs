use crate::core::{
    errors::{ClientResultExt, ExchangeError},
    types::{Balance, DepositAddress, Exchange},
};
use crate::exchanges::binance::{
    client::BinanceClient,
    conversions::{convert_binance_balance, convert_binance_deposit_address},
};
use std::sync::Arc;
use tracing::instrument;

/// Account implementation for Binance
pub struct Account {
    client: Arc<dyn BinanceClient>,
}

impl Account {
    pub fn new(client: &Arc<dyn BinanceClient>) -> Self {
        Self {
            client: Arc::clone(client),
        }
    }

    /// Balances with a non-zero free or locked amount
    #[instrument(skip(self), fields(exchange = "binance"))]
    pub async fn get_balances(&self) -> Result<Vec<Balance>, ExchangeError> {
        let account = self.client.account().await.upstream(Exchange::Binance)?;

        let mut balances = Vec::with_capacity(account.balances.len());
        for balance in account.balances {
            let balance = convert_binance_balance(balance)?;
            if !balance.total().is_zero() {
                balances.push(balance);
            }
        }
        Ok(balances)
    }

    #[instrument(skip(self), fields(exchange = "binance"))]
    pub async fn get_deposit_address(&self, symbol: &str) -> Result<DepositAddress, ExchangeError> {
        let address = self
            .client
            .deposit_address(symbol)
            .await
            .upstream(Exchange::Binance)?;
        Ok(convert_binance_deposit_address(address))
    }
}
