use crate::core::{
    errors::{ClientResultExt, ExchangeError},
    types::{Balance, DepositAddress, Exchange},
};
use crate::exchanges::kucoin::{
    client::KuCoinClient,
    conversions::{convert_kucoin_account, convert_kucoin_deposit_address, TRADE_ACCOUNT},
};
use std::sync::Arc;
use tracing::instrument;

/// Account implementation for KuCoin
pub struct Account {
    client: Arc<dyn KuCoinClient>,
}

impl Account {
    pub fn new(client: &Arc<dyn KuCoinClient>) -> Self {
        Self {
            client: Arc::clone(client),
        }
    }

    #[instrument(skip(self), fields(exchange = "kucoin"))]
    pub async fn get_balances(&self) -> Result<Vec<Balance>, ExchangeError> {
        let accounts = self.client.get_accounts().await.upstream(Exchange::KuCoin)?;
        accounts
            .into_iter()
            .filter(|account| account.account_type == TRADE_ACCOUNT)
            .map(convert_kucoin_account)
            .collect()
    }

    #[instrument(skip(self), fields(exchange = "kucoin"))]
    pub async fn get_deposit_address(&self, symbol: &str) -> Result<DepositAddress, ExchangeError> {
        let address = self
            .client
            .get_deposit_address(symbol)
            .await
            .upstream(Exchange::KuCoin)?;
        Ok(convert_kucoin_deposit_address(symbol, address))
    }
}
