use crate::core::{
    config::{ApiInformation, ConfigError},
    errors::{ClientError, ClientResultExt, ExchangeError},
    traits::ExchangeAdapter,
    types::{Exchange, Operation},
};
use crate::exchanges::{
    binance::{self, BinanceClient},
    bittrex::{self, BittrexClient},
    coinbase_pro::{self, CoinbaseProClient},
    kucoin::{self, KuCoinClient},
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, instrument};

/// An authenticated client for one exchange
#[derive(Clone)]
pub enum ExchangeClient {
    Binance(Arc<dyn BinanceClient>),
    Bittrex(Arc<dyn BittrexClient>),
    CoinbasePro(Arc<dyn CoinbaseProClient>),
    KuCoin(Arc<dyn KuCoinClient>),
}

impl ExchangeClient {
    pub const fn exchange(&self) -> Exchange {
        match self {
            Self::Binance(_) => Exchange::Binance,
            Self::Bittrex(_) => Exchange::Bittrex,
            Self::CoinbasePro(_) => Exchange::CoinbasePro,
            Self::KuCoin(_) => Exchange::KuCoin,
        }
    }
}

impl std::fmt::Debug for ExchangeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ExchangeClient").field(&self.exchange()).finish()
    }
}

/// Turns an exchange selector and credentials into a network client
///
/// Implemented by the application over its HTTP SDK of choice.
#[async_trait]
pub trait ClientFactory: Send + Sync {
    async fn create(
        &self,
        exchange: Exchange,
        credentials: &ApiInformation,
    ) -> Result<ExchangeClient, ClientError>;
}

/// Factory for creating exchange adapters
pub struct ExchangeFactory;

impl ExchangeFactory {
    /// Exchanges with an adapter implemented
    pub const fn is_supported(exchange: Exchange) -> bool {
        matches!(
            exchange,
            Exchange::Binance | Exchange::Bittrex | Exchange::CoinbasePro | Exchange::KuCoin
        )
    }

    pub fn supported_exchanges() -> Vec<Exchange> {
        Exchange::all()
            .into_iter()
            .filter(|exchange| Self::is_supported(*exchange))
            .collect()
    }

    /// Static capability gaps of an exchange's adapter
    pub fn unsupported_operations(
        exchange: Exchange,
    ) -> Result<&'static [(Operation, &'static str)], ExchangeError> {
        match exchange {
            Exchange::Binance => Ok(binance::connector::UNSUPPORTED),
            Exchange::Bittrex => Ok(bittrex::connector::UNSUPPORTED),
            Exchange::CoinbasePro => Ok(coinbase_pro::connector::UNSUPPORTED),
            Exchange::KuCoin => Ok(kucoin::connector::UNSUPPORTED),
            Exchange::CoinEx | Exchange::Switcheo => Err(ExchangeError::UnsupportedExchange(exchange)),
        }
    }

    /// Create the adapter for `exchange`
    ///
    /// Unsupported exchanges and incomplete credentials are rejected before
    /// the client factory is asked for anything.
    #[instrument(skip(credentials, factory))]
    pub async fn create_adapter(
        exchange: Exchange,
        credentials: &ApiInformation,
        factory: &dyn ClientFactory,
    ) -> Result<Box<dyn ExchangeAdapter>, ExchangeError> {
        if !Self::is_supported(exchange) {
            return Err(ExchangeError::UnsupportedExchange(exchange));
        }
        credentials.validate_for(exchange)?;

        let client = factory.create(exchange, credentials).await.upstream(exchange)?;
        if client.exchange() != exchange {
            return Err(ConfigError::ClientMismatch {
                expected: exchange,
                actual: client.exchange(),
            }
            .into());
        }
        debug!(%exchange, "client created");

        let adapter: Box<dyn ExchangeAdapter> = match client {
            ExchangeClient::Binance(client) => Box::new(binance::build_connector(client).await?),
            ExchangeClient::Bittrex(client) => Box::new(bittrex::build_connector(client).await?),
            ExchangeClient::CoinbasePro(client) => {
                Box::new(coinbase_pro::build_connector(client).await?)
            }
            ExchangeClient::KuCoin(client) => Box::new(kucoin::build_connector(client).await?),
        };
        Ok(adapter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coinex_and_switcheo_are_gated() {
        assert!(!ExchangeFactory::is_supported(Exchange::CoinEx));
        assert!(!ExchangeFactory::is_supported(Exchange::Switcheo));
        assert_eq!(ExchangeFactory::supported_exchanges().len(), 4);
        assert!(matches!(
            ExchangeFactory::unsupported_operations(Exchange::Switcheo),
            Err(ExchangeError::UnsupportedExchange(Exchange::Switcheo))
        ));
    }

    #[test]
    fn test_capability_tables_match_matrix() {
        let ops = |exchange| -> Vec<Operation> {
            ExchangeFactory::unsupported_operations(exchange)
                .unwrap()
                .iter()
                .map(|(operation, _)| *operation)
                .collect()
        };
        assert!(ops(Exchange::Binance).is_empty());
        assert_eq!(
            ops(Exchange::Bittrex),
            vec![Operation::PlaceStopLossOrder, Operation::GetKLines]
        );
        assert_eq!(ops(Exchange::KuCoin), vec![Operation::PlaceStopLossOrder]);
        assert_eq!(ops(Exchange::CoinbasePro).len(), 4);
    }
}
