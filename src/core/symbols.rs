use crate::core::errors::ExchangeError;
use crate::core::types::{Exchange, PairNotation};
use std::collections::HashMap;

const SEPARATORS: [char; 3] = ['-', '_', '/'];

fn separator_free(symbol: &str) -> String {
    symbol.chars().filter(|c| !SEPARATORS.contains(c)).collect()
}

/// Maps canonical pairs (`ETHBTC`) onto an exchange's native market
/// symbols (`ETH-BTC`, `BTC-ETH`, ...)
///
/// Built once from the exchange's market list when the adapter is created.
#[derive(Debug, Clone, Default)]
pub struct PairResolver {
    by_key: HashMap<String, String>,
}

impl PairResolver {
    /// Resolver for exchanges whose symbols are already concatenated
    pub fn empty() -> Self {
        Self::default()
    }

    /// Index native symbols by their separator-free key
    ///
    /// Two different native symbols with the same key cannot be told apart
    /// and are rejected.
    pub fn build(native_symbols: &[String]) -> Result<Self, ExchangeError> {
        let mut by_key: HashMap<String, String> = HashMap::with_capacity(native_symbols.len());
        for native in native_symbols {
            let key = separator_free(native);
            match by_key.get(&key) {
                Some(existing) if existing == native => {}
                Some(existing) => {
                    return Err(ExchangeError::AmbiguousPair {
                        key,
                        existing: existing.clone(),
                        duplicate: native.clone(),
                    });
                }
                None => {
                    by_key.insert(key, native.clone());
                }
            }
        }
        Ok(Self { by_key })
    }

    /// Turn a caller pair into the symbol `exchange` expects
    ///
    /// Pairs that already contain a dash are passed through untouched on
    /// exchanges with mapped notation.
    pub fn canonicalize(&self, pair: &str, exchange: Exchange) -> Result<String, ExchangeError> {
        if pair.is_empty() {
            return Ok(String::new());
        }
        match exchange.pair_notation() {
            PairNotation::Concatenated => Ok(pair.replace('-', "")),
            PairNotation::Mapped if pair.contains('-') => Ok(pair.to_string()),
            PairNotation::Mapped => self
                .by_key
                .get(pair)
                .cloned()
                .ok_or_else(|| ExchangeError::UnknownPair(pair.to_string())),
        }
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_binance_strips_dashes() {
        let resolver = PairResolver::empty();
        assert_eq!(
            resolver.canonicalize("ETH-BTC", Exchange::Binance).unwrap(),
            "ETHBTC"
        );
        assert_eq!(
            resolver.canonicalize("ETHBTC", Exchange::Binance).unwrap(),
            "ETHBTC"
        );
    }

    #[test]
    fn test_empty_pair_stays_empty() {
        let resolver = PairResolver::build(&symbols(&["ETH-BTC"])).unwrap();
        assert_eq!(resolver.canonicalize("", Exchange::KuCoin).unwrap(), "");
    }

    #[test]
    fn test_mapped_lookup_uses_native_order() {
        // Bittrex lists quote first
        let resolver = PairResolver::build(&symbols(&["BTC-ETH", "USDT-BTC"])).unwrap();
        assert_eq!(
            resolver.canonicalize("BTCETH", Exchange::Bittrex).unwrap(),
            "BTC-ETH"
        );
        assert_eq!(
            resolver.canonicalize("USDTBTC", Exchange::Bittrex).unwrap(),
            "USDT-BTC"
        );
    }

    #[test]
    fn test_dashed_pair_passes_through() {
        let resolver = PairResolver::build(&symbols(&["ETH-BTC"])).unwrap();
        assert_eq!(
            resolver.canonicalize("FOO-BAR", Exchange::CoinbasePro).unwrap(),
            "FOO-BAR"
        );
    }

    #[test]
    fn test_unknown_pair_is_an_error() {
        let resolver = PairResolver::build(&symbols(&["ETH-BTC"])).unwrap();
        let err = resolver.canonicalize("XRPBTC", Exchange::KuCoin).unwrap_err();
        assert!(matches!(err, ExchangeError::UnknownPair(pair) if pair == "XRPBTC"));
    }

    #[test]
    fn test_colliding_symbols_are_rejected() {
        let err = PairResolver::build(&symbols(&["AB-C", "A-BC"])).unwrap_err();
        assert!(matches!(err, ExchangeError::AmbiguousPair { key, .. } if key == "ABC"));
    }

    #[test]
    fn test_repeated_symbol_is_not_a_collision() {
        let resolver = PairResolver::build(&symbols(&["ETH-BTC", "ETH-BTC"])).unwrap();
        assert_eq!(resolver.len(), 1);
    }
}
