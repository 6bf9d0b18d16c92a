use crate::core::errors::ExchangeError;
use crate::core::types::Exchange;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::env;

/// Credentials handed to an exchange client
///
/// `api_extra` carries the trading passphrase some exchanges (Coinbase Pro)
/// require next to key and secret.
#[derive(Debug, Clone)]
pub struct ApiInformation {
    pub api_key: Secret<String>,
    pub api_secret: Secret<String>,
    pub api_extra: Secret<String>,
}

// Never expose secrets in serialization
impl Serialize for ApiInformation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("ApiInformation", 3)?;
        state.serialize_field("api_key", "[REDACTED]")?;
        state.serialize_field("api_secret", "[REDACTED]")?;
        state.serialize_field("api_extra", "[REDACTED]")?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for ApiInformation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ApiInformationHelper {
            api_key: String,
            api_secret: String,
            #[serde(default)]
            api_extra: String,
        }

        let helper = ApiInformationHelper::deserialize(deserializer)?;
        Ok(Self::new(helper.api_key, helper.api_secret).with_extra(helper.api_extra))
    }
}

impl ApiInformation {
    #[must_use]
    pub fn new(api_key: String, api_secret: String) -> Self {
        Self {
            api_key: Secret::new(api_key),
            api_secret: Secret::new(api_secret),
            api_extra: Secret::new(String::new()),
        }
    }

    /// Set the passphrase
    #[must_use]
    pub fn with_extra(mut self, api_extra: String) -> Self {
        self.api_extra = Secret::new(api_extra);
        self
    }

    /// Read credentials from environment variables
    ///
    /// Expected environment variables:
    /// - `{PREFIX}_API_KEY` (e.g., `KUCOIN_API_KEY`)
    /// - `{PREFIX}_API_SECRET`
    /// - `{PREFIX}_API_EXTRA` (optional)
    pub fn from_env(prefix: &str) -> Result<Self, ConfigError> {
        let prefix = prefix.to_uppercase();
        let api_key_var = format!("{}_API_KEY", prefix);
        let api_secret_var = format!("{}_API_SECRET", prefix);
        let api_extra_var = format!("{}_API_EXTRA", prefix);

        let api_key = env::var(&api_key_var)
            .map_err(|_| ConfigError::MissingEnvironmentVariable(api_key_var))?;
        let api_secret = env::var(&api_secret_var)
            .map_err(|_| ConfigError::MissingEnvironmentVariable(api_secret_var))?;
        let api_extra = env::var(&api_extra_var).unwrap_or_default();

        Ok(Self::new(api_key, api_secret).with_extra(api_extra))
    }

    /// Like `from_env`, after loading `.env` if it exists
    #[cfg(feature = "env-file")]
    pub fn from_env_file(prefix: &str) -> Result<Self, ConfigError> {
        Self::from_env_file_with_path(prefix, ".env")
    }

    #[cfg(feature = "env-file")]
    pub fn from_env_file_with_path(prefix: &str, env_file_path: &str) -> Result<Self, ConfigError> {
        match dotenv::from_path(env_file_path) {
            Ok(()) => {}
            // Missing file is fine, system variables still apply
            Err(dotenv::Error::Io(io_err)) if io_err.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(ConfigError::InvalidConfiguration(format!(
                    "Failed to load .env file '{}': {}",
                    env_file_path, e
                )));
            }
        }

        Self::from_env(prefix)
    }

    /// Empty credentials, enough for public market data
    #[must_use]
    pub fn read_only() -> Self {
        Self::new(String::new(), String::new())
    }

    pub fn has_credentials(&self) -> bool {
        !self.api_key.expose_secret().is_empty() && !self.api_secret.expose_secret().is_empty()
    }

    pub fn has_extra(&self) -> bool {
        !self.api_extra.expose_secret().is_empty()
    }

    /// Check the credentials carry everything the exchange needs
    pub fn validate_for(&self, exchange: Exchange) -> Result<(), ExchangeError> {
        if exchange.requires_passphrase() && !self.has_extra() {
            return Err(ExchangeError::MissingCredential("apiExtra"));
        }
        Ok(())
    }

    /// Get API key (use carefully - exposes secret)
    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    /// Get API secret (use carefully - exposes secret)
    pub fn api_secret(&self) -> &str {
        self.api_secret.expose_secret()
    }

    /// Get passphrase (use carefully - exposes secret)
    pub fn api_extra(&self) -> &str {
        self.api_extra.expose_secret()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvironmentVariable(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Client factory returned a {actual} client for {expected}")]
    ClientMismatch { expected: Exchange, actual: Exchange },

    #[error("Failed to start runtime: {0}")]
    Runtime(String),
}
