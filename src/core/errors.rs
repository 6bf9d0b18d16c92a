use crate::core::types::{Exchange, Operation};
use thiserror::Error;
use tracing::warn;

/// Error produced by an exchange's client library
pub type ClientError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("{operation} is not supported on {exchange}: {reason}")]
    UnsupportedOperation {
        exchange: Exchange,
        operation: Operation,
        reason: &'static str,
    },

    #[error("Exchange {0} is not supported yet")]
    UnsupportedExchange(Exchange),

    #[error("Unknown pair: {0}")]
    UnknownPair(String),

    #[error("Ambiguous pair key {key}: both {existing} and {duplicate} map to it")]
    AmbiguousPair {
        key: String,
        existing: String,
        duplicate: String,
    },

    #[error("Missing credential: {0}")]
    MissingCredential(&'static str),

    #[error("{exchange} request failed: {cause}")]
    UpstreamFailure {
        exchange: Exchange,
        #[source]
        cause: ClientError,
    },

    /// A composite operation failed after its state-changing step succeeded
    #[error("{exchange} {operation} partially completed ({detail}): {cause}")]
    PartialSideEffect {
        exchange: Exchange,
        operation: Operation,
        detail: String,
        #[source]
        cause: ClientError,
    },

    #[error("Malformed response field {field}: {value:?}")]
    MalformedResponse { field: &'static str, value: String },

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] crate::core::config::ConfigError),
}

impl ExchangeError {
    pub const fn is_unsupported(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedOperation { .. } | Self::UnsupportedExchange(_)
        )
    }

    /// Upstream failure for a request the exchange answered but refused
    pub(crate) fn refused(exchange: Exchange, message: String) -> Self {
        Self::UpstreamFailure {
            exchange,
            cause: message.into(),
        }
    }

    pub(crate) fn malformed(field: &'static str, value: impl ToString) -> Self {
        Self::MalformedResponse {
            field,
            value: value.to_string(),
        }
    }
}

/// Lifts client library failures into `ExchangeError`
pub trait ClientResultExt<T> {
    fn upstream(self, exchange: Exchange) -> Result<T, ExchangeError>;

    /// For the follow-up step of a composite operation whose first step
    /// already changed exchange state
    fn after_side_effect<F>(
        self,
        exchange: Exchange,
        operation: Operation,
        detail: F,
    ) -> Result<T, ExchangeError>
    where
        F: FnOnce() -> String;
}

impl<T> ClientResultExt<T> for Result<T, ClientError> {
    fn upstream(self, exchange: Exchange) -> Result<T, ExchangeError> {
        self.map_err(|cause| ExchangeError::UpstreamFailure { exchange, cause })
    }

    fn after_side_effect<F>(
        self,
        exchange: Exchange,
        operation: Operation,
        detail: F,
    ) -> Result<T, ExchangeError>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|cause| {
            let detail = detail();
            warn!(
                exchange = exchange.as_str(),
                %operation,
                %detail,
                error = %cause,
                "follow-up request failed after the order was accepted"
            );
            ExchangeError::PartialSideEffect {
                exchange,
                operation,
                detail,
                cause,
            }
        })
    }
}
