use crate::core::{
    errors::{ClientError, ClientResultExt, ExchangeError},
    normalize::{cancel_acknowledgement, parse_decimal},
    types::{Exchange, Operation, OrderResponse, Side},
};
use crate::exchanges::kucoin::{
    client::KuCoinClient,
    conversions::{
        convert_kucoin_order, limit_order_request, side_to_kucoin, OPEN_ORDERS_PAGE_SIZE,
    },
    types::KuCoinOrderRequest,
};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

const EXCHANGE: Exchange = Exchange::KuCoin;

/// KuCoin trading implementation
///
/// Placement returns only the order id; orders are fetched back afterwards.
pub struct Trading {
    client: Arc<dyn KuCoinClient>,
}

impl Trading {
    pub fn new(client: &Arc<dyn KuCoinClient>) -> Self {
        Self {
            client: Arc::clone(client),
        }
    }

    async fn place_and_fetch(
        &self,
        request: KuCoinOrderRequest,
        operation: Operation,
    ) -> Result<OrderResponse, ExchangeError> {
        let accepted = self.client.place_order(&request).await.upstream(EXCHANGE)?;
        debug!(
            order_id = %accepted.order_id,
            client_oid = %request.client_oid,
            "order accepted"
        );

        let order = self
            .client
            .get_order(&accepted.order_id)
            .await
            .after_side_effect(EXCHANGE, operation, || {
                format!("order {} was placed on {}", accepted.order_id, request.symbol)
            })?;
        convert_kucoin_order(order)
    }

    #[instrument(skip(self), fields(exchange = "kucoin"))]
    pub async fn place_limit_order(
        &self,
        pair: &str,
        quantity: Decimal,
        price: Decimal,
        side: Side,
    ) -> Result<OrderResponse, ExchangeError> {
        self.place_and_fetch(
            limit_order_request(pair, quantity, price, side),
            Operation::PlaceLimitOrder,
        )
        .await
    }

    /// Priced at the last trade from the level 1 ticker
    #[instrument(skip(self), fields(exchange = "kucoin"))]
    pub async fn place_market_order(
        &self,
        pair: &str,
        quantity: Decimal,
        side: Side,
    ) -> Result<OrderResponse, ExchangeError> {
        let ticker = self.client.get_ticker(pair).await.upstream(EXCHANGE)?;
        let price = parse_decimal("price", &ticker.price)?;
        self.place_and_fetch(
            limit_order_request(pair, quantity, price, side),
            Operation::PlaceMarketOrder,
        )
        .await
    }

    /// KuCoin cancels per book side, so try buy then sell
    #[instrument(skip(self), fields(exchange = "kucoin"))]
    pub async fn cancel_order(
        &self,
        order_id: &str,
        pair: &str,
    ) -> Result<OrderResponse, ExchangeError> {
        let mut last_cause: Option<ClientError> = None;
        for side in [Side::Buy, Side::Sell] {
            match self
                .client
                .cancel_order(pair, order_id, side_to_kucoin(side))
                .await
            {
                Ok(true) => return Ok(cancel_acknowledgement(pair, order_id, side)),
                Ok(false) => {
                    debug!(%side, "no order to cancel on this side");
                    last_cause = Some(
                        format!("KuCoin found no {} order {} on {}", side, order_id, pair).into(),
                    );
                }
                Err(cause) => {
                    warn!(%side, error = %cause, "cancel attempt failed");
                    last_cause = Some(cause);
                }
            }
        }

        let cause = last_cause
            .unwrap_or_else(|| format!("KuCoin could not cancel order {}", order_id).into());
        Err(ExchangeError::UpstreamFailure {
            exchange: EXCHANGE,
            cause,
        })
    }

    #[instrument(skip(self), fields(exchange = "kucoin"))]
    pub async fn get_order(&self, pair: &str, order_id: &str) -> Result<OrderResponse, ExchangeError> {
        let order = self.client.get_order(order_id).await.upstream(EXCHANGE)?;
        convert_kucoin_order(order)
    }

    #[instrument(skip(self), fields(exchange = "kucoin"))]
    pub async fn list_orders(
        &self,
        pair: &str,
        limit: u32,
    ) -> Result<Vec<OrderResponse>, ExchangeError> {
        let orders = self
            .client
            .list_orders(pair, None, limit)
            .await
            .upstream(EXCHANGE)?;
        orders.into_iter().map(convert_kucoin_order).collect()
    }

    #[instrument(skip(self), fields(exchange = "kucoin"))]
    pub async fn list_open_orders(&self, pair: &str) -> Result<Vec<OrderResponse>, ExchangeError> {
        let orders = self
            .client
            .list_orders(pair, Some("active"), OPEN_ORDERS_PAGE_SIZE)
            .await
            .upstream(EXCHANGE)?;
        orders.into_iter().map(convert_kucoin_order).collect()
    }
}
