use crate::core::{
    errors::{ClientResultExt, ExchangeError},
    normalize::cancel_acknowledgement,
    types::{Exchange, Operation, OrderResponse, Side},
};
use crate::exchanges::bittrex::{
    client::BittrexClient,
    conversions::{convert_bittrex_order, limit_order_request, market_order_request},
    types::BittrexOrderRequest,
};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{debug, instrument};

const EXCHANGE: Exchange = Exchange::Bittrex;

/// Bittrex trading implementation
///
/// Placement only answers with a uuid, so both order kinds place and then
/// fetch the order back.
pub struct Trading {
    client: Arc<dyn BittrexClient>,
}

impl Trading {
    pub fn new(client: &Arc<dyn BittrexClient>) -> Self {
        Self {
            client: Arc::clone(client),
        }
    }

    async fn place_and_fetch(
        &self,
        request: BittrexOrderRequest,
        operation: Operation,
    ) -> Result<OrderResponse, ExchangeError> {
        let accepted = self.client.place_order(&request).await.upstream(EXCHANGE)?;
        debug!(uuid = %accepted.uuid, market = %request.market, "order accepted");

        let order = self
            .client
            .get_order(&accepted.uuid)
            .await
            .after_side_effect(EXCHANGE, operation, || {
                format!("order {} was placed on {}", accepted.uuid, request.market)
            })?;
        convert_bittrex_order(order)
    }

    #[instrument(skip(self), fields(exchange = "bittrex"))]
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

    #[instrument(skip(self), fields(exchange = "bittrex"))]
    pub async fn place_market_order(
        &self,
        pair: &str,
        quantity: Decimal,
        side: Side,
    ) -> Result<OrderResponse, ExchangeError> {
        self.place_and_fetch(
            market_order_request(pair, quantity, side),
            Operation::PlaceMarketOrder,
        )
        .await
    }

    #[instrument(skip(self), fields(exchange = "bittrex"))]
    pub async fn cancel_order(
        &self,
        order_id: &str,
        pair: &str,
    ) -> Result<OrderResponse, ExchangeError> {
        let canceled = self.client.cancel_order(order_id).await.upstream(EXCHANGE)?;
        if !canceled {
            return Err(ExchangeError::refused(
                EXCHANGE,
                format!("Bittrex refused to cancel order {}", order_id),
            ));
        }
        // side is not reported by the cancel endpoint
        Ok(cancel_acknowledgement(pair, order_id, Side::Buy))
    }

    #[instrument(skip(self), fields(exchange = "bittrex"))]
    pub async fn get_order(&self, pair: &str, order_id: &str) -> Result<OrderResponse, ExchangeError> {
        let order = self.client.get_order(order_id).await.upstream(EXCHANGE)?;
        convert_bittrex_order(order)
    }

    /// Most recent `limit` orders of the market history
    #[instrument(skip(self), fields(exchange = "bittrex"))]
    pub async fn list_orders(
        &self,
        pair: &str,
        limit: u32,
    ) -> Result<Vec<OrderResponse>, ExchangeError> {
        let orders = self
            .client
            .get_order_history(pair)
            .await
            .upstream(EXCHANGE)?;
        orders
            .into_iter()
            .take(limit as usize)
            .map(convert_bittrex_order)
            .collect()
    }

    #[instrument(skip(self), fields(exchange = "bittrex"))]
    pub async fn list_open_orders(&self, pair: &str) -> Result<Vec<OrderResponse>, ExchangeError> {
        let orders = self.client.get_open_orders(pair).await.upstream(EXCHANGE)?;
        orders.into_iter().map(convert_bittrex_order).collect()
    }
}
