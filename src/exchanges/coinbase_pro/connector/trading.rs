use crate::core::{
    errors::{ClientResultExt, ExchangeError},
    normalize::cancel_acknowledgement,
    types::{Exchange, OrderResponse, Side},
};
use crate::exchanges::coinbase_pro::{
    client::CoinbaseProClient,
    conversions::{
        convert_coinbase_order, limit_order_request, market_order_request,
        stop_loss_order_request,
    },
    types::CoinbaseOrderRequest,
};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{debug, instrument};

const EXCHANGE: Exchange = Exchange::CoinbasePro;

/// Coinbase Pro trading implementation
pub struct Trading {
    client: Arc<dyn CoinbaseProClient>,
}

impl Trading {
    pub fn new(client: &Arc<dyn CoinbaseProClient>) -> Self {
        Self {
            client: Arc::clone(client),
        }
    }

    async fn submit(&self, request: CoinbaseOrderRequest) -> Result<OrderResponse, ExchangeError> {
        debug!(
            product_id = %request.product_id,
            order_type = %request.order_type,
            stop = ?request.stop,
            "submitting order"
        );
        let order = self.client.place_order(&request).await.upstream(EXCHANGE)?;
        convert_coinbase_order(order)
    }

    #[instrument(skip(self), fields(exchange = "coinbase_pro"))]
    pub async fn place_limit_order(
        &self,
        pair: &str,
        quantity: Decimal,
        price: Decimal,
        side: Side,
    ) -> Result<OrderResponse, ExchangeError> {
        self.submit(limit_order_request(pair, quantity, price, side))
            .await
    }

    #[instrument(skip(self), fields(exchange = "coinbase_pro"))]
    pub async fn place_market_order(
        &self,
        pair: &str,
        quantity: Decimal,
        side: Side,
    ) -> Result<OrderResponse, ExchangeError> {
        self.submit(market_order_request(pair, quantity, side)).await
    }

    #[instrument(skip(self), fields(exchange = "coinbase_pro"))]
    pub async fn place_stop_loss_order(
        &self,
        pair: &str,
        quantity: Decimal,
        price: Decimal,
        stop_price: Decimal,
        side: Side,
    ) -> Result<OrderResponse, ExchangeError> {
        self.submit(stop_loss_order_request(
            pair, quantity, price, stop_price, side,
        ))
        .await
    }

    #[instrument(skip(self), fields(exchange = "coinbase_pro"))]
    pub async fn cancel_order(
        &self,
        order_id: &str,
        pair: &str,
    ) -> Result<OrderResponse, ExchangeError> {
        let canceled = self.client.cancel_order(order_id).await.upstream(EXCHANGE)?;
        if !canceled {
            return Err(ExchangeError::refused(
                EXCHANGE,
                format!("Coinbase Pro refused to cancel order {}", order_id),
            ));
        }
        // side is not reported by the cancel endpoint
        Ok(cancel_acknowledgement(pair, order_id, Side::Buy))
    }

    #[instrument(skip(self), fields(exchange = "coinbase_pro"))]
    pub async fn get_order(&self, pair: &str, order_id: &str) -> Result<OrderResponse, ExchangeError> {
        let order = self.client.get_order(order_id).await.upstream(EXCHANGE)?;
        convert_coinbase_order(order)
    }

    #[instrument(skip(self), fields(exchange = "coinbase_pro"))]
    pub async fn list_open_orders(&self, pair: &str) -> Result<Vec<OrderResponse>, ExchangeError> {
        let orders = self.client.get_open_orders(pair).await.upstream(EXCHANGE)?;
        orders.into_iter().map(convert_coinbase_order).collect()
    }
}
