use crate::core::{
    errors::{ClientResultExt, ExchangeError},
    types::{Exchange, OrderResponse, Side},
};
use crate::exchanges::binance::{
    client::BinanceClient,
    conversions::{
        convert_binance_order, limit_order_request, market_order_request, parse_order_id,
        stop_loss_order_request,
    },
    types::BinanceOrderRequest,
};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{debug, instrument};

const EXCHANGE: Exchange = Exchange::Binance;

/// Binance trading implementation
pub struct Trading {
    client: Arc<dyn BinanceClient>,
}

impl Trading {
    pub fn new(client: &Arc<dyn BinanceClient>) -> Self {
        Self {
            client: Arc::clone(client),
        }
    }

    async fn submit(&self, request: BinanceOrderRequest) -> Result<OrderResponse, ExchangeError> {
        debug!(
            symbol = %request.symbol,
            order_type = %request.order_type,
            side = %request.side,
            "submitting order"
        );
        let order = self.client.new_order(&request).await.upstream(EXCHANGE)?;
        convert_binance_order(order)
    }

    #[instrument(skip(self), fields(exchange = "binance"))]
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

    #[instrument(skip(self), fields(exchange = "binance"))]
    pub async fn place_market_order(
        &self,
        pair: &str,
        quantity: Decimal,
        side: Side,
    ) -> Result<OrderResponse, ExchangeError> {
        self.submit(market_order_request(pair, quantity, side)).await
    }

    #[instrument(skip(self), fields(exchange = "binance"))]
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

    #[instrument(skip(self), fields(exchange = "binance"))]
    pub async fn cancel_order(
        &self,
        order_id: &str,
        pair: &str,
    ) -> Result<OrderResponse, ExchangeError> {
        let order_id = parse_order_id(order_id)?;
        let order = self
            .client
            .cancel_order(pair, order_id)
            .await
            .upstream(EXCHANGE)?;
        convert_binance_order(order)
    }

    #[instrument(skip(self), fields(exchange = "binance"))]
    pub async fn get_order(&self, pair: &str, order_id: &str) -> Result<OrderResponse, ExchangeError> {
        let order_id = parse_order_id(order_id)?;
        let order = self
            .client
            .query_order(pair, order_id)
            .await
            .upstream(EXCHANGE)?;
        convert_binance_order(order)
    }

    #[instrument(skip(self), fields(exchange = "binance"))]
    pub async fn list_orders(
        &self,
        pair: &str,
        limit: u32,
    ) -> Result<Vec<OrderResponse>, ExchangeError> {
        let orders = self
            .client
            .all_orders(pair, limit)
            .await
            .upstream(EXCHANGE)?;
        orders.into_iter().map(convert_binance_order).collect()
    }

    #[instrument(skip(self), fields(exchange = "binance"))]
    pub async fn list_open_orders(&self, pair: &str) -> Result<Vec<OrderResponse>, ExchangeError> {
        let orders = self.client.open_orders(pair).await.upstream(EXCHANGE)?;
        orders.into_iter().map(convert_binance_order).collect()
    }
}
