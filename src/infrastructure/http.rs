use crate::domain::{
    errors::{AppError, NetworkResult},
    logging::{LogComponent, get_logger},
    orders::{Money, Order, OrderId, OrdersRepository, SupplyDate, TableId},
};
use crate::infrastructure::config::BackendConfig;
use gloo_net::http::Request;
use serde::Deserialize;

/// The one endpoint the backend exposes
pub const ORDERS_PATH: &str = "/give-me-everything-you-know/";

/// HTTP клиент бэкенда заказов
///
/// One plain GET per poll cycle; no extra headers, parameters or auth, and
/// no timeout beyond the transport defaults.
#[derive(Clone)]
pub struct OrdersHttpClient {
    base_url: String,
}

impl OrdersHttpClient {
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }

    pub fn from_config(config: &BackendConfig) -> Self {
        Self::new(config.base_url())
    }

    pub fn orders_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), ORDERS_PATH)
    }

    /// Fetch the complete current order list
    pub async fn get_orders(&self) -> NetworkResult<Vec<Order>> {
        let url = self.orders_url();

        get_logger().debug(
            LogComponent::Infrastructure("OrdersHttpClient"),
            &format!("🌐 GET: {}", url),
        );

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| AppError::NetworkError(format!("Failed to send request: {:?}", e)))?;

        if !response.ok() {
            return Err(AppError::NetworkError(format!(
                "HTTP error: {} - {}",
                response.status(),
                response.status_text()
            )));
        }

        let payload: OrdersResponse = response
            .json()
            .await
            .map_err(|e| AppError::DecodeError(format!("Failed to parse JSON: {:?}", e)))?;

        let orders = decode_orders(payload);

        get_logger().debug(
            LogComponent::Infrastructure("OrdersHttpClient"),
            &format!("✅ Fetched {} orders", orders.len()),
        );

        Ok(orders)
    }
}

impl OrdersRepository for OrdersHttpClient {
    async fn fetch_orders(&self) -> NetworkResult<Vec<Order>> {
        self.get_orders().await
    }
}

/// Wire shape of the backend response
#[derive(Debug, Deserialize)]
pub struct OrdersResponse {
    #[serde(default)]
    pub results: Vec<OrderDto>,
}

/// DTO для одной записи заказа
///
/// Every field is optional so a single malformed row cannot fail the whole
/// payload; conversion below decides what is actually required.
#[derive(Debug, Deserialize)]
pub struct OrderDto {
    #[serde(default)]
    pub table_id: Option<u32>,
    #[serde(default)]
    pub order_id: Option<i64>,
    #[serde(default)]
    pub price_usd: Option<f64>,
    #[serde(default)]
    pub price_rub: Option<f64>,
    #[serde(default)]
    pub supply_date: Option<String>,
}

impl OrderDto {
    /// Convert DTO to domain entity.
    ///
    /// `order_id`, `price_usd` and `supply_date` are required; `table_id`
    /// is display-only and `price_rub` is filled lazily by the backend, so
    /// both fall back to zero.
    pub fn into_domain(self) -> Option<Order> {
        let order_id = self.order_id?;
        let price_usd = self.price_usd?;
        let supply_date = SupplyDate::new(self.supply_date?).ok()?;

        Some(Order::new(
            TableId::from(self.table_id.unwrap_or(0)),
            OrderId::from(order_id),
            Money::from(price_usd),
            Money::from(self.price_rub.unwrap_or(0.0)),
            supply_date,
        ))
    }
}

/// Skip-not-reject policy: malformed records are dropped with a warning so
/// one bad row never blanks the dashboard.
pub fn decode_orders(payload: OrdersResponse) -> Vec<Order> {
    let mut orders = Vec::with_capacity(payload.results.len());

    for (index, dto) in payload.results.into_iter().enumerate() {
        match dto.into_domain() {
            Some(order) => orders.push(order),
            None => get_logger().warn(
                LogComponent::Infrastructure("OrdersHttpClient"),
                &format!("⚠️ Skipping malformed order record at index {}", index),
            ),
        }
    }

    orders
}
