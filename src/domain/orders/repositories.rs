use crate::domain::errors::NetworkResult;
use crate::domain::orders::Order;
use std::future::Future;

/// Интерфейс источника данных о заказах
///
/// One invocation is one poll: the adapter returns the complete current
/// order list or an error the caller treats as "no update this cycle".
pub trait OrdersRepository {
    fn fetch_orders(&self) -> impl Future<Output = NetworkResult<Vec<Order>>>;
}
