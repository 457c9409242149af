pub use super::value_objects::{Money, OrderId, SupplyDate, TableId};
use serde::{Deserialize, Serialize};

/// Domain entity - Purchase order
///
/// Orders arrive verbatim from the backend and are never mutated or written
/// back. `price_rub` is supplied independently by the backend and may lag a
/// refresh cycle there; a missing value decodes as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub table_id: TableId,
    pub order_id: OrderId,
    pub price_usd: Money,
    pub price_rub: Money,
    pub supply_date: SupplyDate,
}

impl Order {
    pub fn new(
        table_id: TableId,
        order_id: OrderId,
        price_usd: Money,
        price_rub: Money,
        supply_date: SupplyDate,
    ) -> Self {
        Self { table_id, order_id, price_usd, price_rub, supply_date }
    }
}

/// Domain entity - The current working set of orders
///
/// Created empty at startup and replaced wholesale by each successful poll.
/// There is no merge and no diffing; the previous list is simply dropped.
#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    orders: Vec<Order>,
}

impl OrderBook {
    pub fn new() -> Self {
        Self { orders: Vec::new() }
    }

    /// Atomically swap in a freshly fetched list
    pub fn replace_all(&mut self, orders: Vec<Order>) {
        self.orders = orders;
    }

    pub fn get_orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn count(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(order_id: i64, usd: f64, date: &str) -> Order {
        Order::new(
            TableId::from(order_id as u32),
            OrderId::from(order_id),
            Money::from(usd),
            Money::zero(),
            SupplyDate::from(date),
        )
    }

    #[test]
    fn order_book_starts_empty() {
        let book = OrderBook::new();
        assert!(book.is_empty());
        assert_eq!(book.count(), 0);
    }

    #[test]
    fn replace_all_swaps_wholesale() {
        let mut book = OrderBook::new();
        book.replace_all(vec![order(1, 10.0, "2024-01-01"), order(2, 5.0, "2024-01-02")]);
        assert_eq!(book.count(), 2);

        // a later poll fully replaces the previous set, it never merges
        book.replace_all(vec![order(3, 7.0, "2024-02-01")]);
        assert_eq!(book.count(), 1);
        assert_eq!(book.get_orders()[0].order_id.value(), 3);
    }

    #[test]
    fn replace_all_with_empty_clears() {
        let mut book = OrderBook::new();
        book.replace_all(vec![order(1, 10.0, "2024-01-01")]);
        book.replace_all(Vec::new());
        assert!(book.is_empty());
    }
}
