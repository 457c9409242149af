#![cfg(target_arch = "wasm32")]

use orders_dashboard_wasm::domain::orders::{
    Money, Order, OrderBook, OrderId, SupplyDate, TableId,
};
use wasm_bindgen_test::*;
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn order(order_id: i64, usd: f64, date: &str) -> Order {
    Order::new(
        TableId::from(order_id as u32),
        OrderId::from(order_id),
        Money::from(usd),
        Money::zero(),
        SupplyDate::from(date),
    )
}

#[wasm_bindgen_test]
fn book_starts_empty_and_replaces_wholesale() {
    let mut book = OrderBook::new();
    assert!(book.is_empty());

    book.replace_all(vec![order(1, 10.0, "2024-01-01"), order(2, 5.0, "2024-01-02")]);
    assert_eq!(book.count(), 2);

    book.replace_all(vec![order(3, 7.0, "2024-02-01")]);
    assert_eq!(book.count(), 1);
    assert_eq!(book.get_orders()[0].order_id.value(), 3);

    book.replace_all(Vec::new());
    assert!(book.is_empty());
}
