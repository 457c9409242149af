#![cfg(target_arch = "wasm32")]

use orders_dashboard_wasm::application::{PollSequence, apply_poll_result, start_polling};
use orders_dashboard_wasm::domain::errors::{AppError, NetworkResult};
use orders_dashboard_wasm::domain::orders::{
    Money, Order, OrderId, OrdersRepository, SupplyDate, TableId,
};
use std::cell::RefCell;
use std::rc::Rc;
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

#[derive(Clone)]
struct StaticRepository;

impl OrdersRepository for StaticRepository {
    async fn fetch_orders(&self) -> NetworkResult<Vec<Order>> {
        Ok(vec![order(1, 1.0, "2024-01-01")])
    }
}

#[wasm_bindgen_test]
fn overlapping_responses_apply_in_issue_order() {
    let sequence = PollSequence::new();
    let slow = sequence.begin();
    let fast = sequence.begin();
    let slot: Rc<RefCell<Vec<Order>>> = Rc::new(RefCell::new(Vec::new()));

    let slot_fast = slot.clone();
    apply_poll_result(
        &sequence,
        fast,
        Ok(vec![order(2, 2.0, "2024-01-02")]),
        &move |orders| *slot_fast.borrow_mut() = orders,
        &|_| {},
    );

    let slot_slow = slot.clone();
    let applied = apply_poll_result(
        &sequence,
        slow,
        Ok(vec![order(1, 1.0, "2024-01-01")]),
        &move |orders| *slot_slow.borrow_mut() = orders,
        &|_| {},
    );

    assert!(!applied);
    assert_eq!(slot.borrow()[0].order_id.value(), 2);
}

#[wasm_bindgen_test]
fn failed_poll_keeps_previous_aggregate() {
    let sequence = PollSequence::new();
    let seq = sequence.begin();
    let slot: Rc<RefCell<Vec<Order>>> =
        Rc::new(RefCell::new(vec![order(9, 99.0, "2024-06-01")]));

    let slot_cb = slot.clone();
    let applied = apply_poll_result(
        &sequence,
        seq,
        Err(AppError::NetworkError("backend unreachable".to_string())),
        &move |orders| *slot_cb.borrow_mut() = orders,
        &|_| {},
    );

    assert!(!applied);
    assert_eq!(slot.borrow().len(), 1);
    assert_eq!(slot.borrow()[0].price_usd.value(), 99.0);
}

#[wasm_bindgen_test]
fn poll_handle_cancel_is_explicit_teardown() {
    let mut handle = start_polling(StaticRepository, |_| {}, |_| {});
    assert!(handle.is_active());

    handle.cancel();
    assert!(!handle.is_active());
}
