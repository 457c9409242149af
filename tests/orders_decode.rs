#![cfg(target_arch = "wasm32")]

use orders_dashboard_wasm::infrastructure::http::{OrdersResponse, decode_orders};
use wasm_bindgen_test::*;
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn decode(json: &str) -> Vec<orders_dashboard_wasm::domain::orders::Order> {
    let payload: OrdersResponse = serde_json::from_str(json).unwrap();
    decode_orders(payload)
}

#[wasm_bindgen_test]
fn decodes_backend_payload_in_received_order() {
    let orders = decode(
        r#"{"results": [
            {"table_id": 1, "order_id": 340, "price_usd": 120.45, "price_rub": 10840.5, "supply_date": "2024-02-11"},
            {"table_id": 2, "order_id": 341, "price_usd": 3.5, "price_rub": 315.0, "supply_date": "2024-02-09"}
        ]}"#,
    );

    assert_eq!(orders.len(), 2);
    // rows keep backend order, the chart is the only thing that sorts
    assert_eq!(orders[0].order_id.value(), 340);
    assert_eq!(orders[1].order_id.value(), 341);
    assert_eq!(orders[0].price_rub.value(), 10840.5);
}

#[wasm_bindgen_test]
fn malformed_rows_are_skipped_not_fatal() {
    let orders = decode(
        r#"{"results": [
            {"table_id": 1, "order_id": 1, "price_usd": 1.0, "supply_date": "2024-02-11"},
            {"table_id": 2, "order_id": 2, "supply_date": "2024-02-12"},
            {"table_id": 3, "order_id": 3, "price_usd": 3.0}
        ]}"#,
    );

    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].order_id.value(), 1);
}

#[wasm_bindgen_test]
fn null_rub_price_defaults_to_zero() {
    let orders = decode(
        r#"{"results": [
            {"table_id": 1, "order_id": 1, "price_usd": 1.0, "price_rub": null, "supply_date": "2024-02-11"}
        ]}"#,
    );

    assert_eq!(orders[0].price_rub.value(), 0.0);
}
