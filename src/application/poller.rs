use crate::domain::{
    errors::AppError,
    logging::{LogComponent, get_logger},
    orders::{Order, OrdersRepository},
};
use futures::channel::oneshot;
use futures::future::{self, Either};
use gloo_timers::future::TimeoutFuture;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

/// Fixed poll period, same cadence as the backend expects
pub const POLL_INTERVAL_MS: u32 = 5_000;

/// Монотонный счётчик циклов опроса
///
/// Ticks fire on a fixed cadence with no in-flight guard, so a slow fetch
/// can still be pending when the next one is issued. Every fetch gets a
/// sequence number at issue time; a response is applied only if its number
/// exceeds the highest applied so far, so a slow-then-fast pair can never
/// land out of issuance order.
#[derive(Debug, Default)]
pub struct PollSequence {
    issued: Cell<u64>,
    applied: Cell<u64>,
}

impl PollSequence {
    pub fn new() -> Self {
        Self { issued: Cell::new(0), applied: Cell::new(0) }
    }

    /// Issue the next sequence number
    pub fn begin(&self) -> u64 {
        let next = self.issued.get() + 1;
        self.issued.set(next);
        next
    }

    /// Claim the apply slot for `seq`; false means the response is stale
    pub fn try_apply(&self, seq: u64) -> bool {
        if seq > self.applied.get() {
            self.applied.set(seq);
            true
        } else {
            false
        }
    }

    pub fn last_issued(&self) -> u64 {
        self.issued.get()
    }

    pub fn last_applied(&self) -> u64 {
        self.applied.get()
    }
}

/// Outcome of one completed poll cycle.
///
/// Failures are swallowed here: the previous dashboard state stays visible
/// and the next scheduled tick is the only retry mechanism. Returns true
/// when the fetched list was actually applied.
pub fn apply_poll_result(
    sequence: &PollSequence,
    seq: u64,
    result: Result<Vec<Order>, AppError>,
    on_orders: &dyn Fn(Vec<Order>),
    on_failure: &dyn Fn(AppError),
) -> bool {
    match result {
        Ok(orders) => {
            if !sequence.try_apply(seq) {
                get_logger().warn(
                    LogComponent::Application("PollScheduler"),
                    &format!(
                        "⏭️ Dropping stale poll response #{} (latest applied: #{})",
                        seq,
                        sequence.last_applied()
                    ),
                );
                return false;
            }

            get_logger().debug(
                LogComponent::Application("PollScheduler"),
                &format!("✅ Poll #{} applied, {} orders", seq, orders.len()),
            );
            on_orders(orders);
            true
        }
        Err(error) => {
            get_logger().warn(
                LogComponent::Application("PollScheduler"),
                &format!("❌ Poll #{} failed, keeping previous state: {}", seq, error),
            );
            on_failure(error);
            false
        }
    }
}

/// Cancellation handle for a running poll loop.
///
/// Dropping the handle stops the loop too, so the scheduled task can never
/// outlive its owner.
pub struct PollHandle {
    cancel: Option<oneshot::Sender<()>>,
}

impl PollHandle {
    pub fn cancel(&mut self) {
        if let Some(tx) = self.cancel.take() {
            let _ = tx.send(());
            get_logger().info(
                LogComponent::Application("PollScheduler"),
                "🛑 Poll loop cancellation requested",
            );
        }
    }

    pub fn is_active(&self) -> bool {
        self.cancel.as_ref().map(|tx| !tx.is_canceled()).unwrap_or(false)
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        // dropping the sender resolves the receiver and the loop exits
        self.cancel.take();
    }
}

/// Запуск цикла опроса бэкенда
///
/// Fires one fetch immediately, then one every [`POLL_INTERVAL_MS`]. Each
/// tick runs as its own task so a slow response never delays the cadence;
/// ordering between overlapping responses is restored by [`PollSequence`].
/// `on_orders` receives every applied order list, `on_failure` every
/// swallowed poll error.
pub fn start_polling<R, FOk, FErr>(repository: R, on_orders: FOk, on_failure: FErr) -> PollHandle
where
    R: OrdersRepository + Clone + 'static,
    FOk: Fn(Vec<Order>) + 'static,
    FErr: Fn(AppError) + 'static,
{
    let (cancel_tx, mut cancel_rx) = oneshot::channel::<()>();
    let sequence = Rc::new(PollSequence::new());
    let on_orders: Rc<dyn Fn(Vec<Order>)> = Rc::new(on_orders);
    let on_failure: Rc<dyn Fn(AppError)> = Rc::new(on_failure);

    spawn_local(async move {
        crate::log_info!(
            LogComponent::Application("PollScheduler"),
            "🔄 Poll loop started, every {} ms",
            POLL_INTERVAL_MS
        );

        loop {
            let seq = sequence.begin();
            let tick_repository = repository.clone();
            let tick_sequence = sequence.clone();
            let tick_on_orders = on_orders.clone();
            let tick_on_failure = on_failure.clone();

            // one task per tick: a hanging fetch must not stall the cadence
            spawn_local(async move {
                let result = tick_repository.fetch_orders().await;
                apply_poll_result(
                    &tick_sequence,
                    seq,
                    result,
                    tick_on_orders.as_ref(),
                    tick_on_failure.as_ref(),
                );
            });

            let timeout = TimeoutFuture::new(POLL_INTERVAL_MS);
            futures::pin_mut!(timeout);

            match future::select(&mut cancel_rx, timeout).await {
                Either::Left(_) => {
                    crate::log_info!(LogComponent::Application("PollScheduler"), "🛑 Poll loop stopped");
                    break;
                }
                Either::Right(_) => {}
            }
        }
    });

    PollHandle { cancel: Some(cancel_tx) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::orders::{Money, OrderId, SupplyDate, TableId};
    use std::cell::RefCell;

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
    fn sequence_numbers_increase_monotonically() {
        let sequence = PollSequence::new();
        assert_eq!(sequence.begin(), 1);
        assert_eq!(sequence.begin(), 2);
        assert_eq!(sequence.begin(), 3);
        assert_eq!(sequence.last_issued(), 3);
    }

    #[test]
    fn stale_sequence_is_rejected() {
        let sequence = PollSequence::new();
        let slow = sequence.begin();
        let fast = sequence.begin();

        // the later fetch resolves first, the earlier one must be dropped
        assert!(sequence.try_apply(fast));
        assert!(!sequence.try_apply(slow));
        assert_eq!(sequence.last_applied(), fast);
    }

    #[test]
    fn successful_poll_applies_orders() {
        let sequence = PollSequence::new();
        let seq = sequence.begin();
        let applied: RefCell<Vec<Order>> = RefCell::new(Vec::new());

        let was_applied = apply_poll_result(
            &sequence,
            seq,
            Ok(vec![order(1, 10.0, "2024-01-02"), order(2, 5.0, "2024-01-01")]),
            &|orders| *applied.borrow_mut() = orders,
            &|_| panic!("no failure expected"),
        );

        assert!(was_applied);
        assert_eq!(applied.borrow().len(), 2);
    }

    #[test]
    fn failed_poll_leaves_previous_state_untouched() {
        let sequence = PollSequence::new();
        let seq = sequence.begin();
        let applied: RefCell<Vec<Order>> = RefCell::new(vec![order(9, 99.0, "2024-06-01")]);
        let failures = Cell::new(0u32);

        let was_applied = apply_poll_result(
            &sequence,
            seq,
            Err(AppError::NetworkError("connection refused".to_string())),
            &|orders| *applied.borrow_mut() = orders,
            &|_| failures.set(failures.get() + 1),
        );

        assert!(!was_applied);
        assert_eq!(failures.get(), 1);
        // the slot keeps whatever the last successful poll produced
        assert_eq!(applied.borrow().len(), 1);
        assert_eq!(applied.borrow()[0].order_id.value(), 9);
        // a failed cycle does not consume the apply slot
        assert_eq!(sequence.last_applied(), 0);
    }

    #[test]
    fn stale_response_does_not_reach_callback() {
        let sequence = PollSequence::new();
        let slow = sequence.begin();
        let fast = sequence.begin();
        let applied: RefCell<Vec<Order>> = RefCell::new(Vec::new());

        apply_poll_result(
            &sequence,
            fast,
            Ok(vec![order(2, 2.0, "2024-01-02")]),
            &|orders| *applied.borrow_mut() = orders,
            &|_| {},
        );
        apply_poll_result(
            &sequence,
            slow,
            Ok(vec![order(1, 1.0, "2024-01-01")]),
            &|orders| *applied.borrow_mut() = orders,
            &|_| {},
        );

        // the fast response stays applied
        assert_eq!(applied.borrow()[0].order_id.value(), 2);
    }
}
