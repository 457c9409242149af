use crate::domain::orders::Order;
use leptos::*;
use once_cell::sync::OnceCell;
use strum::Display as StrumDisplay;

/// Observable poll loop state for the header indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay)]
pub enum PollPhase {
    /// No poll has completed yet
    #[strum(serialize = "idle")]
    Idle,
    /// Last poll succeeded
    #[strum(serialize = "live")]
    Live,
    /// Last poll failed, previous data stays on screen
    #[strum(serialize = "degraded")]
    Degraded,
}

pub struct Globals {
    /// The single "current order list" slot, replaced wholesale per poll
    pub orders: RwSignal<Vec<Order>>,
    pub poll_phase: RwSignal<PollPhase>,
    pub last_refresh: RwSignal<Option<String>>,
    pub logs: RwSignal<Vec<String>>,
    pub is_log_paused: RwSignal<bool>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        orders: create_rw_signal(Vec::new()),
        poll_phase: create_rw_signal(PollPhase::Idle),
        last_refresh: create_rw_signal(None),
        logs: create_rw_signal(Vec::new()),
        is_log_paused: create_rw_signal(false),
    })
}
