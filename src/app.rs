use leptos::*;
use leptos::html::Canvas;
use std::cell::RefCell;
use std::rc::Rc;

use crate::{
    application::{PollHandle, start_polling},
    domain::{
        logging::{LogComponent, LogEntry, Logger, get_logger, get_time_provider},
        orders::AggregationService,
    },
    global_state::{PollPhase, globals},
    infrastructure::{
        config::BackendConfig,
        http::OrdersHttpClient,
        rendering::LineChartRenderer,
        services::ConsoleLogger,
    },
};

const CHART_CANVAS_ID: &str = "cost-chart-canvas";
const CHART_WIDTH: u32 = 800;
const CHART_HEIGHT: u32 = 420;

/// 🌉 Bridge logger: browser console plus the on-page debug console
pub struct LeptosLogger {
    console: ConsoleLogger,
}

impl LeptosLogger {
    pub fn new(console: ConsoleLogger) -> Self {
        Self { console }
    }
}

impl Logger for LeptosLogger {
    fn log(&self, entry: LogEntry) {
        let formatted = ConsoleLogger::format_entry(&entry);
        self.console.log(entry);

        let state = globals();
        if !state.is_log_paused.get_untracked() {
            state.logs.update(|log_vec| {
                log_vec.push(formatted);
                // keep the on-page console bounded
                while log_vec.len() > 100 {
                    log_vec.remove(0);
                }
            });
        }
    }
}

/// 🦀 Главный компонент дашборда заказов
#[component]
pub fn App() -> impl IntoView {
    view! {
        <style>
            {r#"
            .orders-dashboard-app {
                font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
                background: #f2f4f8;
                min-height: 100vh;
                padding: 20px;
                color: #2b2f36;
            }

            .header {
                text-align: center;
                margin-bottom: 20px;
                background: #ffffff;
                padding: 20px;
                border-radius: 12px;
                box-shadow: 0 1px 4px rgba(40, 50, 70, 0.08);
            }

            .status-info {
                display: flex;
                justify-content: center;
                gap: 40px;
                margin-top: 15px;
            }

            .status-item {
                text-align: center;
            }

            .status-value {
                font-size: 22px;
                font-weight: 700;
                color: #84aee5;
                font-family: 'Courier New', monospace;
            }

            .status-label {
                font-size: 12px;
                color: #8a8f98;
                margin-top: 5px;
            }

            .content {
                display: flex;
                gap: 20px;
                align-items: flex-start;
                margin-bottom: 20px;
            }

            .chart-panel {
                background: #ffffff;
                padding: 15px;
                border-radius: 12px;
                box-shadow: 0 1px 4px rgba(40, 50, 70, 0.08);
            }

            .chart-status {
                color: #8a8f98;
                font-size: 13px;
                text-align: center;
                margin-top: 8px;
            }

            .data-panel {
                flex: 1;
                display: flex;
                flex-direction: column;
                gap: 20px;
            }

            .total-card {
                background: #ffffff;
                padding: 20px;
                border-radius: 12px;
                box-shadow: 0 1px 4px rgba(40, 50, 70, 0.08);
                text-align: center;
            }

            .total-header {
                font-size: 13px;
                color: #8a8f98;
                text-transform: uppercase;
                letter-spacing: 0.08em;
            }

            .total-content {
                font-size: 32px;
                font-weight: 700;
                margin-top: 8px;
                font-family: 'Courier New', monospace;
            }

            .orders-table {
                background: #ffffff;
                border-radius: 12px;
                box-shadow: 0 1px 4px rgba(40, 50, 70, 0.08);
                overflow: auto;
                max-height: 420px;
            }

            .orders-table table {
                width: 100%;
                border-collapse: collapse;
                font-size: 14px;
            }

            .orders-table th {
                position: sticky;
                top: 0;
                background: #f7f8fa;
                color: #8a8f98;
                font-weight: 600;
                text-align: left;
                padding: 10px 14px;
                border-bottom: 1px solid #e4e7ec;
            }

            .orders-table td {
                padding: 8px 14px;
                border-bottom: 1px solid #eef0f4;
                font-family: 'Courier New', monospace;
            }

            .orders-table tr:hover td {
                background: #f7faff;
            }

            .debug-console {
                background: rgba(20, 24, 31, 0.95);
                border-radius: 10px;
                padding: 15px;
                max-height: 260px;
                overflow-y: auto;
            }

            .debug-header {
                display: flex;
                justify-content: space-between;
                align-items: center;
                margin-bottom: 10px;
                color: #84aee5;
                font-weight: bold;
            }

            .debug-btn {
                background: #3a4656;
                color: white;
                border: none;
                padding: 5px 10px;
                border-radius: 5px;
                cursor: pointer;
                font-size: 12px;
                margin-left: 5px;
            }

            .debug-btn:hover {
                background: #4a5666;
            }

            .debug-log {
                font-family: 'Courier New', monospace;
                font-size: 11px;
                line-height: 1.3;
            }

            .log-line {
                color: #d7dae0;
                margin: 2px 0;
                padding: 1px 5px;
                border-radius: 3px;
            }
            "#}
        </style>
        <div class="orders-dashboard-app">
            <Header />
            <div class="content">
                <ChartPanel />
                <div class="data-panel">
                    <TotalCard />
                    <OrdersTable />
                </div>
            </div>
            <DebugConsole />
        </div>
    }
}

/// 📊 Заголовок с состоянием опроса
#[component]
fn Header() -> impl IntoView {
    let phase_label = move || match globals().poll_phase.get() {
        PollPhase::Idle => "🔴 IDLE",
        PollPhase::Live => "🟢 LIVE",
        PollPhase::Degraded => "🟡 RETRYING",
    };

    view! {
        <div class="header">
            <h1>"📦 Purchase Orders Dashboard"</h1>
            <p>"Supply cost by delivery date, refreshed every 5 seconds"</p>

            <div class="status-info">
                <div class="status-item">
                    <div class="status-value">{phase_label}</div>
                    <div class="status-label">"Backend poll"</div>
                </div>
                <div class="status-item">
                    <div class="status-value">
                        {move || globals().orders.get().len().to_string()}
                    </div>
                    <div class="status-label">"Orders"</div>
                </div>
                <div class="status-item">
                    <div class="status-value">
                        {move || globals().last_refresh.get().unwrap_or_else(|| "--:--:--".to_string())}
                    </div>
                    <div class="status-label">"Last refresh"</div>
                </div>
            </div>
        </div>
    }
}

/// 🎨 Контейнер для графика стоимости по датам
#[component]
fn ChartPanel() -> impl IntoView {
    let (renderer, set_renderer) = create_signal::<Option<Rc<RefCell<LineChartRenderer>>>>(None);
    let (status, set_status) = create_signal("Initializing...".to_string());

    let canvas_ref = create_node_ref::<Canvas>();
    let poll_handle = store_value(None::<PollHandle>);

    // Инициализация после монтирования canvas
    create_effect(move |_| {
        if canvas_ref.get().is_some() && poll_handle.with_value(|handle| handle.is_none()) {
            let chart_renderer =
                LineChartRenderer::new(CHART_CANVAS_ID.to_string(), CHART_WIDTH, CHART_HEIGHT);
            set_renderer.set(Some(Rc::new(RefCell::new(chart_renderer))));
            set_status.set("⏳ Waiting for first poll...".to_string());

            poll_handle.set_value(Some(start_backend_polling()));
        }
    });

    // Перерисовка при изменении данных
    create_effect(move |_| {
        let orders = globals().orders.get();
        renderer.with(|renderer_opt| {
            if let Some(renderer_rc) = renderer_opt {
                let series = AggregationService::new().date_series(&orders);

                if let Ok(chart_renderer) = renderer_rc.try_borrow() {
                    match chart_renderer.render(&series) {
                        Err(e) => set_status.set(format!("❌ Render error: {:?}", e)),
                        Ok(()) if series.is_empty() => {
                            set_status.set("⏳ Waiting for first poll...".to_string());
                        }
                        Ok(()) => {
                            set_status.set(format!(
                                "✅ {} orders across {} delivery dates",
                                orders.len(),
                                series.len()
                            ));
                        }
                    }
                }
            }
        });
    });

    // Явная остановка опроса при размонтировании
    on_cleanup(move || {
        poll_handle.update_value(|slot| {
            if let Some(mut handle) = slot.take() {
                handle.cancel();
            }
        });
    });

    view! {
        <div class="chart-panel">
            <canvas
                id=CHART_CANVAS_ID
                node_ref=canvas_ref
                width=CHART_WIDTH
                height=CHART_HEIGHT
            />
            <div class="chart-status">
                {move || status.get()}
            </div>
        </div>
    }
}

/// 💰 Карточка суммарной стоимости
#[component]
fn TotalCard() -> impl IntoView {
    let total = move || AggregationService::new().total(&globals().orders.get()).formatted();

    view! {
        <div class="total-card">
            <div class="total-header">"Total, $"</div>
            <div class="total-content">{total}</div>
        </div>
    }
}

/// 📋 Таблица заказов, строки в порядке прихода с бэкенда
#[component]
fn OrdersTable() -> impl IntoView {
    view! {
        <div class="orders-table">
            <table cellspacing="0">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"Order id"</th>
                        <th>"Price, $"</th>
                        <th>"Price, ₽"</th>
                        <th>"Supply date"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each={move || globals().orders.get().into_iter().enumerate().collect::<Vec<_>>()}
                        key=|(index, order)| (*index, order.order_id.value())
                        children=move |(_, order)| {
                            view! {
                                <tr>
                                    <td>{order.table_id.value()}</td>
                                    <td>{order.order_id.value()}</td>
                                    <td>{order.price_usd.formatted()}</td>
                                    <td>{order.price_rub.formatted()}</td>
                                    <td>{order.supply_date.value().to_string()}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

/// 🎯 Отладочная консоль с bridge к domain::logging
#[component]
fn DebugConsole() -> impl IntoView {
    let logs = globals().logs;
    let is_paused = globals().is_log_paused;

    view! {
        <div class="debug-console">
            <div class="debug-header">
                <span>"🐛 Domain Logger Console"</span>
                <span>
                    <button
                        on:click=move |_| {
                            is_paused.update(|p| *p = !*p);
                            if is_paused.get() {
                                get_logger().info(
                                    LogComponent::Presentation("DebugConsole"),
                                    "🛑 Logging paused"
                                );
                            } else {
                                get_logger().info(
                                    LogComponent::Presentation("DebugConsole"),
                                    "▶️ Logging resumed"
                                );
                            }
                        }
                        class="debug-btn"
                    >
                        {move || if is_paused.get() { "▶️ Resume" } else { "⏸️ Pause" }}
                    </button>
                    <button
                        on:click=move |_| {
                            logs.set(Vec::new());
                            get_logger().info(
                                LogComponent::Presentation("DebugConsole"),
                                "🗑️ Log history cleared"
                            );
                        }
                        class="debug-btn"
                    >
                        "🗑️ Clear"
                    </button>
                </span>
            </div>
            <div class="debug-log">
                <For
                    each={move || logs.get().into_iter().enumerate().collect::<Vec<_>>()}
                    key=|(index, log)| (*index, log.clone())
                    children=move |(_, log)| {
                        view! { <div class="log-line">{log}</div> }
                    }
                />
            </div>
        </div>
    }
}

/// 🔄 Подключение цикла опроса к глобальным сигналам
fn start_backend_polling() -> PollHandle {
    let config = BackendConfig::from_build_env();
    let client = OrdersHttpClient::from_config(&config);

    get_logger().info(
        LogComponent::Presentation("ChartPanel"),
        &format!("🔌 Polling backend at {}", config.base_url()),
    );

    start_polling(
        client,
        |orders| {
            let state = globals();
            state.poll_phase.set(PollPhase::Live);

            let now = get_time_provider().current_timestamp();
            state.last_refresh.set(Some(get_time_provider().format_timestamp(now)));

            // wholesale replacement of the working set, last writer wins
            state.orders.set(orders);
        },
        |_error| {
            // previous aggregate stays visible, next tick is the retry
            let state = globals();
            if state.poll_phase.get_untracked() != PollPhase::Degraded {
                state.poll_phase.set(PollPhase::Degraded);
                get_logger().info(
                    LogComponent::Presentation("PollStatus"),
                    &format!("📉 Poll status: {}", PollPhase::Degraded),
                );
            }
        },
    )
}
