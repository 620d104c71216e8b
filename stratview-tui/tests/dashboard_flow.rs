//! BDD-style tests driving `AppState` through the real worker against a fake
//! backend whose backtest and catalog calls can be held open.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use chrono::NaiveDate;
use stratview_core::api::{ApiError, BacktestApi};
use stratview_core::domain::{ANNUALIZED_RETURN, MAX_DRAWDOWN, SHARPE_RATIO, TOTAL_RETURN};
use stratview_core::{BacktestResult, ComparisonResult, DashboardConfig, PricePoint, StrategyRun, ValuePoint};
use stratview_tui::app::AppState;
use stratview_tui::ui::results::backtest_rows;
use stratview_tui::worker::{spawn_worker, WorkerCommand, WorkerResponse};

const WAIT: Duration = Duration::from_secs(5);

/// Backend whose `run_backtest` blocks until the test releases it. The
/// catalog call can be held the same way.
struct GatedBackend {
    gate: Mutex<Receiver<()>>,
    catalog_gate: Option<Mutex<Receiver<()>>>,
    backtest_fails: bool,
    prices_fail: bool,
    compare_calls: AtomicUsize,
}

impl GatedBackend {
    fn new(backtest_fails: bool, prices_fail: bool) -> (Arc<Self>, Sender<()>) {
        let (release, gate) = mpsc::channel();
        let backend = Arc::new(Self {
            gate: Mutex::new(gate),
            catalog_gate: None,
            backtest_fails,
            prices_fail,
            compare_calls: AtomicUsize::new(0),
        });
        (backend, release)
    }

    /// Returns the backend plus release handles for the backtest and catalog calls.
    fn with_hung_catalog() -> (Arc<Self>, Sender<()>, Sender<()>) {
        let (release, gate) = mpsc::channel();
        let (release_catalog, catalog_gate) = mpsc::channel();
        let backend = Arc::new(Self {
            gate: Mutex::new(gate),
            catalog_gate: Some(Mutex::new(catalog_gate)),
            backtest_fails: false,
            prices_fail: false,
            compare_calls: AtomicUsize::new(0),
        });
        (backend, release, release_catalog)
    }
}

fn moving_average_run() -> StrategyRun {
    let metrics: BTreeMap<String, f64> = [
        (TOTAL_RETURN, 0.15),
        (ANNUALIZED_RETURN, 0.072),
        (MAX_DRAWDOWN, -0.08),
        (SHARPE_RATIO, 1.1),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect();
    StrategyRun {
        final_value: 115_000.0,
        metrics,
        trade_history: Vec::new(),
        portfolio_history: vec![ValuePoint {
            date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            value: 115_000.0,
        }],
    }
}

impl BacktestApi for GatedBackend {
    fn list_strategies(&self) -> Result<Vec<String>, ApiError> {
        if let Some(gate) = &self.catalog_gate {
            let _ = gate.lock().unwrap().recv();
        }
        Ok(vec!["MovingAverage".into(), "RSI".into()])
    }

    fn fetch_price_history(&self) -> Result<Vec<PricePoint>, ApiError> {
        if self.prices_fail {
            return Err(ApiError::Transport {
                path: "/stock-data",
                message: "connection refused".into(),
            });
        }
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        Ok((0..45)
            .map(|i| PricePoint::new(start + chrono::Days::new(i), 100.0 + i as f64))
            .collect())
    }

    fn run_backtest(&self, strategy: &str, _initial_capital: f64) -> Result<BacktestResult, ApiError> {
        let _ = self.gate.lock().unwrap().recv();
        if self.backtest_fails {
            return Err(ApiError::Status {
                path: "/backtest",
                status: 500,
            });
        }
        Ok(BacktestResult {
            strategy: strategy.to_string(),
            run: moving_average_run(),
        })
    }

    fn compare_strategies(&self, _: &[String], _: f64) -> Result<ComparisonResult, ApiError> {
        self.compare_calls.fetch_add(1, Ordering::SeqCst);
        Ok(ComparisonResult::default())
    }
}

struct Harness {
    app: AppState,
    cmd_tx: Sender<WorkerCommand>,
    worker: Option<JoinHandle<()>>,
}

impl Harness {
    fn start(backend: Arc<GatedBackend>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();
        let worker = spawn_worker(backend, cmd_rx, resp_tx).unwrap();
        let app = AppState::new(&DashboardConfig::default(), cmd_tx.clone(), resp_rx);
        Self {
            app,
            cmd_tx,
            worker: Some(worker),
        }
    }

    /// Block for the next worker response and apply it.
    fn apply_next(&mut self) {
        let resp: WorkerResponse = self.app.worker_rx.recv_timeout(WAIT).unwrap();
        self.app.apply_response(resp);
    }
}

impl Drop for Harness {
    fn drop(&mut self) {
        let _ = self.cmd_tx.send(WorkerCommand::Shutdown);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

#[test]
fn moving_average_backtest_end_to_end() {
    // Given: a dashboard that has loaded its catalog
    let (backend, release) = GatedBackend::new(false, false);
    let mut h = Harness::start(backend.clone());
    h.app.request_startup_data();
    h.apply_next();
    h.apply_next();
    assert_eq!(h.app.selected_strategy.as_deref(), Some("MovingAverage"));
    assert_eq!(h.app.prices.len(), 30);
    assert!(!h.app.is_busy());

    // When: the user runs a backtest
    assert!(h.app.run_backtest());

    // Then: busy holds while the request is open, and compare is ignored
    assert!(h.app.is_busy());
    assert!(!h.app.run_compare());
    assert!(!h.app.run_backtest());

    // When: the backend answers
    release.send(()).unwrap();
    h.apply_next();

    // Then: busy is released and the card shows the backend's numbers
    assert!(!h.app.is_busy());
    assert!(h.app.comparison.is_none());
    assert_eq!(backend.compare_calls.load(Ordering::SeqCst), 0);

    let result = h.app.backtest.as_ref().unwrap();
    let rows = backtest_rows(result).unwrap();
    assert_eq!(rows[0].value, "$115,000.00");
    assert_eq!(rows[1].value, "15.00%");
}

#[test]
fn failed_backtest_still_clears_busy() {
    // Given: a backend that will reject the backtest
    let (backend, release) = GatedBackend::new(true, false);
    let mut h = Harness::start(backend);
    h.app.select_strategy("RSI");

    // When
    assert!(h.app.run_backtest());
    assert!(h.app.is_busy());
    release.send(()).unwrap();
    h.apply_next();

    // Then: no result, busy cleared, failure recorded
    assert!(!h.app.is_busy());
    assert!(h.app.backtest.is_none());
    assert_eq!(h.app.error_history.len(), 1);
    assert!(h.app.error_history[0].message.contains("500"));

    // And: the triggers are live again
    assert!(h.app.run_compare());
    h.apply_next();
    assert!(h.app.comparison.is_some());
}

#[test]
fn price_failure_leaves_chart_empty_but_catalog_loads() {
    // Given: a backend whose price endpoint is down
    let (backend, _release) = GatedBackend::new(false, true);
    let mut h = Harness::start(backend);

    // When: startup fetches complete
    h.app.request_startup_data();
    h.apply_next();
    h.apply_next();

    // Then: the catalog still loaded and prices stayed empty
    assert!(h.app.prices.is_empty());
    assert_eq!(h.app.strategies.len(), 2);
    assert_eq!(h.app.selected_strategy.as_deref(), Some("MovingAverage"));
    assert!(h.app.error_history[0].message.contains("stock data"));
    assert!(h.app.running);
}

#[test]
fn prices_and_backtest_do_not_wait_for_a_hung_catalog() {
    // Given: a backend whose /strategies call never returns on its own
    let (backend, release, release_catalog) = GatedBackend::with_hung_catalog();
    let mut h = Harness::start(backend);

    // When: startup fetches are issued
    h.app.request_startup_data();

    // Then: the price chart fills while the catalog is still pending
    h.apply_next();
    assert_eq!(h.app.prices.len(), 30);
    assert!(h.app.strategies.is_empty());
    assert!(h.app.selected_strategy.is_none());

    // And: a backtest started meanwhile also completes
    h.app.select_strategy("RSI");
    assert!(h.app.run_backtest());
    release.send(()).unwrap();
    h.apply_next();
    assert!(!h.app.is_busy());
    assert_eq!(h.app.backtest.as_ref().unwrap().strategy, "RSI");
    assert!(h.app.strategies.is_empty());

    // When: the catalog finally answers
    release_catalog.send(()).unwrap();
    h.apply_next();

    // Then: it lands last, keeping the user's pick since it is listed
    assert_eq!(h.app.strategies, vec!["MovingAverage", "RSI"]);
    assert_eq!(h.app.selected_strategy.as_deref(), Some("RSI"));
}
