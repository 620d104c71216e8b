//! Application state: single-owner, main-thread only.
//!
//! `AppState` is the dashboard's state store: every mutation goes through one
//! of the named transitions below, and the worker thread only ever talks to it
//! through channels.
//!
//! There is exactly one busy flag. It is raised before a backtest or
//! comparison command is sent and lowered when that command's response is
//! applied, whether the backend succeeded or not. While it is raised both
//! triggers are inert; a press is simply ignored, never queued.

use std::collections::VecDeque;
use std::sync::mpsc::{Receiver, Sender};

use chrono::NaiveDateTime;

use stratview_core::api::{ApiError, Endpoint};
use stratview_core::domain::recent_window;
use stratview_core::{BacktestResult, ComparisonResult, DashboardConfig, PricePoint};

use crate::worker::{WorkerCommand, WorkerResponse};

const ERROR_HISTORY_CAP: usize = 50;

/// Which chart fills the main area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Prices,
    Backtest,
    Compare,
}

impl Panel {
    pub fn index(self) -> usize {
        match self {
            Panel::Prices => 0,
            Panel::Backtest => 1,
            Panel::Compare => 2,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Panel::Prices),
            1 => Some(Panel::Backtest),
            2 => Some(Panel::Compare),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Prices => "Prices",
            Panel::Backtest => "Backtest",
            Panel::Compare => "Compare",
        }
    }

    pub fn next(self) -> Panel {
        match self {
            Panel::Prices => Panel::Backtest,
            Panel::Backtest => Panel::Compare,
            Panel::Compare => Panel::Prices,
        }
    }

    pub fn prev(self) -> Panel {
        match self {
            Panel::Prices => Panel::Compare,
            Panel::Backtest => Panel::Prices,
            Panel::Compare => Panel::Backtest,
        }
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Which backend operation a recorded failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Strategies,
    Prices,
    Backtest,
    Compare,
}

impl ErrorCategory {
    pub const ALL: [ErrorCategory; 4] = [
        ErrorCategory::Strategies,
        ErrorCategory::Prices,
        ErrorCategory::Backtest,
        ErrorCategory::Compare,
    ];

    pub fn endpoint(self) -> Endpoint {
        match self {
            ErrorCategory::Strategies => Endpoint::Strategies,
            ErrorCategory::Prices => Endpoint::StockData,
            ErrorCategory::Backtest => Endpoint::Backtest,
            ErrorCategory::Compare => Endpoint::CompareStrategies,
        }
    }

    /// The failing request line, e.g. `POST /backtest`.
    pub fn operation(self) -> String {
        let endpoint = self.endpoint();
        format!("{} {}", endpoint.method(), endpoint.path())
    }
}

/// An error record for the error history overlay.
#[derive(Debug, Clone)]
pub struct ErrorRecord {
    pub timestamp: NaiveDateTime,
    pub category: ErrorCategory,
    pub message: String,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
    ErrorHistory,
}

/// Top-level application state.
pub struct AppState {
    pub running: bool,
    pub active_panel: Panel,

    // Data slices, each owned here and replaced wholesale.
    pub strategies: Vec<String>,
    pub selected_strategy: Option<String>,
    pub initial_capital: f64,
    pub prices: Vec<PricePoint>,
    pub backtest: Option<BacktestResult>,
    pub comparison: Option<ComparisonResult>,
    busy: bool,
    price_window: usize,

    /// Text being typed into the capital field, if the editor is open.
    pub capital_input: Option<String>,

    // Worker communication
    pub worker_tx: Sender<WorkerCommand>,
    pub worker_rx: Receiver<WorkerResponse>,

    // Cross-cutting
    pub status_message: Option<(String, StatusLevel)>,
    pub error_history: VecDeque<ErrorRecord>,
    pub error_scroll: usize,
    pub overlay: Overlay,
}

impl AppState {
    pub fn new(
        config: &DashboardConfig,
        worker_tx: Sender<WorkerCommand>,
        worker_rx: Receiver<WorkerResponse>,
    ) -> Self {
        Self {
            running: true,
            active_panel: Panel::Prices,
            strategies: Vec::new(),
            selected_strategy: None,
            initial_capital: config.initial_capital,
            prices: Vec::new(),
            backtest: None,
            comparison: None,
            busy: false,
            price_window: config.price_window,
            capital_input: None,
            worker_tx,
            worker_rx,
            status_message: None,
            error_history: VecDeque::with_capacity(ERROR_HISTORY_CAP),
            error_scroll: 0,
            overlay: Overlay::None,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Whether the "Run Backtest" trigger is live.
    pub fn can_run_backtest(&self) -> bool {
        !self.busy && self.has_selection()
    }

    /// Whether the "Compare All" trigger is live.
    pub fn can_run_compare(&self) -> bool {
        !self.busy
    }

    fn has_selection(&self) -> bool {
        self.selected_strategy
            .as_deref()
            .is_some_and(|s| !s.is_empty())
    }

    // ── Startup ────────────────────────────────────────────────────────

    /// Issue the two independent startup fetches. Neither touches the busy
    /// flag, so the dashboard stays interactive while they are outstanding.
    pub fn request_startup_data(&mut self) {
        self.send(WorkerCommand::LoadStrategies, ErrorCategory::Strategies);
        self.send(WorkerCommand::LoadPrices, ErrorCategory::Prices);
    }

    // ── User transitions ──────────────────────────────────────────────

    /// Overwrite the selection. Legal while busy; nothing in flight is affected.
    pub fn select_strategy(&mut self, id: impl Into<String>) {
        self.selected_strategy = Some(id.into());
    }

    pub fn select_next_strategy(&mut self) {
        self.step_selection(1);
    }

    pub fn select_prev_strategy(&mut self) {
        self.step_selection(-1);
    }

    fn step_selection(&mut self, direction: isize) {
        let len = self.strategies.len();
        if len == 0 {
            return;
        }
        let current = self
            .selected_strategy
            .as_ref()
            .and_then(|s| self.strategies.iter().position(|c| c == s));
        let next = match current {
            Some(i) => (i as isize + direction).rem_euclid(len as isize) as usize,
            None => 0,
        };
        let id = self.strategies[next].clone();
        self.select_strategy(id);
    }

    /// Overwrite the starting capital. No validation: the backend owns that.
    pub fn set_capital(&mut self, value: f64) {
        self.initial_capital = value;
    }

    pub fn begin_capital_edit(&mut self) {
        self.capital_input = Some(format_capital_input(self.initial_capital));
    }

    pub fn cancel_capital_edit(&mut self) {
        self.capital_input = None;
    }

    /// Close the editor and store whatever number the text parses to.
    pub fn commit_capital_edit(&mut self) {
        if let Some(text) = self.capital_input.take() {
            self.set_capital(parse_capital(&text));
        }
    }

    /// Start a single-strategy backtest. Returns whether a request was issued.
    pub fn run_backtest(&mut self) -> bool {
        if self.busy {
            return false;
        }
        let Some(strategy) = self.selected_strategy.clone().filter(|s| !s.is_empty()) else {
            return false;
        };

        self.busy = true;
        let sent = self.send(
            WorkerCommand::RunBacktest {
                strategy: strategy.clone(),
                initial_capital: self.initial_capital,
            },
            ErrorCategory::Backtest,
        );
        if sent {
            self.set_status(format!("Running {strategy} backtest..."));
        } else {
            self.busy = false;
        }
        sent
    }

    /// Compare every strategy in the catalog. Returns whether a request was issued.
    pub fn run_compare(&mut self) -> bool {
        if self.busy {
            return false;
        }

        self.busy = true;
        let sent = self.send(
            WorkerCommand::Compare {
                strategies: self.strategies.clone(),
                initial_capital: self.initial_capital,
            },
            ErrorCategory::Compare,
        );
        if sent {
            self.set_status(format!("Comparing {} strategies...", self.strategies.len()));
        } else {
            self.busy = false;
        }
        sent
    }

    // ── Worker responses ──────────────────────────────────────────────

    /// Drain every response the worker has produced so far.
    pub fn drain_worker(&mut self) {
        while let Ok(resp) = self.worker_rx.try_recv() {
            self.apply_response(resp);
        }
    }

    /// Fold one worker response into state. Failures leave the affected slice
    /// at its previous value.
    pub fn apply_response(&mut self, resp: WorkerResponse) {
        match resp {
            WorkerResponse::Strategies(Ok(list)) => self.apply_catalog(list),
            WorkerResponse::Strategies(Err(e)) => {
                self.record_failure(ErrorCategory::Strategies, "Error fetching strategies", &e);
            }
            WorkerResponse::Prices(Ok(points)) => {
                self.prices = recent_window(&points, self.price_window);
            }
            WorkerResponse::Prices(Err(e)) => {
                self.record_failure(ErrorCategory::Prices, "Error fetching stock data", &e);
            }
            WorkerResponse::BacktestDone(outcome) => {
                self.busy = false;
                match outcome {
                    Ok(result) => {
                        self.set_status(format!("{} backtest complete", result.strategy));
                        self.backtest = Some(*result);
                        self.active_panel = Panel::Backtest;
                    }
                    Err(e) => {
                        self.record_failure(ErrorCategory::Backtest, "Error running backtest", &e);
                    }
                }
            }
            WorkerResponse::CompareDone(outcome) => {
                self.busy = false;
                match outcome {
                    Ok(cmp) => {
                        self.set_status(format!("Compared {} strategies", cmp.len()));
                        self.comparison = Some(cmp);
                        self.active_panel = Panel::Compare;
                    }
                    Err(e) => {
                        self.record_failure(ErrorCategory::Compare, "Error comparing strategies", &e);
                    }
                }
            }
        }
    }

    /// Replace the catalog. The selection survives only if it is still listed;
    /// otherwise the first entry becomes the default. An empty catalog leaves
    /// the selection alone.
    fn apply_catalog(&mut self, list: Vec<String>) {
        if list.is_empty() {
            self.set_warning("Backend returned no strategies");
        }
        self.strategies = list;
        let still_listed = self
            .selected_strategy
            .as_ref()
            .is_some_and(|s| self.strategies.contains(s));
        if !still_listed {
            if let Some(first) = self.strategies.first().cloned() {
                self.selected_strategy = Some(first);
            }
        }
    }

    fn send(&mut self, cmd: WorkerCommand, category: ErrorCategory) -> bool {
        if self.worker_tx.send(cmd).is_err() {
            self.push_error(category, "Background worker is not running".to_string());
            return false;
        }
        true
    }

    fn record_failure(&mut self, category: ErrorCategory, what: &str, err: &ApiError) {
        self.push_error(category, format!("{what}: {err}"));
    }

    // ── Notices ───────────────────────────────────────────────────────

    /// Push an error to the history, capping at 50.
    pub fn push_error(&mut self, category: ErrorCategory, message: String) {
        let record = ErrorRecord {
            timestamp: chrono::Local::now().naive_local(),
            category,
            message: message.clone(),
        };
        self.error_history.push_front(record);
        if self.error_history.len() > ERROR_HISTORY_CAP {
            self.error_history.pop_back();
        }
        self.status_message = Some((message, StatusLevel::Error));
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}

/// Parse the capital field the way a numeric form input coerces text:
/// blank is zero, anything unparseable is NaN.
pub fn parse_capital(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Seed text for the capital editor.
fn format_capital_input(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.0}")
    } else if value.is_finite() {
        value.to_string()
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    use stratview_core::{StrategyRun, ValuePoint};

    fn make_app() -> (AppState, Receiver<WorkerCommand>, Sender<WorkerResponse>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();
        let app = AppState::new(&DashboardConfig::default(), cmd_tx, resp_rx);
        (app, cmd_rx, resp_tx)
    }

    fn run(final_value: f64) -> StrategyRun {
        StrategyRun {
            final_value,
            metrics: Default::default(),
            trade_history: Vec::new(),
            portfolio_history: vec![ValuePoint {
                date: chrono::NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                value: final_value,
            }],
        }
    }

    fn transport_error() -> ApiError {
        ApiError::Transport {
            path: "/backtest",
            message: "connection reset".into(),
        }
    }

    #[test]
    fn panel_cycle() {
        assert_eq!(Panel::Prices.next(), Panel::Backtest);
        assert_eq!(Panel::Compare.next(), Panel::Prices);
        assert_eq!(Panel::Prices.prev(), Panel::Compare);
        for i in 0..3 {
            assert_eq!(Panel::from_index(i).unwrap().index(), i);
        }
        assert!(Panel::from_index(3).is_none());
    }

    #[test]
    fn defaults_come_from_config() {
        let (app, _cmd_rx, _resp_tx) = make_app();
        assert_eq!(app.initial_capital, 100_000.0);
        assert!(app.selected_strategy.is_none());
        assert!(app.prices.is_empty());
        assert!(!app.is_busy());
    }

    #[test]
    fn startup_issues_two_independent_fetches() {
        let (mut app, cmd_rx, _resp_tx) = make_app();
        app.request_startup_data();
        let cmds: Vec<WorkerCommand> = cmd_rx.try_iter().collect();
        assert_eq!(cmds, vec![WorkerCommand::LoadStrategies, WorkerCommand::LoadPrices]);
        assert!(!app.is_busy());
    }

    #[test]
    fn catalog_selects_first_entry() {
        let (mut app, _cmd_rx, _resp_tx) = make_app();
        app.apply_response(WorkerResponse::Strategies(Ok(vec![
            "MovingAverage".into(),
            "RSI".into(),
        ])));
        assert_eq!(app.selected_strategy.as_deref(), Some("MovingAverage"));
    }

    #[test]
    fn empty_catalog_keeps_selection_empty() {
        let (mut app, _cmd_rx, _resp_tx) = make_app();
        app.apply_response(WorkerResponse::Strategies(Ok(Vec::new())));
        assert!(app.strategies.is_empty());
        assert!(app.selected_strategy.is_none());
        assert!(!app.can_run_backtest());
    }

    #[test]
    fn reload_keeps_a_still_listed_selection() {
        let (mut app, _cmd_rx, _resp_tx) = make_app();
        app.apply_response(WorkerResponse::Strategies(Ok(vec!["A".into(), "B".into()])));
        app.select_strategy("B");
        app.apply_response(WorkerResponse::Strategies(Ok(vec!["A".into(), "B".into()])));
        assert_eq!(app.selected_strategy.as_deref(), Some("B"));
        app.apply_response(WorkerResponse::Strategies(Ok(vec!["C".into()])));
        assert_eq!(app.selected_strategy.as_deref(), Some("C"));
    }

    #[test]
    fn selection_cycles_through_catalog() {
        let (mut app, _cmd_rx, _resp_tx) = make_app();
        app.apply_response(WorkerResponse::Strategies(Ok(vec![
            "A".into(),
            "B".into(),
            "C".into(),
        ])));
        app.select_next_strategy();
        assert_eq!(app.selected_strategy.as_deref(), Some("B"));
        app.select_prev_strategy();
        app.select_prev_strategy();
        assert_eq!(app.selected_strategy.as_deref(), Some("C"));
        app.select_next_strategy();
        assert_eq!(app.selected_strategy.as_deref(), Some("A"));
    }

    #[test]
    fn strategies_failure_keeps_catalog() {
        let (mut app, _cmd_rx, _resp_tx) = make_app();
        app.apply_response(WorkerResponse::Strategies(Ok(vec!["RSI".into()])));
        app.apply_response(WorkerResponse::Strategies(Err(transport_error())));
        assert_eq!(app.strategies, vec!["RSI".to_string()]);
        assert_eq!(app.error_history.len(), 1);
        assert_eq!(app.error_history[0].category, ErrorCategory::Strategies);
    }

    #[test]
    fn prices_are_truncated_to_window() {
        let (mut app, _cmd_rx, _resp_tx) = make_app();
        let start = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let points: Vec<PricePoint> = (0..90)
            .map(|i| PricePoint::new(start + chrono::Days::new(i), i as f64))
            .collect();
        app.apply_response(WorkerResponse::Prices(Ok(points.clone())));
        assert_eq!(app.prices.len(), 30);
        assert_eq!(app.prices[..], points[60..]);
    }

    #[test]
    fn prices_failure_on_first_load_stays_empty() {
        let (mut app, _cmd_rx, _resp_tx) = make_app();
        app.apply_response(WorkerResponse::Prices(Err(transport_error())));
        assert!(app.prices.is_empty());
        assert!(matches!(app.status_message, Some((_, StatusLevel::Error))));
    }

    #[test]
    fn backtest_without_selection_is_a_no_op() {
        let (mut app, cmd_rx, _resp_tx) = make_app();
        assert!(!app.run_backtest());
        assert!(!app.is_busy());
        assert!(cmd_rx.try_recv().is_err());
        assert!(app.status_message.is_none());

        app.select_strategy("");
        assert!(!app.run_backtest());
        assert!(cmd_rx.try_recv().is_err());
    }

    #[test]
    fn backtest_sets_busy_and_sends_request() {
        let (mut app, cmd_rx, _resp_tx) = make_app();
        app.select_strategy("RSI");
        app.set_capital(25_000.0);
        assert!(app.run_backtest());
        assert!(app.is_busy());
        assert_eq!(
            cmd_rx.try_recv().unwrap(),
            WorkerCommand::RunBacktest {
                strategy: "RSI".into(),
                initial_capital: 25_000.0
            }
        );
    }

    #[test]
    fn busy_gates_both_triggers() {
        let (mut app, cmd_rx, _resp_tx) = make_app();
        app.apply_response(WorkerResponse::Strategies(Ok(vec!["RSI".into(), "MACD".into()])));
        assert!(app.run_backtest());
        assert!(!app.can_run_backtest());
        assert!(!app.can_run_compare());

        assert!(!app.run_backtest());
        assert!(!app.run_compare());
        assert_eq!(cmd_rx.try_iter().count(), 1);
        assert!(app.comparison.is_none());
    }

    #[test]
    fn selection_may_change_while_busy() {
        let (mut app, cmd_rx, _resp_tx) = make_app();
        app.select_strategy("RSI");
        app.run_backtest();
        app.select_strategy("MACD");
        assert!(app.is_busy());
        assert_eq!(app.selected_strategy.as_deref(), Some("MACD"));
        assert_eq!(cmd_rx.try_iter().count(), 1);
    }

    #[test]
    fn backtest_success_replaces_result_and_clears_busy() {
        let (mut app, _cmd_rx, _resp_tx) = make_app();
        app.select_strategy("RSI");
        app.run_backtest();
        app.apply_response(WorkerResponse::BacktestDone(Ok(Box::new(BacktestResult {
            strategy: "RSI".into(),
            run: run(123.0),
        }))));
        assert!(!app.is_busy());
        assert_eq!(app.backtest.as_ref().unwrap().run.final_value, 123.0);
        assert_eq!(app.active_panel, Panel::Backtest);
    }

    #[test]
    fn backtest_failure_keeps_previous_result_and_clears_busy() {
        let (mut app, _cmd_rx, _resp_tx) = make_app();
        app.backtest = Some(BacktestResult {
            strategy: "RSI".into(),
            run: run(1.0),
        });
        app.select_strategy("RSI");
        app.run_backtest();
        app.apply_response(WorkerResponse::BacktestDone(Err(transport_error())));
        assert!(!app.is_busy());
        assert_eq!(app.backtest.as_ref().unwrap().run.final_value, 1.0);
        assert_eq!(app.error_history[0].category, ErrorCategory::Backtest);
    }

    #[test]
    fn compare_sends_whole_catalog() {
        let (mut app, cmd_rx, _resp_tx) = make_app();
        app.apply_response(WorkerResponse::Strategies(Ok(vec!["RSI".into(), "MACD".into()])));
        app.select_strategy("MACD");
        app.set_capital(10.0);
        assert!(app.run_compare());
        assert_eq!(
            cmd_rx.try_recv().unwrap(),
            WorkerCommand::Compare {
                strategies: vec!["RSI".into(), "MACD".into()],
                initial_capital: 10.0
            }
        );
    }

    #[test]
    fn compare_runs_without_selection() {
        let (mut app, cmd_rx, _resp_tx) = make_app();
        assert!(app.run_compare());
        assert!(app.is_busy());
        assert_eq!(cmd_rx.try_iter().count(), 1);
    }

    #[test]
    fn compare_outcomes() {
        let (mut app, _cmd_rx, _resp_tx) = make_app();
        app.run_compare();
        let cmp: ComparisonResult = vec![("RSI".to_string(), run(5.0))].into_iter().collect();
        app.apply_response(WorkerResponse::CompareDone(Ok(cmp.clone())));
        assert!(!app.is_busy());
        assert_eq!(app.comparison.as_ref(), Some(&cmp));

        app.run_compare();
        app.apply_response(WorkerResponse::CompareDone(Err(transport_error())));
        assert!(!app.is_busy());
        assert_eq!(app.comparison.as_ref(), Some(&cmp));
    }

    #[test]
    fn dead_worker_releases_busy() {
        let (mut app, cmd_rx, _resp_tx) = make_app();
        drop(cmd_rx);
        app.select_strategy("RSI");
        assert!(!app.run_backtest());
        assert!(!app.is_busy());
        assert_eq!(app.error_history[0].category, ErrorCategory::Backtest);
    }

    #[test]
    fn drain_applies_everything_queued() {
        let (mut app, _cmd_rx, resp_tx) = make_app();
        resp_tx.send(WorkerResponse::Prices(Ok(Vec::new()))).unwrap();
        resp_tx
            .send(WorkerResponse::Strategies(Ok(vec!["RSI".into()])))
            .unwrap();
        app.drain_worker();
        assert_eq!(app.selected_strategy.as_deref(), Some("RSI"));
    }

    #[test]
    fn capital_editor_commits_parsed_values() {
        let (mut app, _cmd_rx, _resp_tx) = make_app();
        app.begin_capital_edit();
        assert_eq!(app.capital_input.as_deref(), Some("100000"));

        app.capital_input = Some("-500".into());
        app.commit_capital_edit();
        assert_eq!(app.initial_capital, -500.0);
        assert!(app.capital_input.is_none());

        app.capital_input = Some("12abc".into());
        app.commit_capital_edit();
        assert!(app.initial_capital.is_nan());

        app.begin_capital_edit();
        assert_eq!(app.capital_input.as_deref(), Some(""));
        app.cancel_capital_edit();
        assert!(app.initial_capital.is_nan());
    }

    #[test]
    fn parse_capital_coercion() {
        assert_eq!(parse_capital(""), 0.0);
        assert_eq!(parse_capital("  2500.5 "), 2500.5);
        assert_eq!(parse_capital("0"), 0.0);
        assert!(parse_capital("1,000").is_nan());
    }

    #[test]
    fn error_history_caps_at_50() {
        let (mut app, _cmd_rx, _resp_tx) = make_app();
        for i in 0..60 {
            app.push_error(ErrorCategory::Prices, format!("error {i}"));
        }
        assert_eq!(app.error_history.len(), 50);
        assert!(app.error_history[0].message.contains("59"));
    }

    #[test]
    fn error_categories_name_their_request() {
        let ops: Vec<String> = ErrorCategory::ALL.iter().map(|c| c.operation()).collect();
        assert_eq!(
            ops,
            [
                "GET /strategies",
                "GET /stock-data",
                "POST /backtest",
                "POST /compare-strategies"
            ]
        );
    }
}
