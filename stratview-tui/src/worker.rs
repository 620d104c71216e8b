//! Background dispatch: every backend round trip runs off the UI thread.
//!
//! Communication with the TUI main thread is via `mpsc` channels. The
//! dispatcher owns nothing but the API handle; all state lives in `AppState`.
//! Each command runs on its own request thread, so no call waits behind
//! another, and produces exactly one response, success or failure.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::{debug, info, warn};

use stratview_core::api::{ApiError, BacktestApi};
use stratview_core::{BacktestResult, ComparisonResult, PricePoint};

/// Commands sent from the TUI to the worker.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkerCommand {
    LoadStrategies,
    LoadPrices,
    RunBacktest {
        strategy: String,
        initial_capital: f64,
    },
    Compare {
        strategies: Vec<String>,
        initial_capital: f64,
    },
    Shutdown,
}

/// Responses sent from the worker back to the TUI.
#[derive(Debug)]
pub enum WorkerResponse {
    Strategies(Result<Vec<String>, ApiError>),
    Prices(Result<Vec<PricePoint>, ApiError>),
    BacktestDone(Result<Box<BacktestResult>, ApiError>),
    CompareDone(Result<ComparisonResult, ApiError>),
}

/// Spawn the dispatcher thread.
pub fn spawn_worker(
    api: Arc<dyn BacktestApi>,
    rx: Receiver<WorkerCommand>,
    tx: Sender<WorkerResponse>,
) -> std::io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("stratview-worker".into())
        .spawn(move || worker_loop(api, rx, tx))
}

/// Hand every command to a fresh request thread. Returns on `Shutdown` or
/// when the UI drops its sender; requests still in flight are left to finish
/// on their own.
fn worker_loop(api: Arc<dyn BacktestApi>, rx: Receiver<WorkerCommand>, tx: Sender<WorkerResponse>) {
    let mut seq: u64 = 0;
    while let Ok(cmd) = rx.recv() {
        if cmd == WorkerCommand::Shutdown {
            break;
        }
        seq += 1;

        let request_api = Arc::clone(&api);
        let request_tx = tx.clone();
        let request_cmd = cmd.clone();
        let spawned = thread::Builder::new()
            .name(format!("stratview-request-{seq}"))
            .spawn(move || run_request(request_api.as_ref(), request_cmd, &request_tx));

        if let Err(e) = spawned {
            warn!("could not spawn request thread, running inline: {e}");
            run_request(api.as_ref(), cmd, &tx);
        }
    }
    debug!("dispatcher stopped after {seq} requests");
}

fn run_request(api: &dyn BacktestApi, cmd: WorkerCommand, tx: &Sender<WorkerResponse>) {
    if let Some(resp) = handle_command(api, cmd) {
        if tx.send(resp).is_err() {
            debug!("response dropped: UI side is gone");
        }
    }
}

/// Execute one command against the backend. Failures are logged here, at the
/// gateway boundary, and handed back as values. `Shutdown` has no response.
pub fn handle_command(api: &dyn BacktestApi, cmd: WorkerCommand) -> Option<WorkerResponse> {
    let resp = match cmd {
        WorkerCommand::LoadStrategies => {
            let result = api.list_strategies();
            match &result {
                Ok(list) => info!("loaded {} strategies", list.len()),
                Err(e) => warn!("error fetching strategies: {e}"),
            }
            WorkerResponse::Strategies(result)
        }
        WorkerCommand::LoadPrices => {
            let result = api.fetch_price_history();
            match &result {
                Ok(points) => info!("loaded {} price points", points.len()),
                Err(e) => warn!("error fetching stock data: {e}"),
            }
            WorkerResponse::Prices(result)
        }
        WorkerCommand::RunBacktest {
            strategy,
            initial_capital,
        } => {
            let result = api.run_backtest(&strategy, initial_capital);
            match &result {
                Ok(r) => info!("backtest {strategy} finished at {:.2}", r.run.final_value),
                Err(e) => warn!("error running backtest for {strategy}: {e}"),
            }
            WorkerResponse::BacktestDone(result.map(Box::new))
        }
        WorkerCommand::Compare {
            strategies,
            initial_capital,
        } => {
            let result = api.compare_strategies(&strategies, initial_capital);
            match &result {
                Ok(cmp) => info!("comparison finished for {} strategies", cmp.len()),
                Err(e) => warn!("error comparing strategies: {e}"),
            }
            WorkerResponse::CompareDone(result)
        }
        WorkerCommand::Shutdown => return None,
    };
    Some(resp)
}
