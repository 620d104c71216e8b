//! StratView CLI: scriptable access to the backtest backend.
//!
//! Commands:
//! - `strategies`: list the strategy catalog
//! - `prices`: print recent closing prices
//! - `backtest`: run one strategy and print its metrics and trades
//! - `compare`: run several strategies (default: the whole catalog) side by side

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use serde::Serialize;

use stratview_core::domain::recent_window;
use stratview_core::format::{format_currency, format_percentage, format_ratio};
use stratview_core::{
    BacktestApi, BacktestResult, ComparisonResult, DashboardConfig, HttpApiClient, PricePoint,
    TradeSide,
};

#[derive(Parser)]
#[command(
    name = "stratview",
    about = "StratView CLI: query the strategy backtest backend"
)]
struct Cli {
    /// Backend base URL (overrides STRATVIEW_API_URL and the config file).
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Config file. Defaults to <config dir>/stratview/config.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print normalized JSON instead of a formatted report: the decoded
    /// records, with dates as YYYY-MM-DD and unmodelled fields dropped.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the strategies the backend offers.
    Strategies,
    /// Print recent closing prices.
    Prices {
        /// How many of the most recent sessions to print. Defaults to the config's price window.
        #[arg(long)]
        last: Option<usize>,
    },
    /// Run a single strategy backtest.
    Backtest {
        /// Strategy id, as listed by `strategies`.
        strategy: String,

        /// Starting capital. Defaults to the config's initial capital.
        #[arg(long, allow_negative_numbers = true)]
        capital: Option<f64>,
    },
    /// Compare strategies over the same capital.
    Compare {
        /// Strategies to compare. Defaults to the full catalog.
        strategies: Vec<String>,

        /// Starting capital. Defaults to the config's initial capital.
        #[arg(long, allow_negative_numbers = true)]
        capital: Option<f64>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config_path = cli.config.unwrap_or_else(DashboardConfig::default_path);
    let config = DashboardConfig::load(&config_path)?
        .with_env()
        .with_api_url(cli.api_url);
    let api = HttpApiClient::from_config(&config)?;
    info!("using backend {}", api.base_url());

    match cli.command {
        Commands::Strategies => {
            let strategies = api.list_strategies()?;
            if cli.json {
                print_json(&strategies)
            } else {
                print!("{}", render_strategies(&strategies));
                Ok(())
            }
        }
        Commands::Prices { last } => {
            let history = api.fetch_price_history()?;
            let window = recent_window(&history, last.unwrap_or(config.price_window));
            if cli.json {
                print_json(&window)
            } else {
                print!("{}", render_prices(&window));
                Ok(())
            }
        }
        Commands::Backtest { strategy, capital } => {
            if strategy.trim().is_empty() {
                bail!("strategy must not be empty");
            }
            let capital = capital.unwrap_or(config.initial_capital);
            let result = api
                .run_backtest(&strategy, capital)
                .with_context(|| format!("backtest of {strategy} failed"))?;
            if cli.json {
                print_json(&result)
            } else {
                print!("{}", render_backtest(&result)?);
                Ok(())
            }
        }
        Commands::Compare {
            strategies,
            capital,
        } => {
            let strategies = if strategies.is_empty() {
                api.list_strategies()?
            } else {
                strategies
            };
            let capital = capital.unwrap_or(config.initial_capital);
            let cmp = api
                .compare_strategies(&strategies, capital)
                .context("comparison failed")?;
            if cli.json {
                print_json(&cmp)
            } else {
                print!("{}", render_comparison(&cmp)?);
                Ok(())
            }
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", to_json(value)?);
    Ok(())
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("failed to encode JSON output")
}

fn render_strategies(strategies: &[String]) -> String {
    if strategies.is_empty() {
        return "No strategies available.\n".to_string();
    }
    let mut out = String::new();
    for name in strategies {
        let _ = writeln!(out, "{name}");
    }
    out
}

fn render_prices(prices: &[PricePoint]) -> String {
    if prices.is_empty() {
        return "No price data.\n".to_string();
    }
    let mut out = String::new();
    let _ = writeln!(out, "{:<12} {:>14}", "Date", "Close");
    let _ = writeln!(out, "{}", "-".repeat(27));
    for p in prices {
        let _ = writeln!(out, "{:<12} {:>14}", p.date.to_string(), format_currency(p.close));
    }
    out
}

/// Metrics block plus trade list. A missing metric is an error, not a blank.
fn render_backtest(result: &BacktestResult) -> Result<String> {
    let run = &result.run;
    let m = run
        .summary()
        .with_context(|| format!("malformed backtest response for {}", result.strategy))?;

    let mut out = String::new();
    let _ = writeln!(out, "=== {} Strategy Results ===", result.strategy);
    let _ = writeln!(out, "Final Value:       {}", format_currency(run.final_value));
    let _ = writeln!(out, "Total Return:      {}", format_percentage(m.total_return));
    let _ = writeln!(out, "Annualized Return: {}", format_percentage(m.annualized_return));
    let _ = writeln!(out, "Max Drawdown:      {}", format_percentage(m.max_drawdown));
    let _ = writeln!(out, "Sharpe Ratio:      {}", format_ratio(m.sharpe_ratio, 4));
    let _ = writeln!(out, "Total Trades:      {}", run.trade_count());

    if !run.trade_history.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{:<12} {:<5} {:>8} {:>12} {:>14}",
            "Date", "Side", "Shares", "Price", "Amount"
        );
        let _ = writeln!(out, "{}", "-".repeat(55));
        for t in &run.trade_history {
            let (side, amount) = match t.side {
                TradeSide::Buy => ("BUY", -t.cost),
                TradeSide::Sell => ("SELL", t.revenue),
            };
            let _ = writeln!(
                out,
                "{:<12} {:<5} {:>8} {:>12} {:>14}",
                t.date.to_string(),
                side,
                t.shares,
                format_currency(t.price),
                format_currency(amount)
            );
        }
    }
    Ok(out)
}

fn render_comparison(cmp: &ComparisonResult) -> Result<String> {
    if cmp.is_empty() {
        return Ok("No strategies compared.\n".to_string());
    }
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<20} {:>16} {:>10} {:>8}",
        "Strategy", "Final Value", "Return", "Sharpe"
    );
    let _ = writeln!(out, "{}", "-".repeat(57));
    for (name, run) in cmp.iter() {
        let total_return = run
            .total_return()
            .with_context(|| format!("malformed comparison entry for {name}"))?;
        let sharpe = run
            .sharpe_ratio()
            .with_context(|| format!("malformed comparison entry for {name}"))?;
        let _ = writeln!(
            out,
            "{:<20} {:>16} {:>10} {:>8}",
            name,
            format_currency(run.final_value),
            format_percentage(total_return),
            format_ratio(sharpe, 2)
        );
    }
    Ok(out)
}
