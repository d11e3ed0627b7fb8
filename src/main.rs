//! trending-client
//!
//! Sends a keyword and period to the trending-topic analysis server and
//! renders the HTML fragment it returns.
//!
//! # Architecture Overview
//!
//! ```text
//!   CLI args / stdin lines
//!          │
//!          ▼
//!   ┌──────────────┐   POST /analyze {keyword, period}   ┌──────────────┐
//!   │ RequestRunner│ ──────────────────────────────────▶ │   analysis   │
//!   │  deadline +  │ ◀────────────────────────────────── │    server    │
//!   │   cancel     │        {"result": "<html>"}         └──────────────┘
//!   └──────┬───────┘
//!          │ loading indicator (stderr), output region (stdout)
//!          ▼
//!      TerminalPage
//!
//!   config file ──▶ ConfigWatcher ──▶ RequestRunner::reload  (interactive)
//!   Ctrl-C      ──▶ RequestRunner::cancel_all
//! ```

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::io::BufReader;

use trending_client::analyze::KNOWN_PERIODS;
use trending_client::config::watcher::{apply_reloads, ConfigWatcher};
use trending_client::lifecycle::session::run_session;
use trending_client::lifecycle::signals;
use trending_client::lifecycle::startup::{resolve_config, Overrides};
use trending_client::observability::{logging, metrics};
use trending_client::{RequestRunner, StaticForm, TerminalPage};

#[derive(Parser)]
#[command(name = "trending-client")]
#[command(about = "Ask the analysis server what is trending for a keyword", long_about = None)]
struct Cli {
    /// Keyword to analyze. Required unless --interactive.
    #[arg(short, long, required_unless_present = "interactive")]
    keyword: Option<String>,

    /// Time window sent verbatim (the server understands Day, Week, Month, Year).
    #[arg(short, long, default_value = "Week")]
    period: String,

    /// Base URL of the analysis server, e.g. http://127.0.0.1:5000
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Abort a request after this many milliseconds.
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Read one keyword per line from stdin; watches --config for changes.
    #[arg(short, long)]
    interactive: bool,

    /// Emit logs as JSON.
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let overrides = Overrides {
        base_url: cli.endpoint.clone(),
        request_ms: cli.timeout_ms,
        json_logs: cli.json_logs,
    };
    let config = resolve_config(cli.config.as_deref(), &overrides)?;

    logging::init_logging(&config.observability);

    tracing::info!(
        url = %config.analyze_url(),
        request_ms = config.timeouts.request_ms,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    if !KNOWN_PERIODS.contains(&cli.period.as_str()) {
        tracing::debug!(period = %cli.period, "Unrecognised period, sending verbatim");
    }

    let terminal = TerminalPage::new();
    let runner = Arc::new(RequestRunner::from_config(&config, terminal.page())?);

    if cli.interactive {
        run_interactive(&cli, runner, overrides).await?;
        return Ok(ExitCode::SUCCESS);
    }

    let keyword = cli.keyword.clone().unwrap_or_default();
    let interrupt = signals::cancel_on_interrupt(runner.clone());
    let outcome = runner.run(&StaticForm::new(keyword, cli.period.clone())).await;
    interrupt.abort();

    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

async fn run_interactive(
    cli: &Cli,
    runner: Arc<RequestRunner>,
    overrides: Overrides,
) -> Result<(), Box<dyn std::error::Error>> {
    // Keep the watcher alive for the whole session.
    let _watcher = match &cli.config {
        Some(path) => {
            let (watcher, updates) = ConfigWatcher::new(path, overrides).spawn()?;
            apply_reloads(runner.clone(), updates);
            Some(watcher)
        }
        None => None,
    };

    let stdin = BufReader::new(tokio::io::stdin());
    let summary = run_session(runner, stdin, &cli.period, signals::interrupted()).await;
    tracing::info!(invoked = summary.invoked, stopped = summary.stopped, "Session finished");
    Ok(())
}
