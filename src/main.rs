use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use pending_monitor::config::Config;
use pending_monitor::display::DisplayBoard;
use pending_monitor::pending_client::PendingClient;
use pending_monitor::poller::Poller;
use pending_monitor::MonitorError;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let once = std::env::args().skip(1).any(|arg| arg == "--once");

    match run(once).await {
        Ok(code) => code,
        Err(err) => {
            error!(error = %err, "Monitor failed to start");
            ExitCode::FAILURE
        }
    }
}

async fn run(once: bool) -> Result<ExitCode, MonitorError> {
    let config = Config::load().await;
    let board = Arc::new(DisplayBoard::from_targets(&config.targets)?);
    let client = PendingClient::from_config(&config)?;
    info!(url = %client.endpoint_url(), "Polling endpoint");

    let poller = Arc::new(Poller::new(Arc::new(client), board, config.target_ids()));

    if once {
        return Ok(match poller.tick().await {
            Ok(count) => {
                writeln!(std::io::stdout().lock(), "{count}")?;
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("{err}");
                ExitCode::FAILURE
            }
        });
    }

    let handle = Arc::clone(&poller).start_polling(config.poll_interval());
    tokio::signal::ctrl_c().await?;
    info!(ticks = handle.ticks_started(), "Shutdown requested");
    handle.stop_polling().await;

    Ok(ExitCode::SUCCESS)
}
