//! # Dining Hakkers
//!
//! Seats a table of hakkers and lets them think and eat until the run duration elapses,
//! Ctrl-C is pressed, or an actor stops on a protocol violation.
//!
//! ```bash
//! RUST_LOG=info cargo run -- --hakkers 5 --run-for 60
//! ```

use clap::Parser;
use dining_hakkers::config::TableConfig;
use dining_hakkers::events::EventSink;
use dining_hakkers::lifecycle::DiningTable;
use hakker_runtime::logging::setup_tracing;
use std::time::Duration;
use tracing::{error, info, info_span, Instrument};

#[derive(Debug, Parser)]
#[command(name = "dining-hakkers", about = "Dining philosophers with actors")]
struct Cli {
    /// Number of hakkers (and chopsticks) around the table.
    #[arg(long, env = "DINING_HAKKERS", default_value_t = 5)]
    hakkers: u32,

    /// Thinking time in milliseconds.
    #[arg(long, env = "DINING_THINK_MS", default_value_t = 5_000)]
    think_ms: u64,

    /// Eating time in milliseconds.
    #[arg(long, env = "DINING_EAT_MS", default_value_t = 5_000)]
    eat_ms: u64,

    /// Backoff in milliseconds after failing to get both chopsticks.
    #[arg(long, env = "DINING_RETRY_MS", default_value_t = 10_000)]
    retry_ms: u64,

    /// Maximum random extra added to each backoff, in milliseconds.
    #[arg(long, env = "DINING_JITTER_MS", default_value_t = 0)]
    jitter_ms: u64,

    /// Stop after this many seconds. Runs until Ctrl-C if omitted.
    #[arg(long, env = "DINING_RUN_FOR")]
    run_for: Option<u64>,
}

impl Cli {
    fn table_config(&self) -> TableConfig {
        TableConfig {
            hakkers: self.hakkers,
            think_delay_ms: self.think_ms,
            eat_delay_ms: self.eat_ms,
            retry_delay_ms: self.retry_ms,
            retry_jitter_ms: self.jitter_ms,
        }
    }
}

async fn run_for(limit: Option<u64>) {
    match limit {
        Some(secs) => tokio::time::sleep(Duration::from_secs(secs)).await,
        None => std::future::pending().await,
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let cli = Cli::parse();
    let config = cli.table_config();
    info!(?config, "Starting dining hakkers");

    let mut table = DiningTable::seat(&config, EventSink::disabled())?;

    let span = info_span!("dining_table", hakkers = config.hakkers);
    let failure = async {
        tokio::select! {
            _ = run_for(cli.run_for) => {
                info!("Run duration elapsed");
                None
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted");
                None
            }
            failure = table.next_failure() => failure,
        }
    }
    .instrument(span)
    .await;

    if let Some(failure) = failure {
        error!(error = %failure, "Actor failed, stopping the table");
        let _ = table.shutdown().await;
        return Err(failure.into());
    }

    table.shutdown().await?;
    info!("Application completed successfully");
    Ok(())
}
