//! Vigil CLI
//!
//! Watches a remote CI run until it completes, redrawing a terminal
//! dashboard of its jobs, steps, and annotations on a fixed cadence.

mod cancel;
mod config;
mod screen;
mod selector;
mod watch;

use std::io::{self, IsTerminal};
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use vigil_client::ServiceClient;

use config::Config;
use selector::InquirePrompter;
use watch::{Outcome, WatchOptions};

#[derive(Parser)]
#[command(name = "vigil")]
#[command(about = "Watch a run until it completes, showing its progress", long_about = None)]
struct Cli {
    /// Run ID to watch; prompts among in-progress runs when omitted
    run_id: Option<u64>,

    /// Refresh interval in seconds
    #[arg(short, long, default_value_t = 2, value_parser = clap::value_parser!(u64).range(1..))]
    interval: u64,

    /// Exit with non-zero status if the run fails
    #[arg(long)]
    exit_status: bool,

    /// Maximum number of runs offered for selection
    #[arg(long, default_value_t = 10)]
    limit: usize,

    /// Run service URL
    #[arg(
        long,
        env = "VIGIL_SERVICE_URL",
        default_value = "http://localhost:8080"
    )]
    url: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.run_id.is_none() && !(io::stdin().is_terminal() && io::stdout().is_terminal()) {
        eprintln!("vigil: run ID required when not running interactively");
        return ExitCode::from(1);
    }

    // Windows terminals need ANSI processing switched on before any escapes
    #[cfg(windows)]
    let _ = colored::control::set_virtual_terminal(true);

    let config = Config {
        service_url: cli.url,
    };
    let client = ServiceClient::new(&config.service_url);

    let (handle, token) = cancel::cancel_pair();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            handle.cancel();
        }
    });

    let opts = WatchOptions {
        run_id: cli.run_id,
        interval: Duration::from_secs(cli.interval),
        exit_status: cli.exit_status,
        limit: cli.limit,
        now: chrono::Utc::now,
        supports_cursor_addressing: cfg!(not(windows)),
    };

    let mut out = io::stdout();
    match watch::run_watch(&client, &InquirePrompter, &mut out, &opts, &token).await {
        Ok(Outcome::Success) => ExitCode::SUCCESS,
        Ok(Outcome::SilentFailure) => ExitCode::from(1),
        Ok(Outcome::Interrupted) => ExitCode::from(130),
        Err(err) => {
            eprintln!("vigil: {:#}", err);
            ExitCode::from(1)
        }
    }
}
