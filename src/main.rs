// DiSSCo Export Scheduler
// Copyright (c) 2025 DiSSCo Contributors
// Licensed under the MIT License

use clap::Parser;
use dissco_export_scheduler::cli::Cli;
use dissco_export_scheduler::config::AppConfig;
use dissco_export_scheduler::core::schedule::schedule_export_job;
use dissco_export_scheduler::logging::init_logging;
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    // This is optional - if .env doesn't exist, it's silently ignored
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let log_level = cli.log_level.as_deref().unwrap_or("info");
    if let Err(e) = init_logging(log_level) {
        eprintln!("Failed to initialize logging: {e}");
        process::exit(2);
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "DiSSCo Export Scheduler"
    );

    // The environment is read once here; everything downstream works
    // from this snapshot.
    let config = AppConfig::from_env();

    // A rejected job (non-202) is logged inside schedule_export_job and
    // still exits 0; only transport or strict-auth failures are fatal.
    match schedule_export_job(&config, cli.strict_auth).await {
        Ok(_) => process::exit(0),
        Err(e) => {
            tracing::error!(error = %e, "Scheduling run failed");
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
