//! CLI interface and argument parsing
//!
//! The scheduler takes no positional arguments: running the binary
//! performs one scheduling run. The flags only tune logging and the
//! null-token strictness.

use clap::Parser;

/// DiSSCo Export Scheduler
#[derive(Parser, Debug)]
#[command(name = "dissco-export-scheduler")]
#[command(version, about, long_about = None)]
#[command(author = "DiSSCo Contributors")]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Abort before submitting when Keycloak returns no access token,
    /// instead of sending a `Bearer null` header
    #[arg(long, env = "STRICT_AUTH")]
    pub strict_auth: bool,
}
