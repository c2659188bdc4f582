// DiSSCo Export Scheduler
// Copyright (c) 2025 DiSSCo Contributors
// Licensed under the MIT License

//! # DiSSCo Export Scheduler
//!
//! A small automation tool that schedules a data-export job on the DiSSCo
//! exporter backend. Each invocation performs three sequential steps:
//!
//! 1. **Authenticate** against Keycloak using the OAuth2 client-credentials
//!    grant to obtain a short-lived bearer token.
//! 2. **Build** a fixed-shape JSON:API export-job request from configuration.
//! 3. **Submit** the request to the exporter backend's scheduling endpoint,
//!    logging whether the job was accepted.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Scheduling orchestration
//! - [`auth`] - Keycloak token acquisition
//! - [`domain`] - Export-job request model and error types
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dissco_export_scheduler::config::AppConfig;
//! use dissco_export_scheduler::core::schedule::schedule_export_job;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::from_env();
//!     let outcome = schedule_export_job(&config, false).await?;
//!     println!("Accepted: {}", outcome.accepted());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`domain::SchedulerError`]. A rejected
//! scheduling request (any status other than `202 Accepted`) is not an
//! error: it is reported through [`core::schedule::ScheduleOutcome`] and
//! logged, matching the backend's fire-and-forget contract.
//!
//! ## Logging
//!
//! Structured logging uses the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, error};
//!
//! info!(status = 202, "Job scheduled successfully");
//! error!(status = 500, "Failed to schedule job");
//! ```

pub mod auth;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
