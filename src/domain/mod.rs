//! Core domain types
//!
//! The export-job request model and the error hierarchy shared by the
//! rest of the crate.

pub mod errors;
pub mod job;

pub use errors::SchedulerError;
pub use job::{ExportJobRequest, SearchParam};

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, SchedulerError>;
