//! Scheduling orchestration

pub mod schedule;

pub use schedule::{
    schedule_export_job, schedule_export_job_with_backend, ExporterBackendClient, ScheduleOutcome,
};
