//! Shared application service layer for combust.
//!
//! This crate provides the interface the CLI (and any other frontend) drives:
//! case and catalog loading, calculation runs with timing and progress,
//! a background calculation worker, and the plain-text report.

pub mod case_service;
pub mod error;
pub mod progress;
pub mod report;
pub mod run_service;
pub mod worker;

// Re-export key types for convenience
pub use case_service::{
    CaseFormat, load_case, load_catalog, render_template, save_case, validate_case,
};
pub use error::{AppError, AppResult};
pub use progress::{RunProgressEvent, RunStage};
pub use report::render_text;
pub use run_service::{RunRequest, RunResponse, RunTimingSummary, run_case, run_case_with_progress};
pub use worker::{CalcWorker, WorkerMessage};
