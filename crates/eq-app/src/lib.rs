//! Shared application service layer for equiphase.
//!
//! Centralizes the load/process/save pipeline behind one interface so the
//! CLI and any future frontend invoke identical behavior.

pub mod error;
pub mod pipeline;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use pipeline::{
    PipelineRequest, PipelineSummary, PipelineTiming, ReportSummary, run_pipeline, summarize_input,
};
