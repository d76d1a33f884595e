//! eq-report: condensed equilibrium report input boundary.

pub mod schema;

pub use schema::*;

pub type ReportResult<T> = Result<T, ReportError>;

#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Artifact names the upstream workflow writes into the input directory.
pub const REPORT_FILE_NAME: &str = "Condensed_Thermochimica_Report.json";
pub const SURROGATE_FILE_NAME: &str = "surrogate_vector.json";

pub fn load_report(path: &std::path::Path) -> ReportResult<CondensedReport> {
    let content = std::fs::read_to_string(path)?;
    let report: CondensedReport = serde_json::from_str(&content)?;
    Ok(report)
}

pub fn load_surrogate(path: &std::path::Path) -> ReportResult<SurrogateVector> {
    let content = std::fs::read_to_string(path)?;
    let vector: SurrogateVector = serde_json::from_str(&content)?;
    Ok(vector)
}
