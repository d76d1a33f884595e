//! Content-based digest of condensed reports.

use eq_report::CondensedReport;
use sha2::{Digest, Sha256};

/// Sha-256 digest of a report's canonical JSON form.
///
/// The report's maps are all ordered, so the digest is reproducible across
/// runs of the same content and changes with any content change. Recorded
/// in the run manifest to tie outputs back to their input.
pub fn compute_report_digest(report: &CondensedReport) -> String {
    let mut hasher = Sha256::new();

    let report_json = serde_json::to_string(report).unwrap_or_default();
    hasher.update(report_json.as_bytes());

    let result = hasher.finalize();
    format!("{:x}", result)
}
