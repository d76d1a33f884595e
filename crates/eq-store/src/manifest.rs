//! Run metadata written alongside the documents.

use eq_phases::PhaseCategory;
use serde::{Deserialize, Serialize};

/// Metadata for one processing run.
///
/// The manifest is bookkeeping, not pipeline output: it carries a
/// wall-clock timestamp, so unlike the three documents it is not expected
/// to be byte-identical across re-runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunManifest {
    pub timestamp: String,
    pub report_digest: String,
    pub timesteps: usize,
    pub phase_counts: CategoryCounts,
    pub surrogate_entries: usize,
    pub outputs: Vec<String>,
}

impl RunManifest {
    /// Build a manifest stamped with the current UTC time.
    pub fn now(
        report_digest: String,
        timesteps: usize,
        phase_counts: CategoryCounts,
        surrogate_entries: usize,
    ) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            report_digest,
            timesteps,
            phase_counts,
            surrogate_entries,
            outputs: PhaseCategory::ALL
                .iter()
                .map(|category| category.output_file().to_string())
                .collect(),
        }
    }
}

/// Classified phase instances per category, summed across timesteps.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CategoryCounts {
    pub salt: usize,
    pub gas: usize,
    pub solid: usize,
}

impl CategoryCounts {
    pub fn get(&self, category: PhaseCategory) -> usize {
        match category {
            PhaseCategory::Salt => self.salt,
            PhaseCategory::Gas => self.gas,
            PhaseCategory::Solid => self.solid,
        }
    }

    pub fn total(&self) -> usize {
        self.salt + self.gas + self.solid
    }
}
