//! Run orchestration over one condensed report.

use eq_report::{CondensedReport, SurrogateVector};

use crate::assemble::PhaseDocument;
use crate::category::PhaseCategory;
use crate::classify::{CategorizedPhases, classify};

/// The three assembled documents, one per category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhaseDocuments {
    pub salt: PhaseDocument,
    pub gas: PhaseDocument,
    pub solid: PhaseDocument,
}

impl PhaseDocuments {
    pub fn for_category(&self, category: PhaseCategory) -> &PhaseDocument {
        match category {
            PhaseCategory::Salt => &self.salt,
            PhaseCategory::Gas => &self.gas,
            PhaseCategory::Solid => &self.solid,
        }
    }
}

impl CategorizedPhases {
    /// Assemble every category's document from one classification pass.
    pub fn assemble_all(&self) -> PhaseDocuments {
        PhaseDocuments {
            salt: self.assemble(PhaseCategory::Salt),
            gas: self.assemble(PhaseCategory::Gas),
            solid: self.assemble(PhaseCategory::Solid),
        }
    }
}

/// Orchestrates processing of one condensed report.
///
/// A processor is a pure function of its two inputs. The surrogate vector
/// rides along for downstream consumers and is never transformed.
#[derive(Debug, Clone)]
pub struct PhaseProcessor {
    report: CondensedReport,
    surrogate: SurrogateVector,
}

impl PhaseProcessor {
    pub fn new(report: CondensedReport, surrogate: SurrogateVector) -> Self {
        Self { report, surrogate }
    }

    pub fn report(&self) -> &CondensedReport {
        &self.report
    }

    pub fn surrogate(&self) -> &SurrogateVector {
        &self.surrogate
    }

    /// Classification snapshot without assembly.
    pub fn classify(&self) -> CategorizedPhases {
        classify(&self.report)
    }

    /// Classify once, then assemble all three documents.
    pub fn process_all(&self) -> PhaseDocuments {
        self.classify().assemble_all()
    }
}
