//! eq-phases: phase classification, composition extraction, and output
//! document assembly for condensed equilibrium reports.

pub mod assemble;
pub mod category;
pub mod classify;
pub mod composition;
pub mod percent;
pub mod processor;

pub use assemble::{PhaseDocument, PhaseEntry, SaltEntry, SpeciatedEntry};
pub use category::{GAS_PHASE_NAME, PhaseCategory, PhaseKind, SALT_PREFIX, categorize};
pub use classify::{
    CategorizedPhases, CategoryTimeline, ClassifiedPhase, PhaseComposition, PhaseMap, classify,
};
pub use composition::{CompositionMap, CompositionPayload};
pub use processor::{PhaseDocuments, PhaseProcessor};
