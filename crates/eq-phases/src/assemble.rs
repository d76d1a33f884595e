//! Output document assembly.

use std::collections::BTreeMap;

use eq_core::Timestep;
use serde::{Deserialize, Serialize};

use crate::category::PhaseCategory;
use crate::classify::CategorizedPhases;
use crate::composition::CompositionPayload;

/// One phase's flattened output record.
///
/// Untagged on the wire: the composition fields distinguish the variants.
/// Salt records always carry both ion maps, empty or not; gas and solid
/// records always carry the species map.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PhaseEntry {
    Salt(SaltEntry),
    Speciated(SpeciatedEntry),
}

impl PhaseEntry {
    pub fn phase_percent(&self) -> f64 {
        match self {
            PhaseEntry::Salt(entry) => entry.phase_percent,
            PhaseEntry::Speciated(entry) => entry.phase_percent,
        }
    }

    pub fn moles(&self) -> f64 {
        match self {
            PhaseEntry::Salt(entry) => entry.moles,
            PhaseEntry::Speciated(entry) => entry.moles,
        }
    }

    pub fn category(&self) -> PhaseCategory {
        match self {
            PhaseEntry::Salt(entry) => entry.category,
            PhaseEntry::Speciated(entry) => entry.category,
        }
    }
}

/// Record for a molten-salt phase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SaltEntry {
    pub phase_percent: f64,
    pub moles: f64,
    #[serde(rename = "type")]
    pub category: PhaseCategory,
    pub cation_mole_percent: BTreeMap<String, f64>,
    pub anion_mole_percent: BTreeMap<String, f64>,
}

/// Record for a gas or solid phase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpeciatedEntry {
    pub phase_percent: f64,
    pub moles: f64,
    #[serde(rename = "type")]
    pub category: PhaseCategory,
    pub species_mole_percent: BTreeMap<String, f64>,
}

/// Assembled document for one category: timestep to phase name to record.
///
/// Timesteps with no phases in the category are omitted entirely.
pub type PhaseDocument = BTreeMap<Timestep, BTreeMap<String, PhaseEntry>>;

impl CategorizedPhases {
    /// Merge classification, percent shares, and compositions into the
    /// output document for one category.
    pub fn assemble(&self, category: PhaseCategory) -> PhaseDocument {
        let compositions = self.compositions(category);
        let mut document = PhaseDocument::new();

        for (&timestep, phases) in self.category(category) {
            let shares = self.mole_percent(category, timestep);
            let mut entries = BTreeMap::new();

            for (name, by_timestep) in &compositions {
                let Some(payload) = by_timestep.get(&timestep) else {
                    continue;
                };
                let phase_percent = shares.get(name).copied().unwrap_or(0.0);
                let moles = phases.get(name).map(|phase| phase.moles).unwrap_or(0.0);
                let entry = match payload.clone() {
                    CompositionPayload::Salt { cations, anions } => PhaseEntry::Salt(SaltEntry {
                        phase_percent,
                        moles,
                        category,
                        cation_mole_percent: cations,
                        anion_mole_percent: anions,
                    }),
                    CompositionPayload::Species(species) => {
                        PhaseEntry::Speciated(SpeciatedEntry {
                            phase_percent,
                            moles,
                            category,
                            species_mole_percent: species,
                        })
                    }
                };
                entries.insert(name.clone(), entry);
            }

            if !entries.is_empty() {
                document.insert(timestep, entries);
            }
        }

        tracing::info!(
            category = category.key(),
            timesteps = document.len(),
            "assembled phase document"
        );
        document
    }
}
