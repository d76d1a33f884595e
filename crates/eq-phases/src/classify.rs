//! Report classification: raw phases into salt/gas/solid timelines.

use std::collections::BTreeMap;

use eq_core::{Timestep, coerce_f64};
use eq_report::{CondensedReport, FractionEntry, RawPhase};

use crate::category::{PhaseCategory, PhaseKind, categorize};

/// A phase that survived classification: positive moles and a composition
/// shape fixed at classification time.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedPhase {
    pub moles: f64,
    pub composition: PhaseComposition,
}

/// Compositional shape of a classified phase.
///
/// Fractions stay in [0, 1] here; percent conversion happens at
/// extraction.
#[derive(Debug, Clone, PartialEq)]
pub enum PhaseComposition {
    /// Molten-salt sublattice composition. Salt-named phases always take
    /// this shape, even when the record also carries a species map.
    Salt {
        cations: BTreeMap<String, f64>,
        anions: BTreeMap<String, f64>,
    },
    /// Mixed phase with per-species mole fractions.
    Speciated { species: BTreeMap<String, f64> },
    /// Single-constituent phase, 100% itself.
    Pure,
}

/// All phases of a classified phase at one timestep, keyed by phase name.
pub type PhaseMap = BTreeMap<String, ClassifiedPhase>;

/// Timestep-indexed phase maps for one category.
pub type CategoryTimeline = BTreeMap<Timestep, PhaseMap>;

/// Classification result: one timeline per category.
///
/// Every report timestep appears in all three timelines, empty or not, so
/// downstream passes can distinguish "category absent here" from "timestep
/// missing from the report".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategorizedPhases {
    salt: CategoryTimeline,
    gas: CategoryTimeline,
    solid: CategoryTimeline,
}

impl CategorizedPhases {
    pub fn category(&self, category: PhaseCategory) -> &CategoryTimeline {
        match category {
            PhaseCategory::Salt => &self.salt,
            PhaseCategory::Gas => &self.gas,
            PhaseCategory::Solid => &self.solid,
        }
    }

    fn category_mut(&mut self, category: PhaseCategory) -> &mut CategoryTimeline {
        match category {
            PhaseCategory::Salt => &mut self.salt,
            PhaseCategory::Gas => &mut self.gas,
            PhaseCategory::Solid => &mut self.solid,
        }
    }

    /// Timesteps present in the source report.
    pub fn timesteps(&self) -> impl Iterator<Item = Timestep> + '_ {
        // all three timelines share the same key set
        self.solid.keys().copied()
    }

    /// Total classified phase instances in a category, across timesteps.
    pub fn phase_count(&self, category: PhaseCategory) -> usize {
        self.category(category).values().map(PhaseMap::len).sum()
    }

    fn seed_timesteps(timesteps: impl Iterator<Item = Timestep> + Clone) -> Self {
        let mut out = Self::default();
        for category in PhaseCategory::ALL {
            let timeline = out.category_mut(category);
            for timestep in timesteps.clone() {
                timeline.insert(timestep, PhaseMap::new());
            }
        }
        out
    }

    fn insert_phase(
        &mut self,
        category: PhaseCategory,
        timestep: Timestep,
        name: &str,
        raw: &RawPhase,
    ) {
        let Some(moles) = positive_moles(name, raw) else {
            return;
        };
        let composition = build_composition(category, raw);
        let slot = self.category_mut(category).entry(timestep).or_default();
        let previous = slot.insert(name.to_string(), ClassifiedPhase { moles, composition });
        if previous.is_some() {
            tracing::warn!(
                phase = name,
                timestep = %timestep,
                "duplicate phase name in record, keeping the later entry"
            );
        }
    }
}

/// Partition every reported phase into the salt/gas/solid timelines.
///
/// Phases with missing, malformed, or non-positive moles are dropped here
/// and never reach any output.
pub fn classify(report: &CondensedReport) -> CategorizedPhases {
    let mut out = CategorizedPhases::seed_timesteps(report.timesteps.keys().copied());

    for (&timestep, record) in &report.timesteps {
        let Some(groups) = record.primary() else {
            continue;
        };

        for (name, raw) in &groups.solution_phases {
            let category = categorize(PhaseKind::Solution, name);
            out.insert_phase(category, timestep, name, raw);
        }
        for (name, raw) in &groups.pure_condensed_phases {
            out.insert_phase(PhaseCategory::Solid, timestep, name, raw);
        }
    }

    for category in PhaseCategory::ALL {
        tracing::info!(
            category = category.key(),
            phases = out.phase_count(category),
            timesteps = out.category(category).len(),
            "classified phases"
        );
    }

    out
}

/// Moles of a raw phase when present, coercible, and strictly positive.
fn positive_moles(name: &str, raw: &RawPhase) -> Option<f64> {
    // a missing moles field counts as zero
    let value = raw.moles.as_ref()?;
    match coerce_f64(value, "moles") {
        Ok(moles) if moles > 0.0 => Some(moles),
        Ok(_) => None,
        Err(err) => {
            tracing::warn!(phase = name, %err, "skipping phase with malformed moles");
            None
        }
    }
}

fn build_composition(category: PhaseCategory, raw: &RawPhase) -> PhaseComposition {
    match category {
        PhaseCategory::Salt => PhaseComposition::Salt {
            cations: coerce_fractions(raw.cations.as_ref()),
            anions: coerce_fractions(raw.anions.as_ref()),
        },
        PhaseCategory::Gas | PhaseCategory::Solid => match raw.species.as_ref() {
            Some(species) => PhaseComposition::Speciated {
                species: coerce_fractions(Some(species)),
            },
            None => PhaseComposition::Pure,
        },
    }
}

/// Per-entry coercion with the skip-and-continue policy: entries without a
/// "mole fraction" key are ignored, malformed ones are logged and dropped,
/// and siblings are unaffected either way.
fn coerce_fractions(entries: Option<&BTreeMap<String, FractionEntry>>) -> BTreeMap<String, f64> {
    let mut out = BTreeMap::new();
    let Some(entries) = entries else {
        return out;
    };
    for (constituent, entry) in entries {
        let Some(value) = entry.mole_fraction.as_ref() else {
            continue;
        };
        match coerce_f64(value, "mole fraction") {
            Ok(fraction) => {
                out.insert(constituent.clone(), fraction);
            }
            Err(err) => {
                tracing::warn!(
                    constituent = constituent.as_str(),
                    %err,
                    "skipping malformed mole fraction"
                );
            }
        }
    }
    out
}
