//! Composition extraction: per-phase payloads in mole-percent space.

use std::collections::BTreeMap;

use eq_core::Timestep;

use crate::category::PhaseCategory;
use crate::classify::{CategorizedPhases, PhaseComposition};

/// Composition of one phase at one timestep, scaled to mole percent.
#[derive(Debug, Clone, PartialEq)]
pub enum CompositionPayload {
    /// Cation and anion percent maps; an absent sublattice is an empty map.
    Salt {
        cations: BTreeMap<String, f64>,
        anions: BTreeMap<String, f64>,
    },
    /// Species name to percent; a pure phase is 100% itself.
    Species(BTreeMap<String, f64>),
}

/// Phase name to timestep to payload.
pub type CompositionMap = BTreeMap<String, BTreeMap<Timestep, CompositionPayload>>;

impl CategorizedPhases {
    /// Percent-space composition of every phase in `category`.
    pub fn compositions(&self, category: PhaseCategory) -> CompositionMap {
        let mut out = CompositionMap::new();
        for (&timestep, phases) in self.category(category) {
            for (name, phase) in phases {
                let payload = match &phase.composition {
                    PhaseComposition::Salt { cations, anions } => CompositionPayload::Salt {
                        cations: to_percent(cations),
                        anions: to_percent(anions),
                    },
                    PhaseComposition::Speciated { species } => {
                        CompositionPayload::Species(to_percent(species))
                    }
                    PhaseComposition::Pure => {
                        CompositionPayload::Species(BTreeMap::from([(name.clone(), 100.0)]))
                    }
                };
                out.entry(name.clone()).or_default().insert(timestep, payload);
            }
        }
        out
    }
}

/// Scale mole fractions to percent. Values are passed through otherwise;
/// rounding is a presentation concern downstream.
fn to_percent(fractions: &BTreeMap<String, f64>) -> BTreeMap<String, f64> {
    fractions
        .iter()
        .map(|(name, fraction)| (name.clone(), fraction * 100.0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use serde_json::json;

    fn categorized(value: serde_json::Value) -> CategorizedPhases {
        classify(&serde_json::from_value(value).expect("test report should parse"))
    }

    #[test]
    fn salt_payload_scales_both_sublattices() {
        let compositions = categorized(json!({
            "0": {
                "data": {
                    "solution phases": {
                        "MSFL_A": {
                            "moles": 1.0,
                            "cations": {
                                "Na": { "mole fraction": 0.6 },
                                "Cs": { "mole fraction": 0.4 }
                            },
                            "anions": { "Cl": { "mole fraction": 1.0 } }
                        }
                    }
                }
            }
        }))
        .compositions(PhaseCategory::Salt);

        let payload = &compositions["MSFL_A"][&Timestep::new(0)];
        match payload {
            CompositionPayload::Salt { cations, anions } => {
                assert_eq!(cations["Na"], 60.0);
                assert_eq!(cations["Cs"], 40.0);
                assert_eq!(anions["Cl"], 100.0);
            }
            other => panic!("expected salt payload, got {other:?}"),
        }
    }

    #[test]
    fn salt_without_ions_yields_empty_maps() {
        let compositions = categorized(json!({
            "0": {
                "data": {
                    "solution phases": { "MSFL_bare": { "moles": 2.0 } }
                }
            }
        }))
        .compositions(PhaseCategory::Salt);

        match &compositions["MSFL_bare"][&Timestep::new(0)] {
            CompositionPayload::Salt { cations, anions } => {
                assert!(cations.is_empty());
                assert!(anions.is_empty());
            }
            other => panic!("expected salt payload, got {other:?}"),
        }
    }

    #[test]
    fn pure_phase_is_fully_itself() {
        let compositions = categorized(json!({
            "0": {
                "data": {
                    "pure condensed phases": { "UO2": { "moles": 1.0 } }
                }
            }
        }))
        .compositions(PhaseCategory::Solid);

        match &compositions["UO2"][&Timestep::new(0)] {
            CompositionPayload::Species(species) => {
                assert_eq!(species.len(), 1);
                assert_eq!(species["UO2"], 100.0);
            }
            other => panic!("expected species payload, got {other:?}"),
        }
    }

    #[test]
    fn speciated_payload_scales_fractions() {
        let compositions = categorized(json!({
            "0": {
                "data": {
                    "solution phases": {
                        "gas_ideal": {
                            "moles": 1.0,
                            "species": {
                                "H2O": { "mole fraction": 0.25 },
                                "CsI": { "mole fraction": "0.75" }
                            }
                        }
                    }
                }
            }
        }))
        .compositions(PhaseCategory::Gas);

        match &compositions["gas_ideal"][&Timestep::new(0)] {
            CompositionPayload::Species(species) => {
                assert_eq!(species["H2O"], 25.0);
                assert_eq!(species["CsI"], 75.0);
            }
            other => panic!("expected species payload, got {other:?}"),
        }
    }

    #[test]
    fn payloads_are_keyed_phase_then_timestep() {
        let compositions = categorized(json!({
            "1": {
                "data": { "pure condensed phases": { "UO2": { "moles": 1.0 } } }
            },
            "3": {
                "data": { "pure condensed phases": { "UO2": { "moles": 2.0 } } }
            }
        }))
        .compositions(PhaseCategory::Solid);

        assert_eq!(compositions.len(), 1);
        let by_timestep = &compositions["UO2"];
        assert_eq!(by_timestep.len(), 2);
        assert!(by_timestep.contains_key(&Timestep::new(1)));
        assert!(by_timestep.contains_key(&Timestep::new(3)));
    }
}
