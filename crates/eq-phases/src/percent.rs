//! Per-category mole-percent shares.

use std::collections::BTreeMap;

use eq_core::Timestep;

use crate::category::PhaseCategory;
use crate::classify::CategorizedPhases;

impl CategorizedPhases {
    /// Share of total category moles for each phase at `timestep`.
    ///
    /// Returns an empty map when the category has no phases at that
    /// timestep. Classified phases all carry positive moles, so shares are
    /// in (0, 100] and sum to 100 up to float error.
    pub fn mole_percent(
        &self,
        category: PhaseCategory,
        timestep: Timestep,
    ) -> BTreeMap<String, f64> {
        let Some(phases) = self.category(category).get(&timestep) else {
            return BTreeMap::new();
        };
        let total: f64 = phases.values().map(|phase| phase.moles).sum();
        if total <= 0.0 {
            return BTreeMap::new();
        }
        phases
            .iter()
            .map(|(name, phase)| (name.clone(), 100.0 * phase.moles / total))
            .collect()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::classify::classify;
    use eq_core::{Tolerances, nearly_equal};
    use eq_report::CondensedReport;
    use proptest::prelude::*;
    use serde_json::{Map, Value, json};

    fn report_with_solids(moles: &[f64]) -> CondensedReport {
        let mut phases = Map::new();
        for (i, m) in moles.iter().enumerate() {
            phases.insert(format!("phase_{i}"), json!({ "moles": m }));
        }
        let report = json!({ "0": { "data": { "pure condensed phases": Value::Object(phases) } } });
        serde_json::from_value(report).expect("generated report should parse")
    }

    proptest! {
        #[test]
        fn shares_sum_to_one_hundred(moles in prop::collection::vec(1e-9_f64..1e9_f64, 1..12)) {
            let categorized = classify(&report_with_solids(&moles));
            let shares = categorized.mole_percent(PhaseCategory::Solid, eq_core::Timestep::new(0));
            prop_assert_eq!(shares.len(), moles.len());

            let sum: f64 = shares.values().sum();
            let tol = Tolerances { abs: 1e-6, rel: 0.0 };
            prop_assert!(nearly_equal(sum, 100.0, tol), "sum was {}", sum);
        }

        #[test]
        fn every_share_is_positive_and_bounded(moles in prop::collection::vec(1e-6_f64..1e6_f64, 1..8)) {
            let categorized = classify(&report_with_solids(&moles));
            let shares = categorized.mole_percent(PhaseCategory::Solid, eq_core::Timestep::new(0));
            for share in shares.values() {
                prop_assert!(*share > 0.0);
                prop_assert!(*share <= 100.0 + 1e-9);
            }
        }
    }
}
