//! Condensed report schema definitions.

use std::collections::BTreeMap;

use eq_core::Timestep;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A condensed Thermochimica report: one equilibrium record per timestep.
///
/// Timestep keys arrive as decimal strings and are held as [`Timestep`]s,
/// so iteration and re-serialization follow ascending numeric order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct CondensedReport {
    pub timesteps: BTreeMap<Timestep, TimestepRecord>,
}

impl CondensedReport {
    pub fn len(&self) -> usize {
        self.timesteps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timesteps.is_empty()
    }
}

/// One timestep's equilibrium record, keyed by group label.
///
/// Reports carry a single group per timestep in practice ("data" in current
/// writers); `primary` picks the first by label when more appear.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct TimestepRecord {
    pub groups: BTreeMap<String, PhaseGroups>,
}

impl TimestepRecord {
    pub fn primary(&self) -> Option<&PhaseGroups> {
        self.groups.values().next()
    }
}

/// The two phase families an equilibrium record can report.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PhaseGroups {
    #[serde(
        rename = "solution phases",
        default,
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub solution_phases: BTreeMap<String, RawPhase>,

    #[serde(
        rename = "pure condensed phases",
        default,
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub pure_condensed_phases: BTreeMap<String, RawPhase>,
}

/// A phase exactly as reported.
///
/// Numeric fields stay raw [`Value`]s until classification coerces them:
/// upstream writers emit numbers or decimal strings interchangeably, and a
/// malformed field must only cost its own entry, not the parse.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawPhase {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moles: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cations: Option<BTreeMap<String, FractionEntry>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anions: Option<BTreeMap<String, FractionEntry>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub species: Option<BTreeMap<String, FractionEntry>>,
}

/// Per-constituent record inside `cations`/`anions`/`species`.
///
/// The report spells the key "mole fraction", with a space.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FractionEntry {
    #[serde(
        rename = "mole fraction",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub mole_fraction: Option<Value>,
}

/// Surrogate element vector produced by the upstream data loader.
///
/// Opaque to this pipeline: counted in the run manifest, never transformed.
pub type SurrogateVector = BTreeMap<String, Value>;
