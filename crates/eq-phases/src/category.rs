//! Phase category assignment rules.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Physical category every reported phase lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseCategory {
    Salt,
    Gas,
    Solid,
}

impl PhaseCategory {
    pub const ALL: [PhaseCategory; 3] = [
        PhaseCategory::Salt,
        PhaseCategory::Gas,
        PhaseCategory::Solid,
    ];

    /// Lowercase key used in output records and log fields.
    pub fn key(self) -> &'static str {
        match self {
            PhaseCategory::Salt => "salt",
            PhaseCategory::Gas => "gas",
            PhaseCategory::Solid => "solid",
        }
    }

    /// File the category's document is written to.
    pub fn output_file(self) -> &'static str {
        match self {
            PhaseCategory::Salt => "Salt.json",
            PhaseCategory::Gas => "Gas.json",
            PhaseCategory::Solid => "Solids.json",
        }
    }
}

impl fmt::Display for PhaseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Which family of the report record a phase came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseKind {
    Solution,
    PureCondensed,
}

/// Name prefix of the molten-salt solution models in the thermodynamic
/// database.
pub const SALT_PREFIX: &str = "MSFL";

/// The one solution phase treated as gas.
pub const GAS_PHASE_NAME: &str = "gas_ideal";

/// Category for a reported phase. Rules are exclusive, first match wins:
/// `MSFL*` solutions are salt, `gas_ideal` (any case) is gas, every other
/// solution phase and every pure condensed phase is solid.
pub fn categorize(kind: PhaseKind, name: &str) -> PhaseCategory {
    match kind {
        PhaseKind::Solution => {
            if name.starts_with(SALT_PREFIX) {
                PhaseCategory::Salt
            } else if name.eq_ignore_ascii_case(GAS_PHASE_NAME) {
                PhaseCategory::Gas
            } else {
                PhaseCategory::Solid
            }
        }
        PhaseKind::PureCondensed => PhaseCategory::Solid,
    }
}
