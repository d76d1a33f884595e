use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Index into the simulated time series of equilibrium states.
///
/// Report JSON keys timesteps with decimal strings ("0", "5", "14").
/// `Timestep` keeps them ordered by numeric value, so a
/// `BTreeMap<Timestep, _>` iterates and serializes in ascending numeric
/// order rather than the lexicographic order of the raw strings.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestep(u32);

impl Timestep {
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    pub fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Timestep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Timestep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestep({})", self.0)
    }
}

impl FromStr for Timestep {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(Timestep)
    }
}
