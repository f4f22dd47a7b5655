//! Validated edge weight.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::WfResult;
use crate::numeric::{Real, canonical_bits, ensure_non_negative};

/// A finite, non-negative weight.
///
/// Unlike a raw `f64` this is `Eq + Ord + Hash`, so it can serve as a graph
/// edge label with set semantics.
#[derive(Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct Cost(Real);

impl Cost {
    pub const ZERO: Cost = Cost(0.0);

    pub fn new(value: Real) -> WfResult<Self> {
        ensure_non_negative(value, "edge weight").map(Self)
    }

    pub fn get(self) -> Real {
        self.0
    }
}

impl PartialEq for Cost {
    fn eq(&self, other: &Self) -> bool {
        canonical_bits(self.0) == canonical_bits(other.0)
    }
}

impl Eq for Cost {}

impl Hash for Cost {
    fn hash<H: Hasher>(&self, state: &mut H) {
        canonical_bits(self.0).hash(state);
    }
}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl TryFrom<Real> for Cost {
    type Error = crate::WfError;

    fn try_from(value: Real) -> WfResult<Self> {
        Cost::new(value)
    }
}

impl From<Cost> for Real {
    fn from(cost: Cost) -> Real {
        cost.0
    }
}

impl fmt::Debug for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cost({})", self.0)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
