//! Per-axis boundary topology.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How one axis of a grid behaves at its edges.
///
/// The set is closed: consumers `match` on it to decide whether index
/// arithmetic wraps, whether halo values come from periodic wraparound or
/// from an external boundary condition, and whether the axis takes part in
/// computation at all.
///
/// # Examples
///
/// ```
/// use strata_core::Topology;
///
/// // Periodic: the halo cell left of cell 1 is the last interior cell.
/// assert_eq!(Topology::Periodic.resolve(0, 8), 8);
/// assert_eq!(Topology::Periodic.resolve(9, 8), 1);
///
/// // Bounded: out-of-range indices clamp to the edge cell.
/// assert_eq!(Topology::Bounded.resolve(0, 8), 1);
/// assert_eq!(Topology::Bounded.resolve(11, 8), 8);
///
/// // Flat: there is only ever one cell.
/// assert_eq!(Topology::Flat.resolve(42, 1), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topology {
    /// Indexing wraps; the interior spans exactly one period.
    Periodic,
    /// Indexing stops at the interior edges; halo cells hold ghost values
    /// supplied by an external boundary condition.
    Bounded,
    /// Degenerate axis with a single cell and zero length.
    Flat,
}

impl Topology {
    /// `true` for [`Topology::Periodic`].
    pub fn is_periodic(self) -> bool {
        self == Topology::Periodic
    }

    /// `true` for [`Topology::Bounded`].
    pub fn is_bounded(self) -> bool {
        self == Topology::Bounded
    }

    /// `true` for [`Topology::Flat`].
    pub fn is_flat(self) -> bool {
        self == Topology::Flat
    }

    /// Halo width used when the caller does not specify one: a single
    /// ghost layer, or none on a Flat axis.
    pub fn default_halo(self) -> usize {
        match self {
            Topology::Periodic | Topology::Bounded => 1,
            Topology::Flat => 0,
        }
    }

    /// Map any logical cell index onto the interior range `1..=size`.
    ///
    /// `size` must be at least 1; grid construction guarantees this.
    pub fn resolve(self, index: isize, size: usize) -> isize {
        let n = size as isize;
        match self {
            Topology::Periodic => match index.rem_euclid(n) {
                0 => n,
                r => r,
            },
            Topology::Bounded => index.clamp(1, n),
            Topology::Flat => 1,
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Topology::Periodic => f.write_str("periodic"),
            Topology::Bounded => f.write_str("bounded"),
            Topology::Flat => f.write_str("flat"),
        }
    }
}
