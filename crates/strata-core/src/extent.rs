//! Physical bounds of a grid along one axis.

use crate::precision::Precision;
use serde::{Deserialize, Serialize};

/// Closed interval `[lower, upper]` covered by one axis of a grid.
///
/// Non-Flat axes need `upper > lower`; a Flat axis collapses to a single
/// point built with [`Extent::point`].
///
/// # Examples
///
/// ```
/// use strata_core::Extent;
///
/// let x = Extent::new(-1.0, 3.0);
/// assert_eq!(x.length(), 4.0);
///
/// let z = Extent::from_length(1000.0);
/// assert_eq!((z.lower, z.upper), (0.0, 1000.0));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Extent<T> {
    /// Lower bound.
    pub lower: T,
    /// Upper bound.
    pub upper: T,
}

impl<T: Copy> Extent<T> {
    /// Interval between `lower` and `upper`. Validity is checked by grid
    /// construction, not here.
    pub const fn new(lower: T, upper: T) -> Self {
        Self { lower, upper }
    }

    /// Degenerate interval for a Flat axis.
    pub const fn point(at: T) -> Self {
        Self {
            lower: at,
            upper: at,
        }
    }
}

impl<T: Precision> Extent<T> {
    /// Interval `[0, length]`.
    pub fn from_length(length: T) -> Self {
        Self {
            lower: T::zero(),
            upper: length,
        }
    }

    /// `upper - lower`.
    pub fn length(&self) -> T {
        self.upper - self.lower
    }

    /// `true` when `value` lies within the closed interval.
    pub fn contains(&self, value: T) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Both bounds widened to `f64`.
    pub fn to_f64(self) -> Extent<f64> {
        Extent {
            lower: self.lower.as_f64(),
            upper: self.upper.as_f64(),
        }
    }
}

impl Extent<f64> {
    /// Narrow both bounds to the grid precision `T`.
    pub fn to_precision<T: Precision>(self) -> Extent<T> {
        Extent {
            lower: T::from_f64_lossy(self.lower),
            upper: T::from_f64_lossy(self.upper),
        }
    }
}

impl<T: Copy> From<(T, T)> for Extent<T> {
    fn from((lower, upper): (T, T)) -> Self {
        Self { lower, upper }
    }
}
