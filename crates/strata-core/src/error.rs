//! Error types for grid construction.
//!
//! Grids validate eagerly: every error in this module is raised by a
//! constructor, and no query on a constructed grid can fail. Variants carry
//! the offending axis and value so a caller can diagnose a bad configuration
//! without re-deriving internal state.

use crate::axis::Axis;
use crate::topology::Topology;
use std::error::Error;
use std::fmt;

/// An individually invalid size, extent, or halo input.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Interior size below 1.
    InvalidSize {
        /// Offending axis.
        axis: Axis,
        /// Supplied size.
        size: usize,
    },
    /// A Flat axis must have exactly one interior cell.
    FlatSize {
        /// Offending axis.
        axis: Axis,
        /// Supplied size.
        size: usize,
    },
    /// Bounds on a non-Flat axis are inverted, empty, or not finite in the
    /// grid's precision.
    InvalidExtent {
        /// Offending axis.
        axis: Axis,
        /// Supplied lower bound.
        lower: f64,
        /// Supplied upper bound.
        upper: f64,
    },
    /// A Flat axis must collapse to a single point.
    FlatExtent {
        /// Offending axis.
        axis: Axis,
        /// Supplied lower bound.
        lower: f64,
        /// Supplied upper bound.
        upper: f64,
    },
    /// A Flat axis carries no halo.
    FlatHalo {
        /// Offending axis.
        axis: Axis,
        /// Supplied halo width.
        halo: usize,
    },
    /// Size plus halo does not fit signed logical-index arithmetic.
    DimensionTooLarge {
        /// Offending axis.
        axis: Axis,
        /// Supplied size.
        size: usize,
        /// Supplied halo width.
        halo: usize,
        /// Largest permitted `size + 2 * halo`.
        max: usize,
    },
}

impl ConfigError {
    /// The axis this error is about.
    pub fn axis(&self) -> Axis {
        match self {
            Self::InvalidSize { axis, .. }
            | Self::FlatSize { axis, .. }
            | Self::InvalidExtent { axis, .. }
            | Self::FlatExtent { axis, .. }
            | Self::FlatHalo { axis, .. }
            | Self::DimensionTooLarge { axis, .. } => *axis,
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { axis, size } => {
                write!(f, "axis {axis}: size must be at least 1, got {size}")
            }
            Self::FlatSize { axis, size } => {
                write!(f, "axis {axis}: flat axis must have size 1, got {size}")
            }
            Self::InvalidExtent { axis, lower, upper } => write!(
                f,
                "axis {axis}: extent ({lower}, {upper}) must be finite with upper > lower"
            ),
            Self::FlatExtent { axis, lower, upper } => write!(
                f,
                "axis {axis}: flat axis extent must be a single point, got ({lower}, {upper})"
            ),
            Self::FlatHalo { axis, halo } => {
                write!(f, "axis {axis}: flat axis cannot carry a halo, got {halo}")
            }
            Self::DimensionTooLarge {
                axis,
                size,
                halo,
                max,
            } => write!(
                f,
                "axis {axis}: size {size} with halo {halo} exceeds maximum padded size {max}"
            ),
        }
    }
}

impl Error for ConfigError {}

/// An invalid vertical stretching specification.
#[derive(Clone, Debug, PartialEq)]
pub enum StretchingError {
    /// The stretched axis was declared with a topology that cannot stretch.
    FlatAxis {
        /// Declared topology of the stretched axis.
        topology: Topology,
    },
    /// Face sequence length differs from `size + 1`.
    WrongLength {
        /// `size + 1`.
        expected: usize,
        /// Supplied length.
        found: usize,
    },
    /// A face coordinate is NaN or infinite in the grid's precision.
    NonFinite {
        /// Position in the face sequence.
        index: usize,
        /// Supplied value.
        value: f64,
    },
    /// Face coordinates must strictly increase.
    NonMonotonic {
        /// Position of the first face not above its predecessor.
        index: usize,
        /// Face at `index - 1`.
        previous: f64,
        /// Face at `index`.
        value: f64,
    },
    /// First or last face does not match the declared vertical bounds.
    BoundsMismatch {
        /// Position in the face sequence (first or last).
        index: usize,
        /// Declared bound.
        expected: f64,
        /// Supplied face coordinate.
        found: f64,
    },
    /// A named generating rule has unusable parameters.
    InvalidRule {
        /// What went wrong.
        reason: String,
    },
}

impl fmt::Display for StretchingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FlatAxis { topology } => {
                write!(f, "stretched axis cannot be {topology}")
            }
            Self::WrongLength { expected, found } => {
                write!(f, "expected {expected} face coordinates, got {found}")
            }
            Self::NonFinite { index, value } => {
                write!(f, "face {index} is not finite: {value}")
            }
            Self::NonMonotonic {
                index,
                previous,
                value,
            } => write!(
                f,
                "faces must strictly increase: face {index} = {value} follows {previous}"
            ),
            Self::BoundsMismatch {
                index,
                expected,
                found,
            } => write!(
                f,
                "face {index} = {found} does not match declared bound {expected}"
            ),
            Self::InvalidRule { reason } => write!(f, "invalid stretching rule: {reason}"),
        }
    }
}

impl Error for StretchingError {}

/// Any error raised while constructing a grid.
#[derive(Clone, Debug, PartialEq)]
pub enum GridError {
    /// Size, extent, or halo input is invalid.
    Config(ConfigError),
    /// Vertical stretching specification is invalid.
    Stretching(StretchingError),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid grid configuration: {e}"),
            Self::Stretching(e) => write!(f, "invalid vertical stretching: {e}"),
        }
    }
}

impl Error for GridError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Stretching(e) => Some(e),
        }
    }
}

impl From<ConfigError> for GridError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<StretchingError> for GridError {
    fn from(e: StretchingError) -> Self {
        Self::Stretching(e)
    }
}
