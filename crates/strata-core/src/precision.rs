//! Floating-point element precision for grid coordinates and spacings.

use num_traits::Float;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};
use std::iter::Sum;

mod private {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Runtime tag for the element type a grid stores coordinates in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    /// 32-bit IEEE float.
    F32,
    /// 64-bit IEEE float.
    F64,
}

impl ElementType {
    /// Width of one element in bytes.
    pub fn size_of(self) -> usize {
        match self {
            ElementType::F32 => 4,
            ElementType::F64 => 8,
        }
    }
}

/// Element type of grid coordinates: `f32` or `f64`, nothing else.
///
/// Grids are generic over `T: Precision` and monomorphise per width.
/// Configuration values arrive as `f64` and are narrowed once, at
/// construction, through [`Precision::from_f64_lossy`].
pub trait Precision:
    private::Sealed + Float + Sum + Debug + Display + Default + Send + Sync + 'static
{
    /// Runtime tag for this type.
    const ELEMENT_TYPE: ElementType;

    /// `0.5`, used by every cell-center formula.
    const HALF: Self;

    /// Narrow (or pass through) an `f64` configuration value.
    fn from_f64_lossy(v: f64) -> Self;

    /// Widen to `f64` for error reporting and serialization.
    fn as_f64(self) -> f64;

    /// A signed logical index as a coordinate multiplier.
    fn from_index(i: isize) -> Self;
}

impl Precision for f32 {
    const ELEMENT_TYPE: ElementType = ElementType::F32;
    const HALF: Self = 0.5;

    #[inline]
    fn from_f64_lossy(v: f64) -> Self {
        v as f32
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_index(i: isize) -> Self {
        i as f32
    }
}

impl Precision for f64 {
    const ELEMENT_TYPE: ElementType = ElementType::F64;
    const HALF: Self = 0.5;

    #[inline]
    fn from_f64_lossy(v: f64) -> Self {
        v
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self
    }

    #[inline]
    fn from_index(i: isize) -> Self {
        i as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag<T: Precision>() -> ElementType {
        T::ELEMENT_TYPE
    }

    #[test]
    fn element_type_tags() {
        assert_eq!(tag::<f32>(), ElementType::F32);
        assert_eq!(tag::<f64>(), ElementType::F64);
        assert_eq!(ElementType::F32.size_of(), std::mem::size_of::<f32>());
        assert_eq!(ElementType::F64.size_of(), std::mem::size_of::<f64>());
    }

    #[test]
    fn narrowing_overflow_is_not_finite() {
        assert!(!f32::from_f64_lossy(1e300).is_finite());
        assert!(f64::from_f64_lossy(1e300).is_finite());
    }

    #[test]
    fn negative_index_converts() {
        assert_eq!(f64::from_index(-3), -3.0);
        assert_eq!(f32::from_index(-3), -3.0);
    }
}
