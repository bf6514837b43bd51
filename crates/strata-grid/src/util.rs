//! Shared helpers for grid backends: input validation, logical index
//! ranges, and the uniform node formulas.

use std::ops::RangeInclusive;

use strata_core::{Axis, ConfigError, Extent, Location, Precision, Topology};

/// Largest `size + 2 * halo` accepted on any axis. Logical indices are
/// `isize` and coordinates are computed as `index * spacing`, so this keeps
/// every index exactly representable.
pub const MAX_PADDED_SIZE: usize = i32::MAX as usize;

/// Check an interior size against the axis topology.
pub fn validate_size(axis: Axis, topology: Topology, size: usize) -> Result<(), ConfigError> {
    if size < 1 {
        return Err(ConfigError::InvalidSize { axis, size });
    }
    if topology.is_flat() && size != 1 {
        return Err(ConfigError::FlatSize { axis, size });
    }
    Ok(())
}

/// Check a halo width against the axis topology and the padded-size limit.
pub fn validate_halo(
    axis: Axis,
    topology: Topology,
    size: usize,
    halo: usize,
) -> Result<(), ConfigError> {
    if topology.is_flat() && halo != 0 {
        return Err(ConfigError::FlatHalo { axis, halo });
    }
    let padded = halo
        .checked_mul(2)
        .and_then(|h| h.checked_add(size))
        .filter(|&p| p <= MAX_PADDED_SIZE);
    if padded.is_none() {
        return Err(ConfigError::DimensionTooLarge {
            axis,
            size,
            halo,
            max: MAX_PADDED_SIZE,
        });
    }
    Ok(())
}

/// Check domain bounds against the axis topology.
///
/// Non-Flat axes need finite bounds with a finite, positive length. Flat
/// axes need a single finite point.
pub fn validate_extent<T: Precision>(
    axis: Axis,
    topology: Topology,
    extent: Extent<T>,
) -> Result<(), ConfigError> {
    let Extent { lower, upper } = extent;
    let invalid = || ConfigError::InvalidExtent {
        axis,
        lower: lower.as_f64(),
        upper: upper.as_f64(),
    };
    if !lower.is_finite() || !upper.is_finite() {
        return Err(invalid());
    }
    if topology.is_flat() {
        if lower != upper {
            return Err(ConfigError::FlatExtent {
                axis,
                lower: lower.as_f64(),
                upper: upper.as_f64(),
            });
        }
        return Ok(());
    }
    let length = extent.length();
    if upper <= lower || !length.is_finite() {
        return Err(invalid());
    }
    Ok(())
}

/// Indices of interior nodes at `location`.
///
/// Cells are `1..=size`. Faces are `0..=size` on a Bounded axis and
/// `0..=size - 1` on a Periodic one, where face `size` is face `0` one
/// period later. A Flat axis has the single index `1`.
pub fn interior_range(topology: Topology, location: Location, size: usize) -> RangeInclusive<isize> {
    let n = size as isize;
    match (topology, location) {
        (Topology::Flat, _) => 1..=1,
        (_, Location::Center) => 1..=n,
        (Topology::Bounded, Location::Face) => 0..=n,
        (Topology::Periodic, Location::Face) => 0..=n - 1,
    }
}

/// [`interior_range`] widened by `halo` on both sides.
pub fn padded_range(
    topology: Topology,
    location: Location,
    size: usize,
    halo: usize,
) -> RangeInclusive<isize> {
    let r = interior_range(topology, location, size);
    if topology.is_flat() {
        return r;
    }
    let h = halo as isize;
    (r.start() - h)..=(r.end() + h)
}

/// Node coordinate on a uniformly spaced axis.
///
/// Computed directly from `index` so no error accumulates across a row:
/// `lower + (i - 1/2) * spacing` at centers, `lower + i * spacing` at faces.
#[inline]
pub fn uniform_node<T: Precision>(lower: T, spacing: T, index: isize, location: Location) -> T {
    let i = T::from_index(index);
    match location {
        Location::Center => lower + (i - T::HALF) * spacing,
        Location::Face => lower + i * spacing,
    }
}

/// One uniformly spaced axis: validated configuration plus its spacing.
#[derive(Clone, Debug, PartialEq)]
pub struct UniformAxis<T> {
    topology: Topology,
    size: usize,
    halo: usize,
    extent: Extent<T>,
    spacing: T,
}

impl<T: Precision> UniformAxis<T> {
    /// Validate and build one axis.
    pub fn new(
        axis: Axis,
        topology: Topology,
        size: usize,
        halo: usize,
        extent: Extent<T>,
    ) -> Result<Self, ConfigError> {
        validate_size(axis, topology, size)?;
        validate_halo(axis, topology, size, halo)?;
        validate_extent(axis, topology, extent)?;
        let spacing = extent.length() / T::from_index(size as isize);
        Ok(Self {
            topology,
            size,
            halo,
            extent,
            spacing,
        })
    }

    /// Boundary topology.
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Interior cell count.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Halo width.
    pub fn halo(&self) -> usize {
        self.halo
    }

    /// Domain bounds.
    pub fn extent(&self) -> Extent<T> {
        self.extent
    }

    /// `length / size`; zero on a Flat axis.
    pub fn spacing(&self) -> T {
        self.spacing
    }

    /// Coordinate of node `index` at `location`. Flat axes answer their
    /// single point for every index.
    #[inline]
    pub fn node(&self, index: isize, location: Location) -> T {
        if self.topology.is_flat() {
            return self.extent.lower;
        }
        uniform_node(self.extent.lower, self.spacing, index, location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_zero_rejected() {
        let err = validate_size(Axis::Y, Topology::Bounded, 0).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidSize {
                axis: Axis::Y,
                size: 0
            }
        );
    }

    #[test]
    fn flat_size_must_be_one() {
        assert!(validate_size(Axis::Z, Topology::Flat, 1).is_ok());
        assert!(matches!(
            validate_size(Axis::Z, Topology::Flat, 2),
            Err(ConfigError::FlatSize { axis: Axis::Z, size: 2 })
        ));
    }

    #[test]
    fn flat_halo_rejected() {
        assert!(matches!(
            validate_halo(Axis::X, Topology::Flat, 1, 3),
            Err(ConfigError::FlatHalo { axis: Axis::X, halo: 3 })
        ));
        assert!(validate_halo(Axis::X, Topology::Flat, 1, 0).is_ok());
    }

    #[test]
    fn halo_overflow_rejected() {
        let err = validate_halo(Axis::X, Topology::Periodic, MAX_PADDED_SIZE, 1).unwrap_err();
        assert!(matches!(err, ConfigError::DimensionTooLarge { .. }));
        assert!(validate_halo(Axis::X, Topology::Periodic, 10, usize::MAX).is_err());
        assert!(validate_halo(Axis::X, Topology::Periodic, MAX_PADDED_SIZE - 2, 1).is_ok());
    }

    #[test]
    fn inverted_and_empty_extents_rejected() {
        for (lo, hi) in [(1.0, 0.0), (1.0, 1.0), (f64::NAN, 1.0), (0.0, f64::INFINITY)] {
            let result = validate_extent(Axis::X, Topology::Bounded, Extent::new(lo, hi));
            assert!(
                matches!(result, Err(ConfigError::InvalidExtent { axis: Axis::X, .. })),
                "({lo}, {hi}) should be rejected"
            );
        }
    }

    #[test]
    fn flat_extent_must_be_a_point() {
        assert!(validate_extent(Axis::Z, Topology::Flat, Extent::point(-3.0f64)).is_ok());
        assert!(matches!(
            validate_extent(Axis::Z, Topology::Flat, Extent::new(0.0f64, 1.0)),
            Err(ConfigError::FlatExtent { .. })
        ));
    }

    #[test]
    fn f32_length_overflow_rejected() {
        let e = Extent::new(-3.0e38f32, 3.0e38);
        assert!(validate_extent(Axis::X, Topology::Bounded, e).is_err());
    }

    #[test]
    fn interior_ranges_by_topology() {
        assert_eq!(interior_range(Topology::Bounded, Location::Center, 4), 1..=4);
        assert_eq!(interior_range(Topology::Bounded, Location::Face, 4), 0..=4);
        assert_eq!(interior_range(Topology::Periodic, Location::Face, 4), 0..=3);
        assert_eq!(interior_range(Topology::Flat, Location::Face, 1), 1..=1);
    }

    #[test]
    fn padded_ranges_add_halo_except_flat() {
        assert_eq!(padded_range(Topology::Bounded, Location::Center, 4, 2), -1..=6);
        assert_eq!(padded_range(Topology::Bounded, Location::Face, 4, 2), -2..=6);
        assert_eq!(padded_range(Topology::Periodic, Location::Face, 4, 2), -2..=5);
        assert_eq!(padded_range(Topology::Flat, Location::Center, 1, 0), 1..=1);
    }

    #[test]
    fn uniform_node_formulas() {
        assert_eq!(uniform_node(10.0f64, 2.0, 0, Location::Face), 10.0);
        assert_eq!(uniform_node(10.0f64, 2.0, 3, Location::Face), 16.0);
        assert_eq!(uniform_node(10.0f64, 2.0, 1, Location::Center), 11.0);
        assert_eq!(uniform_node(10.0f64, 2.0, 0, Location::Center), 9.0);
    }

    #[test]
    fn uniform_axis_flat_node_is_the_point() {
        let a = UniformAxis::new(Axis::Z, Topology::Flat, 1, 0, Extent::point(-7.0f64)).unwrap();
        assert_eq!(a.spacing(), 0.0);
        assert_eq!(a.node(-4, Location::Center), -7.0);
        assert_eq!(a.node(9, Location::Face), -7.0);
    }
}
