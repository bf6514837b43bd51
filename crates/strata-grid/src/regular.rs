//! Uniformly spaced Cartesian grid.

use crate::config::GridConfig;
use crate::grid::Grid;
use crate::util::UniformAxis;
use strata_core::{Axis, ConfigError, Extent, Location, Precision, Topology, Triple};

/// A Cartesian grid with constant spacing along every axis.
///
/// Spacing on axis `a` is `length(a) / size(a)`; centers sit at
/// `lower + (i - 1/2) * spacing` and faces at `lower + i * spacing`.
///
/// # Examples
///
/// ```
/// use std::f64::consts::PI;
/// use strata_core::{Axis, Extent, Location, Topology, Triple};
/// use strata_grid::{Grid, RegularGrid};
///
/// let grid = RegularGrid::new(
///     Triple::new(128, 128, 1),
///     Triple::new(Topology::Periodic, Topology::Bounded, Topology::Bounded),
///     Triple::new(
///         Extent::new(0.0, 2.0 * PI),
///         Extent::new(0.0, 20.0),
///         Extent::new(0.0, 1.0),
///     ),
/// )
/// .unwrap();
///
/// assert_eq!(grid.uniform_spacing(Axis::X), 2.0 * PI / 128.0);
/// assert_eq!(grid.node(Axis::X, 0, Location::Face), 0.0);
/// assert_eq!(grid.halo_size(), Triple::new(1, 1, 1));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RegularGrid<T: Precision> {
    axes: Triple<UniformAxis<T>>,
}

impl<T: Precision> RegularGrid<T> {
    /// Build a grid with the default halo for each axis topology.
    ///
    /// Returns a [`ConfigError`] naming the first offending axis if any
    /// size, extent, or topology combination is invalid.
    pub fn new(
        size: Triple<usize>,
        topology: Triple<Topology>,
        extent: Triple<Extent<T>>,
    ) -> Result<Self, ConfigError> {
        let halo = topology.map(Topology::default_halo);
        Self::with_halo(size, topology, extent, halo)
    }

    /// Build a grid with an explicit halo width per axis.
    pub fn with_halo(
        size: Triple<usize>,
        topology: Triple<Topology>,
        extent: Triple<Extent<T>>,
        halo: Triple<usize>,
    ) -> Result<Self, ConfigError> {
        let build = |axis: Axis| {
            UniformAxis::new(axis, topology[axis], size[axis], halo[axis], extent[axis])
        };
        let axes = match (build(Axis::X), build(Axis::Y), build(Axis::Z)) {
            (Ok(x), Ok(y), Ok(z)) => Triple::new(x, y, z),
            (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => {
                tracing::debug!(error = %e, "rejected regular grid configuration");
                return Err(e);
            }
        };
        let grid = Self { axes };
        tracing::debug!(
            size = ?grid.size(),
            topology = ?grid.topology(),
            halo = ?grid.halo_size(),
            precision = ?T::ELEMENT_TYPE,
            "constructed regular grid"
        );
        Ok(grid)
    }

    /// Constant spacing along `axis`; zero on a Flat axis.
    pub fn uniform_spacing(&self, axis: Axis) -> T {
        self.axes[axis].spacing()
    }

    /// Validated configuration of one axis.
    pub fn axis(&self, axis: Axis) -> &UniformAxis<T> {
        &self.axes[axis]
    }

    /// Construction record that rebuilds this grid.
    pub fn to_config(&self) -> GridConfig {
        GridConfig {
            size: self.size(),
            topology: self.topology(),
            extent: Triple::from_fn(|a| self.axes[a].extent().to_f64()),
            halo: Some(self.halo_size()),
            stretching: None,
        }
    }
}

impl<T: Precision> Grid for RegularGrid<T> {
    type Float = T;

    fn size(&self) -> Triple<usize> {
        Triple::from_fn(|a| self.axes[a].size())
    }

    fn halo_size(&self) -> Triple<usize> {
        Triple::from_fn(|a| self.axes[a].halo())
    }

    fn topology(&self) -> Triple<Topology> {
        Triple::from_fn(|a| self.axes[a].topology())
    }

    fn bounds(&self, axis: Axis) -> Extent<T> {
        self.axes[axis].extent()
    }

    #[inline]
    fn node(&self, axis: Axis, index: isize, location: Location) -> T {
        self.axes[axis].node(index, location)
    }

    #[inline]
    fn spacing(&self, axis: Axis, _index: isize, _location: Location) -> T {
        self.axes[axis].spacing()
    }
}
