//! Grid construction records and runtime selection of the grid variant.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::regular::RegularGrid;
use crate::stretched::StretchedGrid;
use crate::stretching::Stretching;
use strata_core::{Axis, Extent, GridError, Location, Precision, Topology, Triple};

/// Everything needed to rebuild a grid deterministically.
///
/// A simulation setup phase fills one of these in (or deserializes it from
/// a checkpoint) and calls [`build`](Self::build). Without `stretching`
/// the result is a [`RegularGrid`]; with it, a [`StretchedGrid`].
///
/// # Examples
///
/// ```
/// use strata_core::{Extent, Topology, Triple};
/// use strata_grid::{Grid, GridConfig, Stretching};
///
/// let config = GridConfig::new(
///     Triple::new(32, 32, 4),
///     Triple::new(Topology::Periodic, Topology::Periodic, Topology::Bounded),
///     Triple::new(
///         Extent::new(0.0, 1.0e3),
///         Extent::new(0.0, 1.0e3),
///         Extent::new(-100.0, 0.0),
///     ),
/// )
/// .with_stretching(Stretching::Faces(vec![-100.0, -50.0, -20.0, -5.0, 0.0]));
///
/// let grid = config.build::<f64>().unwrap();
/// assert_eq!(grid.size(), Triple::new(32, 32, 4));
/// assert!(grid.as_stretched().is_some());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Interior cell count per axis.
    pub size: Triple<usize>,
    /// Boundary topology per axis.
    pub topology: Triple<Topology>,
    /// Domain bounds per axis. Flat axes use a single point.
    pub extent: Triple<Extent<f64>>,
    /// Halo width per axis; `None` takes [`Topology::default_halo`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub halo: Option<Triple<usize>>,
    /// Vertical face layout; `None` gives uniform vertical spacing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stretching: Option<Stretching>,
}

impl GridConfig {
    /// A uniformly spaced configuration with default halos.
    pub fn new(size: Triple<usize>, topology: Triple<Topology>, extent: Triple<Extent<f64>>) -> Self {
        Self {
            size,
            topology,
            extent,
            halo: None,
            stretching: None,
        }
    }

    /// Set explicit halo widths.
    pub fn with_halo(mut self, halo: Triple<usize>) -> Self {
        self.halo = Some(halo);
        self
    }

    /// Stretch the vertical axis.
    pub fn with_stretching(mut self, stretching: impl Into<Stretching>) -> Self {
        self.stretching = Some(stretching.into());
        self
    }

    /// Halo widths the built grid will carry.
    pub fn resolved_halo(&self) -> Triple<usize> {
        self.halo
            .unwrap_or_else(|| self.topology.map(Topology::default_halo))
    }

    /// Validate the configuration and build a grid with element type `T`.
    pub fn build<T: Precision>(&self) -> Result<AnyGrid<T>, GridError> {
        let extent = self.extent.map(|e| e.to_precision::<T>());
        let halo = self.resolved_halo();
        match &self.stretching {
            None => RegularGrid::with_halo(self.size, self.topology, extent, halo)
                .map(AnyGrid::Regular)
                .map_err(GridError::from),
            Some(stretching) => {
                StretchedGrid::with_halo(self.size, self.topology, extent, halo, stretching)
                    .map(AnyGrid::Stretched)
            }
        }
    }

    /// [`build`](Self::build), wrapped for sharing across solver components.
    pub fn build_shared<T: Precision>(&self) -> Result<Arc<AnyGrid<T>>, GridError> {
        self.build().map(Arc::new)
    }
}

/// Either grid variant, chosen at runtime from a [`GridConfig`].
///
/// Dispatch is a closed `match`, so hot-loop node queries through
/// `AnyGrid` stay statically resolvable.
#[derive(Clone, Debug, PartialEq)]
pub enum AnyGrid<T: Precision> {
    /// Uniform spacing on every axis.
    Regular(RegularGrid<T>),
    /// Uniform horizontal spacing, stretched vertical.
    Stretched(StretchedGrid<T>),
}

impl<T: Precision> AnyGrid<T> {
    /// The regular grid, if that is the variant.
    pub fn as_regular(&self) -> Option<&RegularGrid<T>> {
        match self {
            AnyGrid::Regular(g) => Some(g),
            AnyGrid::Stretched(_) => None,
        }
    }

    /// The stretched grid, if that is the variant.
    pub fn as_stretched(&self) -> Option<&StretchedGrid<T>> {
        match self {
            AnyGrid::Regular(_) => None,
            AnyGrid::Stretched(g) => Some(g),
        }
    }

    /// Construction record that rebuilds this grid.
    pub fn to_config(&self) -> GridConfig {
        match self {
            AnyGrid::Regular(g) => g.to_config(),
            AnyGrid::Stretched(g) => g.to_config(),
        }
    }
}

impl<T: Precision> From<RegularGrid<T>> for AnyGrid<T> {
    fn from(g: RegularGrid<T>) -> Self {
        AnyGrid::Regular(g)
    }
}

impl<T: Precision> From<StretchedGrid<T>> for AnyGrid<T> {
    fn from(g: StretchedGrid<T>) -> Self {
        AnyGrid::Stretched(g)
    }
}

impl<T: Precision> Grid for AnyGrid<T> {
    type Float = T;

    fn size(&self) -> Triple<usize> {
        match self {
            AnyGrid::Regular(g) => g.size(),
            AnyGrid::Stretched(g) => g.size(),
        }
    }

    fn halo_size(&self) -> Triple<usize> {
        match self {
            AnyGrid::Regular(g) => g.halo_size(),
            AnyGrid::Stretched(g) => g.halo_size(),
        }
    }

    fn topology(&self) -> Triple<Topology> {
        match self {
            AnyGrid::Regular(g) => g.topology(),
            AnyGrid::Stretched(g) => g.topology(),
        }
    }

    fn bounds(&self, axis: Axis) -> Extent<T> {
        match self {
            AnyGrid::Regular(g) => g.bounds(axis),
            AnyGrid::Stretched(g) => g.bounds(axis),
        }
    }

    #[inline]
    fn node(&self, axis: Axis, index: isize, location: Location) -> T {
        match self {
            AnyGrid::Regular(g) => g.node(axis, index, location),
            AnyGrid::Stretched(g) => g.node(axis, index, location),
        }
    }

    #[inline]
    fn spacing(&self, axis: Axis, index: isize, location: Location) -> T {
        match self {
            AnyGrid::Regular(g) => g.spacing(axis, index, location),
            AnyGrid::Stretched(g) => g.spacing(axis, index, location),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stretching::StretchingRule;
    use strata_core::{ConfigError, StretchingError};

    fn ocean_box() -> GridConfig {
        GridConfig::new(
            Triple::new(16, 8, 4),
            Triple::new(Topology::Periodic, Topology::Bounded, Topology::Bounded),
            Triple::new(
                Extent::new(0.0, 1.6e3),
                Extent::new(-400.0, 400.0),
                Extent::new(-200.0, 0.0),
            ),
        )
    }

    #[test]
    fn no_stretching_builds_regular() {
        let g = ocean_box().build::<f64>().unwrap();
        let regular = g.as_regular().expect("regular variant");
        assert_eq!(regular.uniform_spacing(Axis::Z), 50.0);
        assert!(g.as_stretched().is_none());
    }

    #[test]
    fn default_halo_resolves_from_topology() {
        let config = GridConfig::new(
            Triple::new(4, 4, 1),
            Triple::new(Topology::Periodic, Topology::Bounded, Topology::Flat),
            Triple::new(
                Extent::new(0.0, 1.0),
                Extent::new(0.0, 1.0),
                Extent::point(0.0),
            ),
        );
        assert_eq!(config.resolved_halo(), Triple::new(1, 1, 0));
        assert_eq!(config.build::<f32>().unwrap().halo_size(), Triple::new(1, 1, 0));
    }

    #[test]
    fn stretching_builds_stretched() {
        let g = ocean_box()
            .with_halo(Triple::new(2, 2, 2))
            .with_stretching(StretchingRule::Geometric { ratio: 0.8 })
            .build::<f64>()
            .unwrap();
        let s = g.as_stretched().expect("stretched variant");
        assert_eq!(s.z_faces().len(), 5);
        assert_eq!(g.halo_size(), Triple::splat(2));
        assert_eq!(g.node(Axis::Z, 4, Location::Face), 0.0);
    }

    #[test]
    fn build_errors_propagate() {
        let mut config = ocean_box();
        config.size.y = 0;
        assert!(matches!(
            config.build::<f64>(),
            Err(GridError::Config(ConfigError::InvalidSize { axis: Axis::Y, .. }))
        ));

        let config = ocean_box().with_stretching(vec![-200.0, -100.0]);
        assert!(matches!(
            config.build::<f64>(),
            Err(GridError::Stretching(StretchingError::WrongLength { expected: 5, found: 2 }))
        ));
    }

    #[test]
    fn f32_narrowing_overflow_is_an_extent_error() {
        let mut config = ocean_box();
        config.extent.x = Extent::new(0.0, 1.0e40);
        assert!(config.build::<f64>().is_ok());
        assert!(matches!(
            config.build::<f32>(),
            Err(GridError::Config(ConfigError::InvalidExtent { axis: Axis::X, .. }))
        ));
    }

    #[test]
    fn json_checkpoint_rebuilds_identical_grid() {
        let config = ocean_box()
            .with_halo(Triple::new(3, 3, 2))
            .with_stretching(vec![-200.0, -120.0, -60.0, -20.0, 0.0]);
        let original = config.build::<f64>().unwrap();

        let json = serde_json::to_string(&original.to_config()).unwrap();
        let restored: GridConfig = serde_json::from_str(&json).unwrap();
        let rebuilt = restored.build::<f64>().unwrap();

        assert_eq!(rebuilt, original);
        for axis in Axis::ALL {
            for loc in [Location::Center, Location::Face] {
                for i in original.index_range(axis, loc, true) {
                    assert_eq!(rebuilt.node(axis, i, loc), original.node(axis, i, loc));
                }
            }
        }
    }

    #[test]
    fn json_omits_unset_options() {
        let json = serde_json::to_value(ocean_box()).unwrap();
        assert!(json.get("halo").is_none());
        assert!(json.get("stretching").is_none());
        assert_eq!(json["topology"]["x"], "periodic");
        assert_eq!(json["extent"]["z"]["lower"], -200.0);
    }

    #[test]
    fn shared_grid_is_send_and_sync() {
        fn assert_send_sync<S: Send + Sync>(_: &S) {}
        let shared = ocean_box().build_shared::<f64>().unwrap();
        assert_send_sync(&shared);
        let as_dyn: Arc<dyn Grid<Float = f64>> = shared.clone();
        assert_eq!(as_dyn.size(), shared.size());
    }
}
