//! Strata: structured Cartesian grids for finite-volume models.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Strata sub-crates. For most users, adding `strata` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use strata::prelude::*;
//!
//! // A 2D periodic channel with a stretched vertical column.
//! let config = GridConfig::new(
//!     Triple::new(64, 32, 8),
//!     Triple::new(Topology::Periodic, Topology::Bounded, Topology::Bounded),
//!     Triple::new(
//!         Extent::new(0.0, 6.4e5),
//!         Extent::new(0.0, 3.2e5),
//!         Extent::new(-1.0e3, 0.0),
//!     ),
//! )
//! .with_stretching(StretchingRule::SurfaceRefined { strength: 2.0 });
//!
//! let grid = config.build::<f64>().unwrap();
//! assert_eq!(grid.cell_count(), 64 * 32 * 8);
//! assert_eq!(grid.node(Axis::Z, 8, Location::Face), 0.0);
//!
//! // Solvers hold the grid behind a trait object.
//! let shared: std::sync::Arc<dyn Grid<Float = f64>> = config.build_shared::<f64>().unwrap();
//! let dx = shared.spacing(Axis::X, 1, Location::Center);
//! assert_eq!(dx, 1.0e4);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `strata-core` | Topology tags, axes, extents, precision, errors |
//! | [`grid`] | `strata-grid` | `Grid` trait, grid backends, construction records |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`strata-core`).
///
/// Contains [`types::Topology`], [`types::Axis`], [`types::Extent`], the
/// [`types::Precision`] trait, and the error types.
pub use strata_core as types;

/// Grid trait and backends (`strata-grid`).
///
/// Provides the [`grid::Grid`] trait and concrete backends:
/// [`grid::RegularGrid`] and [`grid::StretchedGrid`], plus
/// [`grid::GridConfig`] for checkpointable construction.
pub use strata_grid as grid;

/// Common imports for typical Strata usage.
///
/// ```rust
/// use strata::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use strata_core::{Axis, Extent, Location, Precision, Topology, Triple};

    // Errors
    pub use strata_core::{ConfigError, GridError, StretchingError};

    // Grids
    pub use strata_grid::{
        AnyGrid, Grid, GridConfig, GridExt, RegularGrid, StretchedGrid, Stretching,
        StretchingRule,
    };
}
