//! Structured Cartesian grids for Strata finite-volume models.
//!
//! This crate defines the [`Grid`] trait, the query surface through which
//! solvers, closures, and output writers learn a grid's shape and node
//! coordinates, along with the concrete grid backends and their
//! construction records.
//!
//! # Backends
//!
//! - [`RegularGrid`]: uniform spacing on every axis
//! - [`StretchedGrid`]: uniform horizontal spacing, arbitrary monotonic
//!   vertical faces described by a [`Stretching`]
//!
//! # Construction Records
//!
//! A [`GridConfig`] carries everything needed to rebuild a grid and
//! serializes with serde, so checkpoints can restore the exact grid a run
//! was started with. [`GridConfig::build`] yields an [`AnyGrid`].
//!
//! # Examples
//!
//! ```
//! use strata_core::{Axis, Extent, Location, Topology, Triple};
//! use strata_grid::{Grid, RegularGrid};
//!
//! let grid = RegularGrid::<f64>::new(
//!     Triple::new(4, 4, 1),
//!     Triple::new(Topology::Periodic, Topology::Bounded, Topology::Flat),
//!     Triple::new(Extent::new(0.0, 4.0), Extent::new(0.0, 1.0), Extent::point(0.0)),
//! )
//! .unwrap();
//!
//! assert_eq!(grid.node(Axis::X, 1, Location::Center), 0.5);
//! assert_eq!(grid.index_range(Axis::X, Location::Face, false), 0..=3);
//! assert_eq!(grid.cell_count(), 16);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod grid;
pub mod nodes;
pub mod regular;
pub mod stretched;
pub mod stretching;
pub mod util;

#[cfg(test)]
pub(crate) mod compliance;

pub use config::{AnyGrid, GridConfig};
pub use grid::{Grid, GridExt};
pub use nodes::Nodes;
pub use regular::RegularGrid;
pub use stretched::StretchedGrid;
pub use stretching::{Stretching, StretchingRule};
pub use util::UniformAxis;
