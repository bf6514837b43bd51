//! Reusable grid configurations.
//!
//! - [`periodic_channel`]: the 64 x 1 x 1 periodic line over `[-pi, pi]`.
//! - [`stretched_column`]: a 1 x 1 x 3 column with faces `-3, -1.5, -0.5, 0`.
//! - [`ocean_basin`]: a 3D basin with surface-refined vertical levels.
//! - [`slab`]: a 2D grid with a Flat vertical axis.

use std::f64::consts::PI;

use strata_core::{Extent, Topology, Triple};
use strata_grid::{GridConfig, StretchingRule};

/// Periodic in x, Flat in y and z, 64 cells over `[-pi, pi]`.
pub fn periodic_channel() -> GridConfig {
    GridConfig::new(
        Triple::new(64, 1, 1),
        Triple::new(Topology::Periodic, Topology::Flat, Topology::Flat),
        Triple::new(Extent::new(-PI, PI), Extent::point(0.0), Extent::point(0.0)),
    )
}

/// Flat horizontally, three Bounded vertical cells with explicit faces.
pub fn stretched_column() -> GridConfig {
    GridConfig::new(
        Triple::new(1, 1, 3),
        Triple::new(Topology::Flat, Topology::Flat, Topology::Bounded),
        Triple::new(Extent::point(0.0), Extent::point(0.0), Extent::new(-3.0, 0.0)),
    )
    .with_stretching(vec![-3.0, -1.5, -0.5, 0.0])
}

/// Periodic-by-bounded basin, `nz` levels clustered toward the surface.
pub fn ocean_basin(nx: usize, ny: usize, nz: usize) -> GridConfig {
    GridConfig::new(
        Triple::new(nx, ny, nz),
        Triple::new(Topology::Periodic, Topology::Bounded, Topology::Bounded),
        Triple::new(
            Extent::new(0.0, 1.0e6),
            Extent::new(-5.0e5, 5.0e5),
            Extent::new(-4.0e3, 0.0),
        ),
    )
    .with_halo(Triple::new(3, 3, 2))
    .with_stretching(StretchingRule::SurfaceRefined { strength: 2.5 })
}

/// Doubly periodic unit square with a Flat vertical axis.
pub fn slab(n: usize) -> GridConfig {
    GridConfig::new(
        Triple::new(n, n, 1),
        Triple::new(Topology::Periodic, Topology::Periodic, Topology::Flat),
        Triple::new(Extent::new(0.0, 1.0), Extent::new(0.0, 1.0), Extent::point(0.0)),
    )
}
