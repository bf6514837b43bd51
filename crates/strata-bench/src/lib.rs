//! Benchmark profiles for Strata grids.
//!
//! - [`reference_profile`]: 256x256x64 basin, surface-refined vertical
//! - [`regular_profile`]: the same basin with uniform vertical spacing
//! - [`stress_profile`]: 1024x1024x128 basin for construction cost

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use strata_core::{Extent, Topology, Triple};
use strata_grid::{GridConfig, StretchingRule};

fn basin(nx: usize, ny: usize, nz: usize) -> GridConfig {
    GridConfig::new(
        Triple::new(nx, ny, nz),
        Triple::new(Topology::Periodic, Topology::Bounded, Topology::Bounded),
        Triple::new(
            Extent::new(0.0, 2.0e6),
            Extent::new(-1.0e6, 1.0e6),
            Extent::new(-5.0e3, 0.0),
        ),
    )
    .with_halo(Triple::new(3, 3, 3))
}

/// 256x256x64 basin with tanh vertical clustering (~4M cells).
pub fn reference_profile() -> GridConfig {
    basin(256, 256, 64).with_stretching(StretchingRule::SurfaceRefined { strength: 3.0 })
}

/// [`reference_profile`] without stretching.
pub fn regular_profile() -> GridConfig {
    basin(256, 256, 64)
}

/// 1024x1024x128 basin with geometric vertical stretching.
pub fn stress_profile() -> GridConfig {
    basin(1024, 1024, 128).with_stretching(StretchingRule::Geometric { ratio: 0.97 })
}
