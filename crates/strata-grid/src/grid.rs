//! The core `Grid` trait and its node-sequence extension.

use std::fmt;
use std::ops::RangeInclusive;

use crate::nodes::Nodes;
use crate::util;
use strata_core::{Axis, ElementType, Extent, Location, Precision, Topology, Triple};

/// Capability set every grid backend provides.
///
/// Solvers, closures, and output writers are handed an immutable grid and
/// only ever ask it questions through this trait: how big it is, what its
/// topology is, and where its nodes sit.
///
/// # Indexing
///
/// Cell `i` spans from face `i - 1` to face `i`. Interior cells are
/// `1..=N`, interior faces `0..=N` (Bounded) or `0..=N - 1` (Periodic),
/// and halo nodes continue both ranges outward by `H`. [`node`](Self::node)
/// and [`spacing`](Self::spacing) accept any `isize` index and never fail.
///
/// # Object Safety
///
/// The trait is usable as `dyn Grid<Float = T>`. Lazy [`Nodes`] sequences
/// come from [`GridExt`], implemented for every grid including trait
/// objects.
///
/// # Thread Safety
///
/// `Sync` is required because a single grid is shared by reference across
/// every worker of a simulation.
pub trait Grid: Send + Sync + fmt::Debug {
    /// Element type of coordinates and spacings.
    type Float: Precision;

    /// Interior cell count per axis.
    fn size(&self) -> Triple<usize>;

    /// Halo width per axis.
    fn halo_size(&self) -> Triple<usize>;

    /// Boundary topology per axis.
    fn topology(&self) -> Triple<Topology>;

    /// Domain bounds along `axis`.
    fn bounds(&self, axis: Axis) -> Extent<Self::Float>;

    /// Coordinate of node `index` at `location` along `axis`.
    fn node(&self, axis: Axis, index: isize, location: Location) -> Self::Float;

    /// Local grid spacing along `axis`.
    ///
    /// At [`Location::Center`] this is the width of cell `index` (face to
    /// face); at [`Location::Face`] it is the distance between the centers
    /// on either side of face `index`.
    fn spacing(&self, axis: Axis, index: isize, location: Location) -> Self::Float;

    /// Domain length per axis.
    fn extent(&self) -> Triple<Self::Float> {
        Triple::from_fn(|axis| self.bounds(axis).length())
    }

    /// Runtime tag for [`Self::Float`].
    fn precision(&self) -> ElementType {
        <Self::Float as Precision>::ELEMENT_TYPE
    }

    /// Logical indices of nodes at `location` along `axis`, with or without
    /// the halo.
    fn index_range(&self, axis: Axis, location: Location, padded: bool) -> RangeInclusive<isize> {
        let topology = self.topology()[axis];
        let size = self.size()[axis];
        if padded {
            util::padded_range(topology, location, size, self.halo_size()[axis])
        } else {
            util::interior_range(topology, location, size)
        }
    }

    /// Storage length of a cell-centered array along `axis`: `size + 2 * halo`.
    fn padded_size(&self, axis: Axis) -> usize {
        self.size()[axis] + 2 * self.halo_size()[axis]
    }

    /// Number of interior cells.
    fn cell_count(&self) -> usize {
        let s = self.size();
        s.x * s.y * s.z
    }
}

/// Lazy node sequences for any [`Grid`], sized or not.
///
/// Blanket-implemented, so `&dyn Grid<Float = T>` and `Arc<dyn Grid<..>>`
/// receivers get the same methods as concrete grids.
pub trait GridExt: Grid {
    /// Node coordinates along `axis` over the padded index range.
    fn nodes(&self, axis: Axis, location: Location) -> Nodes<'_, Self> {
        Nodes::new(self, axis, location, self.index_range(axis, location, true))
    }

    /// Node coordinates along `axis` over the interior index range.
    fn interior_nodes(&self, axis: Axis, location: Location) -> Nodes<'_, Self> {
        Nodes::new(self, axis, location, self.index_range(axis, location, false))
    }
}

impl<G: Grid + ?Sized> GridExt for G {}
