//! Lazy, restartable node-coordinate sequences.

use std::fmt;
use std::iter::FusedIterator;
use std::ops::RangeInclusive;

use crate::grid::Grid;
use strata_core::{Axis, Location};

/// Node coordinates along one axis, evaluated on demand.
///
/// Each element is one call to [`Grid::node`], so the sequence costs no
/// allocation and stays exact. Clone it, or call [`restart`](Self::restart),
/// to walk the same range again.
///
/// # Examples
///
/// ```
/// use strata_core::{Axis, Extent, Location, Topology, Triple};
/// use strata_grid::{Grid, GridExt, RegularGrid};
///
/// let grid = RegularGrid::new(
///     Triple::new(4, 1, 1),
///     Triple::new(Topology::Bounded, Topology::Flat, Topology::Flat),
///     Triple::new(Extent::new(0.0, 4.0), Extent::point(0.0), Extent::point(0.0)),
/// )
/// .unwrap();
///
/// let faces: Vec<f64> = grid.interior_nodes(Axis::X, Location::Face).collect();
/// assert_eq!(faces, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
///
/// // Default halo is one cell each side.
/// let centers = grid.nodes(Axis::X, Location::Center);
/// assert_eq!(centers.len(), 6);
/// assert_eq!(centers.indices(), 0..=5);
/// ```
pub struct Nodes<'g, G: ?Sized> {
    grid: &'g G,
    axis: Axis,
    location: Location,
    start: isize,
    end: isize,
    front: isize,
    back: isize,
}

impl<'g, G: Grid + ?Sized> Nodes<'g, G> {
    /// Sequence over `range` of node indices.
    pub fn new(grid: &'g G, axis: Axis, location: Location, range: RangeInclusive<isize>) -> Self {
        let (start, end) = range.into_inner();
        Self {
            grid,
            axis,
            location,
            start,
            end,
            front: start,
            back: end,
        }
    }

    /// Axis being walked.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Location being walked.
    pub fn location(&self) -> Location {
        self.location
    }

    /// Full index range of the sequence, independent of progress.
    pub fn indices(&self) -> RangeInclusive<isize> {
        self.start..=self.end
    }

    /// Rewind to the first index.
    pub fn restart(&mut self) {
        self.front = self.start;
        self.back = self.end;
    }

    /// Every coordinate in the full range, without consuming `self`.
    pub fn to_vec(&self) -> Vec<G::Float> {
        (self.start..=self.end)
            .map(|i| self.grid.node(self.axis, i, self.location))
            .collect()
    }

    /// Pair each remaining coordinate with its logical index.
    pub fn indexed(self) -> impl Iterator<Item = (isize, G::Float)> + 'g {
        let Nodes {
            grid,
            axis,
            location,
            front,
            back,
            ..
        } = self;
        (front..=back).map(move |i| (i, grid.node(axis, i, location)))
    }

    fn remaining(&self) -> usize {
        if self.front > self.back {
            0
        } else {
            (self.back - self.front) as usize + 1
        }
    }
}

impl<G: ?Sized> Clone for Nodes<'_, G> {
    fn clone(&self) -> Self {
        Self {
            grid: self.grid,
            axis: self.axis,
            location: self.location,
            start: self.start,
            end: self.end,
            front: self.front,
            back: self.back,
        }
    }
}

impl<G: ?Sized> fmt::Debug for Nodes<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Nodes")
            .field("axis", &self.axis)
            .field("location", &self.location)
            .field("indices", &(self.start..=self.end))
            .field("next", &self.front)
            .finish()
    }
}

impl<G: Grid + ?Sized> Iterator for Nodes<'_, G> {
    type Item = G::Float;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front > self.back {
            return None;
        }
        let i = self.front;
        self.front += 1;
        Some(self.grid.node(self.axis, i, self.location))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        if n >= self.remaining() {
            self.front = self.back + 1;
            return None;
        }
        self.front += n as isize;
        self.next()
    }
}

impl<G: Grid + ?Sized> DoubleEndedIterator for Nodes<'_, G> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front > self.back {
            return None;
        }
        let i = self.back;
        self.back -= 1;
        Some(self.grid.node(self.axis, i, self.location))
    }
}

impl<G: Grid + ?Sized> ExactSizeIterator for Nodes<'_, G> {}

impl<G: Grid + ?Sized> FusedIterator for Nodes<'_, G> {}
