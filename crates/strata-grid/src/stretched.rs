//! Cartesian grid with uniform horizontal spacing and a stretched vertical.

use crate::config::GridConfig;
use crate::grid::Grid;
use crate::stretching::Stretching;
use crate::util::{self, UniformAxis};
use strata_core::{Axis, Extent, GridError, Location, Precision, StretchingError, Topology, Triple};

/// A Cartesian grid whose vertical faces are given by an arbitrary
/// strictly increasing sequence.
///
/// The horizontal axes behave exactly like [`RegularGrid`](crate::RegularGrid).
/// Along z, face coordinates, cell centers, cell thicknesses (face to face)
/// and center-to-center spacings are computed once at construction over the
/// whole padded range and looked up afterwards.
///
/// Halo faces continue the interior periodically on a Periodic z axis, and
/// linearly with the boundary cell thickness on a Bounded one.
///
/// # Examples
///
/// ```
/// use strata_core::{Axis, Extent, Location, Topology, Triple};
/// use strata_grid::{Grid, StretchedGrid, Stretching};
///
/// let grid = StretchedGrid::new(
///     Triple::new(1, 1, 4),
///     Triple::new(Topology::Flat, Topology::Flat, Topology::Bounded),
///     Triple::new(Extent::point(0.0), Extent::point(0.0), Extent::new(0.0, 10.0)),
///     &Stretching::Faces(vec![0.0, 1.0, 3.0, 6.0, 10.0]),
/// )
/// .unwrap();
///
/// assert_eq!(grid.face_spacings(), &[1.0, 2.0, 3.0, 4.0]);
/// assert_eq!(grid.node(Axis::Z, 2, Location::Center), 2.0);
/// assert_eq!(grid.spacing(Axis::Z, 1, Location::Face), 1.5);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct StretchedGrid<T: Precision> {
    x: UniformAxis<T>,
    y: UniformAxis<T>,
    z: StretchedAxis<T>,
    stretching: Stretching,
}

impl<T: Precision> StretchedGrid<T> {
    /// Build a grid with the default halo for each axis topology.
    pub fn new(
        size: Triple<usize>,
        topology: Triple<Topology>,
        extent: Triple<Extent<T>>,
        stretching: &Stretching,
    ) -> Result<Self, GridError> {
        let halo = topology.map(Topology::default_halo);
        Self::with_halo(size, topology, extent, halo, stretching)
    }

    /// Build a grid with an explicit halo width per axis.
    ///
    /// Horizontal inputs fail with [`GridError::Config`]; a vertical face
    /// sequence that is the wrong length, not strictly increasing, or does
    /// not span `extent.z` fails with [`GridError::Stretching`].
    pub fn with_halo(
        size: Triple<usize>,
        topology: Triple<Topology>,
        extent: Triple<Extent<T>>,
        halo: Triple<usize>,
        stretching: &Stretching,
    ) -> Result<Self, GridError> {
        let result = Self::build(size, topology, extent, halo, stretching);
        match &result {
            Ok(grid) => tracing::debug!(
                size = ?grid.size(),
                topology = ?grid.topology(),
                halo = ?grid.halo_size(),
                precision = ?T::ELEMENT_TYPE,
                "constructed vertically stretched grid"
            ),
            Err(e) => tracing::debug!(error = %e, "rejected stretched grid configuration"),
        }
        result
    }

    fn build(
        size: Triple<usize>,
        topology: Triple<Topology>,
        extent: Triple<Extent<T>>,
        halo: Triple<usize>,
        stretching: &Stretching,
    ) -> Result<Self, GridError> {
        let horizontal = |axis: Axis| {
            UniformAxis::new(axis, topology[axis], size[axis], halo[axis], extent[axis])
        };
        let x = horizontal(Axis::X)?;
        let y = horizontal(Axis::Y)?;
        let z = StretchedAxis::new(topology.z, size.z, halo.z, extent.z, stretching)?;
        Ok(Self {
            x,
            y,
            z,
            stretching: stretching.clone(),
        })
    }

    /// Interior face coordinates along z, `size.z + 1` of them.
    pub fn z_faces(&self) -> &[T] {
        self.z.interior_faces()
    }

    /// Interior cell thicknesses along z (face to face), `size.z` of them.
    /// These are the finite-volume integration weights.
    pub fn face_spacings(&self) -> &[T] {
        let h = self.z.cached_halo;
        &self.z.cell_widths[h..h + self.z.size]
    }

    /// Center-to-center distances across interior faces `1..size.z`,
    /// `size.z - 1` of them. These are the differencing weights.
    pub fn center_spacings(&self) -> &[T] {
        let h = self.z.cached_halo;
        &self.z.center_spacings[h + 1..h + self.z.size]
    }

    /// Constant spacing along a horizontal axis.
    ///
    /// Returns `None` for [`Axis::Z`], which has no single spacing.
    pub fn uniform_spacing(&self, axis: Axis) -> Option<T> {
        match axis {
            Axis::X => Some(self.x.spacing()),
            Axis::Y => Some(self.y.spacing()),
            Axis::Z => None,
        }
    }

    /// Stretching specification the grid was built from.
    pub fn stretching(&self) -> &Stretching {
        &self.stretching
    }

    /// Construction record that rebuilds this grid.
    pub fn to_config(&self) -> GridConfig {
        GridConfig {
            size: self.size(),
            topology: self.topology(),
            extent: Triple::from_fn(|a| self.bounds(a).to_f64()),
            halo: Some(self.halo_size()),
            stretching: Some(self.stretching.clone()),
        }
    }
}

impl<T: Precision> Grid for StretchedGrid<T> {
    type Float = T;

    fn size(&self) -> Triple<usize> {
        Triple::new(self.x.size(), self.y.size(), self.z.size)
    }

    fn halo_size(&self) -> Triple<usize> {
        Triple::new(self.x.halo(), self.y.halo(), self.z.halo)
    }

    fn topology(&self) -> Triple<Topology> {
        Triple::new(self.x.topology(), self.y.topology(), self.z.topology)
    }

    fn bounds(&self, axis: Axis) -> Extent<T> {
        match axis {
            Axis::X => self.x.extent(),
            Axis::Y => self.y.extent(),
            Axis::Z => self.z.extent,
        }
    }

    #[inline]
    fn node(&self, axis: Axis, index: isize, location: Location) -> T {
        match (axis, location) {
            (Axis::X, _) => self.x.node(index, location),
            (Axis::Y, _) => self.y.node(index, location),
            (Axis::Z, Location::Center) => self.z.center(index),
            (Axis::Z, Location::Face) => self.z.face(index),
        }
    }

    #[inline]
    fn spacing(&self, axis: Axis, index: isize, location: Location) -> T {
        match (axis, location) {
            (Axis::X, _) => self.x.spacing(),
            (Axis::Y, _) => self.y.spacing(),
            (Axis::Z, Location::Center) => self.z.cell_width(index),
            (Axis::Z, Location::Face) => self.z.center_spacing(index),
        }
    }
}

/// Widest halo kept in the cached arrays. Deeper halo indices are
/// computed on demand by the same extension rule.
const MAX_CACHED_HALO: usize = 64;

/// Cached geometry of the stretched axis.
///
/// With `C = min(H, MAX_CACHED_HALO)`, storage covers faces `-C..=N+C`,
/// centers and cell widths `1-C..=N+C`, center spacings `-C..=N+C`.
#[derive(Clone, Debug, PartialEq)]
struct StretchedAxis<T> {
    topology: Topology,
    size: usize,
    halo: usize,
    cached_halo: usize,
    extent: Extent<T>,
    faces: Vec<T>,
    centers: Vec<T>,
    cell_widths: Vec<T>,
    center_spacings: Vec<T>,
}

impl<T: Precision> StretchedAxis<T> {
    fn new(
        topology: Topology,
        size: usize,
        halo: usize,
        extent: Extent<T>,
        stretching: &Stretching,
    ) -> Result<Self, GridError> {
        if topology.is_flat() {
            return Err(StretchingError::FlatAxis { topology }.into());
        }
        util::validate_size(Axis::Z, topology, size)?;
        util::validate_halo(Axis::Z, topology, size, halo)?;
        util::validate_extent(Axis::Z, topology, extent)?;

        let interior = validated_faces(size, extent, stretching)?;
        let cached_halo = halo.min(MAX_CACHED_HALO);
        let (n, h) = (size as isize, cached_halo as isize);
        let face = |j: isize| extend_face(&interior, topology, j);
        let center = |i: isize| (face(i - 1) + face(i)) * T::HALF;

        let faces = (-h..=n + h).map(&face).collect();
        let centers = (1 - h..=n + h).map(&center).collect();
        let cell_widths = (1 - h..=n + h).map(|i| face(i) - face(i - 1)).collect();
        let center_spacings = (-h..=n + h).map(|j| center(j + 1) - center(j)).collect();

        Ok(Self {
            topology,
            size,
            halo,
            cached_halo,
            extent,
            faces,
            centers,
            cell_widths,
            center_spacings,
        })
    }

    fn interior_faces(&self) -> &[T] {
        &self.faces[self.cached_halo..=self.cached_halo + self.size]
    }

    /// Cached entry for logical index `index`, stored at `index + shift`.
    fn cached(values: &[T], index: isize, shift: isize) -> Option<T> {
        index
            .checked_add(shift)
            .and_then(|k| usize::try_from(k).ok())
            .and_then(|k| values.get(k))
            .copied()
    }

    #[inline]
    fn face(&self, j: isize) -> T {
        let h = self.cached_halo as isize;
        Self::cached(&self.faces, j, h)
            .unwrap_or_else(|| extend_face(self.interior_faces(), self.topology, j))
    }

    #[inline]
    fn center(&self, i: isize) -> T {
        let h = self.cached_halo as isize;
        Self::cached(&self.centers, i, h - 1)
            .unwrap_or_else(|| extend_center(self.interior_faces(), self.topology, i))
    }

    #[inline]
    fn cell_width(&self, i: isize) -> T {
        let h = self.cached_halo as isize;
        Self::cached(&self.cell_widths, i, h - 1)
            .unwrap_or_else(|| extend_cell_width(self.interior_faces(), self.topology, i))
    }

    #[inline]
    fn center_spacing(&self, j: isize) -> T {
        let h = self.cached_halo as isize;
        Self::cached(&self.center_spacings, j, h)
            .unwrap_or_else(|| extend_center_spacing(self.interior_faces(), self.topology, j))
    }
}

/// Resolve, narrow, and check the interior faces of the stretched axis.
///
/// End faces within a few ulps of the declared bounds are snapped onto them
/// so the grid's extent is exactly what was declared.
fn validated_faces<T: Precision>(
    size: usize,
    extent: Extent<T>,
    stretching: &Stretching,
) -> Result<Vec<T>, StretchingError> {
    let raw = stretching.faces(size, extent.to_f64())?;
    if raw.len() != size + 1 {
        return Err(StretchingError::WrongLength {
            expected: size + 1,
            found: raw.len(),
        });
    }

    let mut faces = Vec::with_capacity(raw.len());
    for (index, &value) in raw.iter().enumerate() {
        let v = T::from_f64_lossy(value);
        if !v.is_finite() {
            return Err(StretchingError::NonFinite { index, value });
        }
        faces.push(v);
    }

    let scale = extent
        .lower
        .abs()
        .max(extent.upper.abs())
        .max(extent.length());
    let tolerance = T::epsilon() * T::from_index(8) * scale;
    for (index, expected) in [(0, extent.lower), (size, extent.upper)] {
        if (faces[index] - expected).abs() > tolerance {
            return Err(StretchingError::BoundsMismatch {
                index,
                expected: expected.as_f64(),
                found: raw[index],
            });
        }
        faces[index] = expected;
    }

    for (index, pair) in faces.windows(2).enumerate() {
        if pair[1] <= pair[0] {
            return Err(StretchingError::NonMonotonic {
                index: index + 1,
                previous: pair[0].as_f64(),
                value: pair[1].as_f64(),
            });
        }
    }
    Ok(faces)
}

/// Face `j` of an axis whose interior faces are `interior`, continued past
/// either end: by whole periods on a Periodic axis, and with the boundary
/// cell thickness otherwise.
fn extend_face<T: Precision>(interior: &[T], topology: Topology, j: isize) -> T {
    let last = interior.len() - 1;
    let n = last as isize;
    if (0..=n).contains(&j) {
        return interior[j as usize];
    }
    match topology {
        Topology::Periodic => {
            let period = interior[last] - interior[0];
            let wraps = j.div_euclid(n);
            interior[j.rem_euclid(n) as usize] + T::from_index(wraps) * period
        }
        Topology::Bounded | Topology::Flat => {
            if j < 0 {
                interior[0] + T::from_index(j) * (interior[1] - interior[0])
            } else {
                interior[last] + T::from_index(j - n) * (interior[last] - interior[last - 1])
            }
        }
    }
}

/// Interior cell that logical cell `i` repeats on a periodic axis of `n`
/// cells, and how many whole periods it is shifted by.
fn periodic_cell<T: Precision>(i: isize, n: isize) -> (usize, T) {
    let wraps = T::from_index(i.div_euclid(n));
    match i.rem_euclid(n) {
        0 => (n as usize, wraps - T::one()),
        r => (r as usize, wraps),
    }
}

/// Center of cell `i` beyond the cached range, with no integer overflow.
fn extend_center<T: Precision>(interior: &[T], topology: Topology, i: isize) -> T {
    let last = interior.len() - 1;
    let n = last as isize;
    match topology {
        Topology::Periodic => {
            let (cell, wraps) = periodic_cell::<T>(i, n);
            let period = interior[last] - interior[0];
            (interior[cell - 1] + interior[cell]) * T::HALF + wraps * period
        }
        Topology::Bounded | Topology::Flat => {
            if i < 1 {
                interior[0] + (T::from_index(i) - T::HALF) * (interior[1] - interior[0])
            } else if i > n {
                let width = interior[last] - interior[last - 1];
                interior[last] + (T::from_index(i - n) - T::HALF) * width
            } else {
                (interior[i as usize - 1] + interior[i as usize]) * T::HALF
            }
        }
    }
}

/// Width of cell `i` beyond the cached range.
fn extend_cell_width<T: Precision>(interior: &[T], topology: Topology, i: isize) -> T {
    let last = interior.len() - 1;
    let n = last as isize;
    let cell = match topology {
        Topology::Periodic => periodic_cell::<T>(i, n).0,
        Topology::Bounded | Topology::Flat => i.clamp(1, n) as usize,
    };
    interior[cell] - interior[cell - 1]
}

/// Center-to-center distance across face `j` beyond the cached range.
fn extend_center_spacing<T: Precision>(interior: &[T], topology: Topology, j: isize) -> T {
    let n = (interior.len() - 1) as isize;
    match topology {
        Topology::Periodic => {
            let r = j.rem_euclid(n);
            let below = extend_cell_width(interior, topology, r);
            let above = extend_cell_width(interior, topology, r + 1);
            (below + above) * T::HALF
        }
        Topology::Bounded | Topology::Flat => {
            if j <= 0 || j >= n {
                extend_cell_width(interior, topology, j)
            } else {
                let below = extend_cell_width(interior, topology, j);
                let above = extend_cell_width(interior, topology, j + 1);
                (below + above) * T::HALF
            }
        }
    }
}
