//! Axis and location selectors, and the [`Triple`] per-axis container.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// One of the three spatial directions of a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// First horizontal direction.
    X,
    /// Second horizontal direction.
    Y,
    /// Vertical direction.
    Z,
}

impl Axis {
    /// All axes in storage order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Position of this axis in a `[_; 3]` array.
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Lowercase axis name, as used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where within a cell a quantity lives along one axis.
///
/// Cell `i` (1-based) spans from face `i - 1` to face `i`; its center lies
/// halfway between the two.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    /// Cell midpoint.
    Center,
    /// Cell boundary.
    Face,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Center => f.write_str("center"),
            Location::Face => f.write_str("face"),
        }
    }
}

/// One value per axis, indexable by [`Axis`].
///
/// # Examples
///
/// ```
/// use strata_core::{Axis, Triple};
///
/// let size = Triple::new(128, 64, 1);
/// assert_eq!(size[Axis::Y], 64);
/// assert_eq!(size.map(|n| n * 2), Triple::new(256, 128, 2));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple<T> {
    /// Value along x.
    pub x: T,
    /// Value along y.
    pub y: T,
    /// Value along z.
    pub z: T,
}

impl<T> Triple<T> {
    /// Build a triple from its three components.
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Apply `f` to every component.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Triple<U> {
        Triple {
            x: f(self.x),
            y: f(self.y),
            z: f(self.z),
        }
    }

    /// Build a triple by evaluating `f` on each axis.
    pub fn from_fn(mut f: impl FnMut(Axis) -> T) -> Self {
        Self {
            x: f(Axis::X),
            y: f(Axis::Y),
            z: f(Axis::Z),
        }
    }

    /// Borrow the components as an array in axis order.
    pub fn as_array(&self) -> [&T; 3] {
        [&self.x, &self.y, &self.z]
    }

    /// Iterate `(axis, value)` pairs in axis order.
    pub fn iter(&self) -> impl Iterator<Item = (Axis, &T)> {
        Axis::ALL.into_iter().zip(self.as_array())
    }
}

impl<T: Clone> Triple<T> {
    /// A triple with the same value on every axis.
    pub fn splat(value: T) -> Self {
        Self {
            x: value.clone(),
            y: value.clone(),
            z: value,
        }
    }
}

impl<T> Index<Axis> for Triple<T> {
    type Output = T;

    fn index(&self, axis: Axis) -> &T {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }
}

impl<T> IndexMut<Axis> for Triple<T> {
    fn index_mut(&mut self, axis: Axis) -> &mut T {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }
}

impl<T> From<[T; 3]> for Triple<T> {
    fn from([x, y, z]: [T; 3]) -> Self {
        Self { x, y, z }
    }
}

impl<T> From<(T, T, T)> for Triple<T> {
    fn from((x, y, z): (T, T, T)) -> Self {
        Self { x, y, z }
    }
}

impl<T> From<Triple<T>> for [T; 3] {
    fn from(t: Triple<T>) -> Self {
        [t.x, t.y, t.z]
    }
}
