//! Grid trait compliance test helpers.
//!
//! These functions verify that a Grid implementation satisfies the
//! invariants every consumer relies on. Reused across all backend test
//! modules (RegularGrid, StretchedGrid, AnyGrid).

use crate::grid::Grid;
use num_traits::{Float, One, Zero};
use strata_core::{Axis, Location, Precision};

fn tolerance<G: Grid + ?Sized>(grid: &G, axis: Axis) -> G::Float {
    let b = grid.bounds(axis);
    let scale = b.lower.abs().max(b.upper.abs()).max(b.length());
    let scale = if scale > G::Float::zero() {
        scale
    } else {
        G::Float::one()
    };
    G::Float::epsilon() * G::Float::from_index(64) * scale
}

fn non_flat_axes<G: Grid + ?Sized>(grid: &G) -> impl Iterator<Item = Axis> + '_ {
    Axis::ALL
        .into_iter()
        .filter(move |&a| !grid.topology()[a].is_flat())
}

/// Assert that two calls to every query return identical values.
pub fn assert_queries_deterministic<G: Grid + ?Sized>(grid: &G) {
    assert_eq!(grid.size(), grid.size());
    assert_eq!(grid.extent(), grid.extent());
    for axis in Axis::ALL {
        for loc in [Location::Center, Location::Face] {
            for i in grid.index_range(axis, loc, true) {
                let a = grid.node(axis, i, loc);
                let b = grid.node(axis, i, loc);
                assert!(a == b, "node({axis}, {i}, {loc}) not deterministic: {a} vs {b}");
                let a = grid.spacing(axis, i, loc);
                let b = grid.spacing(axis, i, loc);
                assert!(a == b, "spacing({axis}, {i}, {loc}) not deterministic: {a} vs {b}");
            }
        }
    }
}

/// Assert that nodes strictly increase along every non-Flat axis, over the
/// whole padded range.
pub fn assert_nodes_strictly_increasing<G: Grid + ?Sized>(grid: &G) {
    for axis in non_flat_axes(grid) {
        for loc in [Location::Center, Location::Face] {
            let range = grid.index_range(axis, loc, true);
            let mut prev: Option<(isize, G::Float)> = None;
            for i in range {
                let x = grid.node(axis, i, loc);
                if let Some((j, p)) = prev {
                    assert!(x > p, "{loc} nodes on {axis} not increasing: [{j}]={p}, [{i}]={x}");
                }
                prev = Some((i, x));
            }
        }
    }
}

/// Assert that every center lies strictly between its two faces.
pub fn assert_centers_between_faces<G: Grid + ?Sized>(grid: &G) {
    for axis in non_flat_axes(grid) {
        for i in grid.index_range(axis, Location::Center, true) {
            let c = grid.node(axis, i, Location::Center);
            let lo = grid.node(axis, i - 1, Location::Face);
            let hi = grid.node(axis, i, Location::Face);
            assert!(lo < c && c < hi, "center {i} on {axis} = {c} not in ({lo}, {hi})");
        }
    }
}

/// Assert that cell widths are face differences and face spacings are
/// center differences.
pub fn assert_spacings_match_nodes<G: Grid + ?Sized>(grid: &G) {
    for axis in non_flat_axes(grid) {
        let tol = tolerance(grid, axis);
        for i in grid.index_range(axis, Location::Center, true) {
            let width = grid.node(axis, i, Location::Face) - grid.node(axis, i - 1, Location::Face);
            let s = grid.spacing(axis, i, Location::Center);
            assert!(
                (width - s).abs() <= tol,
                "cell width {i} on {axis}: spacing {s}, faces give {width}"
            );
        }
        for j in grid.index_range(axis, Location::Face, true) {
            let gap = grid.node(axis, j + 1, Location::Center) - grid.node(axis, j, Location::Center);
            let s = grid.spacing(axis, j, Location::Face);
            assert!(
                (gap - s).abs() <= tol,
                "face spacing {j} on {axis}: spacing {s}, centers give {gap}"
            );
        }
    }
}

/// Assert that interior faces span the declared bounds and interior cell
/// widths add up to the domain length.
pub fn assert_interior_spans_extent<G: Grid + ?Sized>(grid: &G) {
    for axis in non_flat_axes(grid) {
        let tol = tolerance(grid, axis);
        let b = grid.bounds(axis);
        let n = grid.size()[axis] as isize;
        let first = grid.node(axis, 0, Location::Face);
        let last = grid.node(axis, n, Location::Face);
        assert!((first - b.lower).abs() <= tol, "face 0 on {axis} = {first}, lower = {}", b.lower);
        assert!((last - b.upper).abs() <= tol, "face {n} on {axis} = {last}, upper = {}", b.upper);
        let total: G::Float = (1..=n).map(|i| grid.spacing(axis, i, Location::Center)).sum();
        let length = grid.extent()[axis];
        assert!(
            (total - length).abs() <= tol * G::Float::from_index(n),
            "widths on {axis} sum to {total}, length is {length}"
        );
    }
}

/// Assert that Flat axes are degenerate: one cell, zero length, no halo,
/// one node.
pub fn assert_flat_axes_degenerate<G: Grid + ?Sized>(grid: &G) {
    for axis in Axis::ALL {
        if !grid.topology()[axis].is_flat() {
            continue;
        }
        assert_eq!(grid.size()[axis], 1, "flat axis {axis} size");
        assert_eq!(grid.halo_size()[axis], 0, "flat axis {axis} halo");
        assert!(grid.extent()[axis] == G::Float::zero(), "flat axis {axis} length");
        for loc in [Location::Center, Location::Face] {
            assert_eq!(grid.index_range(axis, loc, true), 1..=1);
        }
    }
}

/// Assert that padded cell-centered ranges have `size + 2 * halo` entries.
pub fn assert_padded_storage<G: Grid + ?Sized>(grid: &G) {
    for axis in Axis::ALL {
        let n = grid.index_range(axis, Location::Center, true).count();
        assert_eq!(n, grid.padded_size(axis), "padded center count on {axis}");
        let interior = grid.index_range(axis, Location::Center, false).count();
        assert_eq!(interior, grid.size()[axis], "interior center count on {axis}");
    }
}

/// Run all compliance checks on a grid.
pub fn run_full_compliance<G: Grid + ?Sized>(grid: &G) {
    assert_queries_deterministic(grid);
    assert_nodes_strictly_increasing(grid);
    assert_centers_between_faces(grid);
    assert_spacings_match_nodes(grid);
    assert_interior_spans_extent(grid);
    assert_flat_axes_degenerate(grid);
    assert_padded_storage(grid);
}
