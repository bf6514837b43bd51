//! Test utilities for Strata development.
//!
//! Provides standard grid configurations ([`fixtures`]) and floating-point
//! comparison helpers shared by integration tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use strata_core::Precision;

/// Relative tolerance scaled to `T`: `64 * epsilon * max(1, |a|, |b|)`.
pub fn tolerance<T: Precision>(a: T, b: T) -> T {
    let scale = T::one().max(a.abs()).max(b.abs());
    T::epsilon() * T::from_index(64) * scale
}

/// Whether `a` and `b` agree to within [`tolerance`].
pub fn close<T: Precision>(a: T, b: T) -> bool {
    (a - b).abs() <= tolerance(a, b)
}

/// Panic with both values if they are not [`close`].
#[track_caller]
pub fn assert_close<T: Precision>(actual: T, expected: T) {
    assert!(
        close(actual, expected),
        "expected {expected}, got {actual} (diff {})",
        (actual - expected).abs()
    );
}

/// [`assert_close`] over two slices of equal length.
#[track_caller]
pub fn assert_all_close<T: Precision>(actual: &[T], expected: &[T]) {
    assert_eq!(actual.len(), expected.len(), "length mismatch");
    for (i, (&a, &e)) in actual.iter().zip(expected).enumerate() {
        assert!(close(a, e), "element {i}: expected {e}, got {a}");
    }
}
