//! Core types for the Strata structured-grid workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary every grid backend and every consumer shares: per-axis
//! [`Topology`] tags, the [`Axis`] and [`Location`] selectors, the
//! [`Triple`] per-axis container, domain [`Extent`]s, the sealed
//! [`Precision`] trait, and the construction error taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod axis;
pub mod error;
pub mod extent;
pub mod precision;
pub mod topology;

pub use axis::{Axis, Location, Triple};
pub use error::{ConfigError, GridError, StretchingError};
pub use extent::Extent;
pub use precision::{ElementType, Precision};
pub use topology::Topology;
