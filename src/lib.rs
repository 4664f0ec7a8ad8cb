//! Regular square cell grids clipped to a geographic boundary polygon
//!
//! A lattice of small square cells is laid over the bounding box of a
//! boundary; only cells with a corner inside the boundary are kept, each
//! tagged with integer row/column identifiers derived from its coordinates.
//! The result is written as a `GeoJSON` feature collection.

#![forbid(unsafe_code)]

/// Lattice sweep and generated cells
pub mod grid;
/// Input/output operations and error handling
pub mod io;
/// Numeric helpers for lattice alignment and identifiers
pub mod math;
/// Bounding boxes, cell sizes and boundary containment
pub mod spatial;

pub use io::error::{GridError, Result};
