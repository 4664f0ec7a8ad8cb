//! Spatial inputs to the grid builder
//!
//! This module contains:
//! - Validated bounding boxes and cell sizes
//! - The boundary containment capability and its `GeoJSON`-backed implementation

/// Point containment capability and polygon boundaries
pub mod boundary;
/// Bounding boxes, lattice alignment and cell sizes
pub mod bounds;

pub use boundary::{Boundary, GeoBoundary};
pub use bounds::{BoundingBox, CellSize};
