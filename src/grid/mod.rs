//! Grid generation clipped to a boundary

/// Lattice sweep and boundary intersection
pub mod builder;
/// Generated cells and the ordered result envelope
pub mod cell;

pub use builder::{ColumnObserver, GridBuilder, Lattice, build};
pub use cell::{Cell, GridResult};
