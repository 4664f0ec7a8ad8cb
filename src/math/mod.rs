//! Numeric helpers for lattice alignment

/// Decimal-precision rounding and identifier scaling
pub mod precision;
