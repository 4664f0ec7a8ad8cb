//! Decimal rounding and lattice step helpers

use crate::io::configuration::ID_SCALE;

/// Round `value` down to `digits` decimal places
pub fn floor_to_digits(value: f64, digits: i32) -> f64 {
    let factor = 10_f64.powi(digits);
    (value * factor).floor() / factor
}

/// Round `value` up to `digits` decimal places
pub fn ceil_to_digits(value: f64, digits: i32) -> f64 {
    let factor = 10_f64.powi(digits);
    (value * factor).ceil() / factor
}

/// Scale a lattice coordinate into an integer row/column identifier
///
/// Ties round to even.
pub fn scale_to_id(coordinate: f64) -> i64 {
    (coordinate * ID_SCALE).round_ties_even() as i64
}

/// Number of whole or partial steps of size `step` needed to cover `span`
///
/// Non-positive spans cover nothing and return zero.
pub fn step_count(span: f64, step: f64) -> f64 {
    let steps = (span / step).ceil();
    if steps > 0.0 { steps } else { 0.0 }
}
