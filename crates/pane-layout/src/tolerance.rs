// ABOUTME: Tolerance-based comparison of percentage sizes.
// ABOUTME: Absorbs floating-point noise from pixel-derived layout math.

use std::cmp::Ordering;

/// Round `value` to `precision` fractional digits.
pub fn round_to_precision(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (value * factor).round() / factor
}

/// Compare two sizes after rounding both to `precision` fractional digits.
pub fn compare_with_tolerance(actual: f64, expected: f64, precision: u32) -> Ordering {
    let difference =
        round_to_precision(actual, precision) - round_to_precision(expected, precision);
    if difference < 0.0 {
        Ordering::Less
    } else if difference > 0.0 {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

pub fn are_almost_equal(actual: f64, expected: f64, precision: u32) -> bool {
    compare_with_tolerance(actual, expected, precision) == Ordering::Equal
}

/// Element-wise `are_almost_equal` over two layouts of the same length.
pub fn layouts_almost_equal(a: &[f64], b: &[f64], precision: u32) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .zip(b)
            .all(|(x, y)| are_almost_equal(*x, *y, precision))
}
