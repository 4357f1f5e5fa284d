// ABOUTME: Accessibility values for a resize handle.
// ABOUTME: Derives the pivot pane's reachable size range from sibling constraints.

use pane_core::PaneConstraints;

/// `aria-valuemin` / `aria-valuemax` / `aria-valuenow` for a resize handle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AriaValues {
    pub value_min: f64,
    pub value_max: f64,
    pub value_now: f64,
}

/// Compute the range the pivot pane (`pivot_indices[0]`) can be resized to
/// without pushing the other panes past their combined limits.
///
/// `value_now` is the pivot's current size as-is; it is only guaranteed to
/// fall inside `value_min..=value_max` if the layout itself is feasible.
///
/// # Panics
///
/// Panics if `pivot_indices` is empty or the pivot is outside `layout`.
pub fn compute_aria_values(
    layout: &[f64],
    constraints: &[PaneConstraints],
    pivot_indices: &[usize],
) -> AriaValues {
    let pivot = pivot_indices[0];

    let mut current_min_size = 0.0;
    let mut current_max_size = 100.0;
    let mut total_min_size = 0.0;
    let mut total_max_size = 0.0;

    for (index, c) in constraints.iter().enumerate() {
        if index == pivot {
            current_min_size = c.min_size;
            current_max_size = c.max_size;
        } else {
            total_min_size += c.min_size;
            total_max_size += c.max_size;
        }
    }

    AriaValues {
        value_min: f64::max(current_min_size, 100.0 - total_max_size),
        value_max: f64::min(current_max_size, 100.0 - total_min_size),
        value_now: layout[pivot],
    }
}
