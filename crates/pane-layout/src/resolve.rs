// ABOUTME: Resolves a requested pane size against its constraints.
// ABOUTME: Handles collapse snapping, max clamping and rounding.

use std::cmp::Ordering;

use pane_core::PaneConstraints;

use crate::tolerance::{compare_with_tolerance, round_to_precision};

/// Clamp `requested_size` for the pane at `pane_index` to a size its
/// constraints allow.
///
/// Below `min_size`, a collapsible pane snaps to `collapsed_size` when the
/// request is under the midpoint between the two, otherwise to `min_size`.
/// The result never exceeds `max_size` and is rounded to `precision`
/// fractional digits.
///
/// `requested_size` must be finite. A NaN compares equal to everything, so
/// it skips the floor and comes back as `max_size`; [`crate::PaneGroup`]
/// rejects non-finite sizes before they get here.
///
/// # Panics
///
/// Panics if `constraints` has no entry at `pane_index`.
pub fn resolve_pane_size(
    constraints: &[PaneConstraints],
    pane_index: usize,
    requested_size: f64,
    precision: u32,
) -> f64 {
    assert!(
        pane_index < constraints.len(),
        "no constraints for pane {} ({} panes)",
        pane_index,
        constraints.len()
    );
    let PaneConstraints {
        min_size,
        max_size,
        collapsed_size,
        collapsible,
        ..
    } = constraints[pane_index];

    let mut size = requested_size;
    if compare_with_tolerance(size, min_size, precision) == Ordering::Less {
        size = if collapsible {
            let halfway = (collapsed_size + min_size) / 2.0;
            if compare_with_tolerance(size, halfway, precision) == Ordering::Less {
                collapsed_size
            } else {
                min_size
            }
        } else {
            min_size
        };
    }

    round_to_precision(size.min(max_size), precision)
}
