// ABOUTME: Moves the boundary between two adjacent panes by a delta.
// ABOUTME: Shrinks panes on one side and grows the other, honoring constraints.

use std::cmp::Ordering;

use pane_core::PaneConstraints;

use crate::resolve::resolve_pane_size;
use crate::tolerance::{are_almost_equal, compare_with_tolerance};

/// What caused a resize
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeTrigger {
    /// Dragging a resize handle
    Pointer,
    /// Arrow/Home/End keys on a focused resize handle
    Keyboard,
    /// Programmatic resize, collapse or expand
    Imperative,
}

/// Move the boundary between `pivot_indices[0]` and `pivot_indices[1]` by
/// `delta` percent. A positive delta grows the first pivot.
///
/// Returns the previous layout unchanged when nothing can move or the
/// result would not add up to 100.
pub fn adjust_layout_by_delta(
    layout: &[f64],
    constraints: &[PaneConstraints],
    pivot_indices: [usize; 2],
    delta: f64,
    trigger: ResizeTrigger,
    precision: u32,
) -> Vec<f64> {
    let almost_equal = |a: f64, b: f64| are_almost_equal(a, b, precision);
    let resolve = |index: usize, size: f64| resolve_pane_size(constraints, index, size, precision);

    if almost_equal(delta, 0.0) {
        return layout.to_vec();
    }

    let [first, second] = pivot_indices;
    let shrinking_first = delta < 0.0;
    let signed = |magnitude: f64| if shrinking_first { -magnitude } else { magnitude };

    // Panes ordered outward from the boundary on each side
    let (shrink_side, grow_side): (Vec<usize>, Vec<usize>) = if shrinking_first {
        ((0..=first).rev().collect(), (second..layout.len()).collect())
    } else {
        ((second..layout.len()).collect(), (0..=first).rev().collect())
    };
    let growing_pivot = grow_side[0];
    let shrinking_pivot = shrink_side[0];

    let mut delta = delta;

    if trigger == ResizeTrigger::Keyboard {
        // A collapsed pane expands straight to its minimum size
        let c = &constraints[growing_pivot];
        if c.collapsible && almost_equal(layout[growing_pivot], c.collapsed_size) {
            let local_delta = c.min_size - layout[growing_pivot];
            if compare_with_tolerance(local_delta, delta.abs(), precision) == Ordering::Greater {
                delta = signed(local_delta);
            }
        }

        // A pane at its minimum size collapses fully
        let c = &constraints[shrinking_pivot];
        if c.collapsible && almost_equal(layout[shrinking_pivot], c.min_size) {
            let local_delta = layout[shrinking_pivot] - c.collapsed_size;
            if compare_with_tolerance(local_delta, delta.abs(), precision) == Ordering::Greater {
                delta = signed(local_delta);
            }
        }
    }

    let max_available_delta: f64 = grow_side
        .iter()
        .map(|&index| resolve(index, 100.0) - layout[index])
        .sum();
    delta = signed(delta.abs().min(max_available_delta.abs()));
    if almost_equal(delta, 0.0) {
        return layout.to_vec();
    }

    let mut next = layout.to_vec();

    let mut delta_applied = 0.0;
    for &index in &shrink_side {
        let delta_remaining = delta.abs() - f64::abs(delta_applied);
        let prev_size = layout[index];
        let safe_size = resolve(index, prev_size - delta_remaining);

        if !almost_equal(prev_size, safe_size) {
            delta_applied += prev_size - safe_size;
            next[index] = safe_size;

            if compare_with_tolerance(delta_applied, delta.abs(), precision) != Ordering::Less {
                break;
            }
        }
    }

    if almost_equal(delta_applied, 0.0) {
        return layout.to_vec();
    }

    let unsafe_size = layout[growing_pivot] + delta_applied;
    let safe_size = resolve(growing_pivot, unsafe_size);
    next[growing_pivot] = safe_size;

    // Whatever the pivot can't hold ripples outward on its side
    if !almost_equal(safe_size, unsafe_size) {
        let mut delta_remaining = unsafe_size - safe_size;
        for &index in &grow_side {
            let prev_size = next[index];
            let safe_size = resolve(index, prev_size + delta_remaining);

            if !almost_equal(prev_size, safe_size) {
                delta_remaining -= safe_size - prev_size;
                next[index] = safe_size;
            }
            if almost_equal(delta_remaining, 0.0) {
                break;
            }
        }
    }

    let total: f64 = next.iter().sum();
    if !almost_equal(total, 100.0) {
        return layout.to_vec();
    }

    next
}
