// ABOUTME: Initial layouts and repair of layouts that break constraints.
// ABOUTME: Normalizes totals to 100 and redistributes clamped space.

use pane_core::PaneConstraints;

use crate::resolve::resolve_pane_size;
use crate::tolerance::{are_almost_equal, compare_with_tolerance};
use crate::LayoutError;

/// Layout from each pane's `default_size`, splitting what is left evenly
/// among panes without one. The result is not checked against constraints.
pub fn default_layout(constraints: &[PaneConstraints]) -> Vec<f64> {
    let mut layout = vec![0.0; constraints.len()];
    let mut sized = 0;
    let mut remaining = 100.0;

    for (slot, c) in layout.iter_mut().zip(constraints) {
        if let Some(size) = c.default_size {
            *slot = size;
            sized += 1;
            remaining -= size;
        }
    }

    for (slot, c) in layout.iter_mut().zip(constraints) {
        if c.default_size.is_some() {
            continue;
        }
        let size = remaining / (constraints.len() - sized) as f64;
        *slot = size;
        sized += 1;
        remaining -= size;
    }

    layout
}

/// Check that some layout of these panes adds up to 100.
///
/// A collapsible pane can shrink to its `collapsed_size`, so that is what it
/// contributes to the smallest total.
pub fn check_feasible(constraints: &[PaneConstraints], precision: u32) -> Result<(), LayoutError> {
    let min_total: f64 = constraints
        .iter()
        .map(|c| if c.collapsible { c.collapsed_size } else { c.min_size })
        .sum();
    let max_total: f64 = constraints.iter().map(|c| c.max_size).sum();

    if compare_with_tolerance(min_total, 100.0, precision).is_gt()
        || compare_with_tolerance(max_total, 100.0, precision).is_lt()
    {
        return Err(LayoutError::Infeasible {
            min_total,
            max_total,
        });
    }
    Ok(())
}

/// Bring `layout` in line with `constraints`: scale it to a total of 100,
/// clamp every pane, then hand the clamped-off space to the panes that can
/// take it, front to back.
///
/// Fails with [`LayoutError::Unbalanced`] if the repaired layout still does
/// not add up to 100.
pub fn validate_layout(
    layout: &[f64],
    constraints: &[PaneConstraints],
    precision: u32,
) -> Result<Vec<f64>, LayoutError> {
    if layout.len() != constraints.len() {
        return Err(LayoutError::LengthMismatch {
            expected: constraints.len(),
            actual: layout.len(),
        });
    }

    let mut next = layout.to_vec();
    let total: f64 = next.iter().sum();
    if !are_almost_equal(total, 100.0, precision) {
        if !total.is_finite() || total <= 0.0 {
            return Err(LayoutError::InvalidTotal(total));
        }
        for size in &mut next {
            *size *= 100.0 / total;
        }
    }

    let mut remaining = 0.0;
    for (index, size) in next.iter_mut().enumerate() {
        let safe_size = resolve_pane_size(constraints, index, *size, precision);
        if *size != safe_size {
            remaining += *size - safe_size;
            *size = safe_size;
        }
    }

    if !are_almost_equal(remaining, 0.0, precision) {
        for (index, size) in next.iter_mut().enumerate() {
            let safe_size = resolve_pane_size(constraints, index, *size + remaining, precision);
            if *size != safe_size {
                remaining -= safe_size - *size;
                *size = safe_size;
                if are_almost_equal(remaining, 0.0, precision) {
                    break;
                }
            }
        }
    }

    let total: f64 = next.iter().sum();
    if !are_almost_equal(total, 100.0, precision) {
        return Err(LayoutError::Unbalanced(total));
    }

    Ok(next)
}
