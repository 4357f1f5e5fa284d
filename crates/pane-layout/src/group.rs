// ABOUTME: A group of side-by-side panes sharing one layout.
// ABOUTME: Supports resizing, collapsing, expanding, and handle interaction.

use std::collections::{HashMap, HashSet};

use pane_core::{Config, PaneConstraints, PaneId, SavedGroup, SavedPaneSize};

use crate::adjust::{adjust_layout_by_delta, ResizeTrigger};
use crate::aria::{compute_aria_values, AriaValues};
use crate::tolerance::{are_almost_equal, compare_with_tolerance, layouts_almost_equal};
use crate::validate::{check_feasible, default_layout, validate_layout};
use crate::LayoutError;

/// Key pressed on a focused resize handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeKey {
    /// Grow the pane before the handle by one step
    Increase,
    /// Shrink the pane before the handle by one step
    Decrease,
    /// Shrink the pane before the handle as far as possible
    Home,
    /// Grow the pane before the handle as far as possible
    End,
}

#[derive(Debug, Clone)]
pub struct PaneGroup {
    ids: Vec<PaneId>,
    constraints: Vec<PaneConstraints>,
    layout: Vec<f64>,
    /// Size each collapsed pane had before it was collapsed
    expand_to_sizes: HashMap<PaneId, f64>,
    precision: u32,
    keyboard_step: f64,
}

impl PaneGroup {
    /// Create a group laid out from the panes' default sizes.
    pub fn new(
        panes: impl IntoIterator<Item = (PaneId, PaneConstraints)>,
        config: &Config,
    ) -> Result<Self, LayoutError> {
        let (ids, constraints): (Vec<_>, Vec<_>) = panes.into_iter().unzip();
        if ids.is_empty() {
            return Err(LayoutError::Empty);
        }

        let mut seen = HashSet::new();
        for (id, c) in ids.iter().zip(&constraints) {
            if !seen.insert(*id) {
                return Err(LayoutError::DuplicatePane(*id));
            }
            c.validate()
                .map_err(|source| LayoutError::Constraint { pane: *id, source })?;
        }

        check_feasible(&constraints, config.precision)?;
        let layout = validate_layout(&default_layout(&constraints), &constraints, config.precision)?;

        Ok(Self {
            ids,
            constraints,
            layout,
            expand_to_sizes: HashMap::new(),
            precision: config.precision,
            keyboard_step: config.keyboard_step,
        })
    }

    /// Replace the current layout, repairing it to fit the constraints.
    pub fn set_layout(&mut self, layout: &[f64]) -> Result<(), LayoutError> {
        self.layout = validate_layout(layout, &self.constraints, self.precision)?;
        Ok(())
    }

    pub fn layout(&self) -> &[f64] {
        &self.layout
    }

    pub fn panes(&self) -> &[PaneId] {
        &self.ids
    }

    pub fn constraints(&self) -> &[PaneConstraints] {
        &self.constraints
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Number of resize handles (one between each pair of panes)
    pub fn handle_count(&self) -> usize {
        self.ids.len() - 1
    }

    pub fn pane_index(&self, pane: PaneId) -> Result<usize, LayoutError> {
        self.ids
            .iter()
            .position(|id| *id == pane)
            .ok_or(LayoutError::UnknownPane(pane))
    }

    pub fn pane_size(&self, pane: PaneId) -> Result<f64, LayoutError> {
        Ok(self.layout[self.pane_index(pane)?])
    }

    pub fn is_collapsed(&self, pane: PaneId) -> Result<bool, LayoutError> {
        let index = self.pane_index(pane)?;
        let c = &self.constraints[index];
        Ok(c.collapsible && are_almost_equal(self.layout[index], c.collapsed_size, self.precision))
    }

    pub fn is_expanded(&self, pane: PaneId) -> Result<bool, LayoutError> {
        let index = self.pane_index(pane)?;
        let c = &self.constraints[index];
        Ok(!c.collapsible
            || compare_with_tolerance(self.layout[index], c.collapsed_size, self.precision).is_gt())
    }

    /// The two panes a resize of pane `index` moves: the pane and its next
    /// neighbour, or its previous one for the last pane.
    fn pivot_indices(&self, index: usize) -> Option<[usize; 2]> {
        if self.ids.len() < 2 {
            None
        } else if index == self.ids.len() - 1 {
            Some([index - 1, index])
        } else {
            Some([index, index + 1])
        }
    }

    fn handle_pivots(&self, handle: usize) -> Result<[usize; 2], LayoutError> {
        if handle >= self.handle_count() {
            return Err(LayoutError::UnknownHandle {
                handle,
                count: self.handle_count(),
            });
        }
        Ok([handle, handle + 1])
    }

    /// Apply a delta to the layout, returning whether anything moved
    fn apply_delta(&mut self, pivots: [usize; 2], delta: f64, trigger: ResizeTrigger) -> bool {
        let next = adjust_layout_by_delta(
            &self.layout,
            &self.constraints,
            pivots,
            delta,
            trigger,
            self.precision,
        );
        if layouts_almost_equal(&next, &self.layout, self.precision) {
            return false;
        }
        tracing::debug!(?trigger, delta, from = ?self.layout, to = ?next, "layout changed");
        self.layout = next;
        true
    }

    /// Move `pane` from its current size toward `size`.
    ///
    /// `size` is resolved against the pane's constraints and neighbours, so
    /// the final size may differ.
    pub fn resize_pane(&mut self, pane: PaneId, size: f64) -> Result<bool, LayoutError> {
        let size = finite(size)?;
        let index = self.pane_index(pane)?;
        let Some(pivots) = self.pivot_indices(index) else {
            return Ok(false);
        };
        let delta = self.signed_delta(index, size);
        Ok(self.apply_delta(pivots, delta, ResizeTrigger::Imperative))
    }

    /// Collapse `pane`, remembering its size for [`PaneGroup::expand_pane`].
    pub fn collapse_pane(&mut self, pane: PaneId) -> Result<bool, LayoutError> {
        let index = self.pane_index(pane)?;
        let c = self.constraints[index];
        let size = self.layout[index];
        if !c.collapsible || are_almost_equal(size, c.collapsed_size, self.precision) {
            return Ok(false);
        }
        let Some(pivots) = self.pivot_indices(index) else {
            return Ok(false);
        };

        self.expand_to_sizes.insert(pane, size);
        let delta = self.signed_delta(index, c.collapsed_size);
        let changed = self.apply_delta(pivots, delta, ResizeTrigger::Imperative);
        if changed {
            tracing::debug!(%pane, "collapsed pane");
        }
        Ok(changed)
    }

    /// Expand a collapsed `pane` back to its remembered size, or to its
    /// minimum size if none is remembered.
    pub fn expand_pane(&mut self, pane: PaneId) -> Result<bool, LayoutError> {
        let index = self.pane_index(pane)?;
        let c = self.constraints[index];
        let size = self.layout[index];
        if !c.collapsible || !are_almost_equal(size, c.collapsed_size, self.precision) {
            return Ok(false);
        }
        let Some(pivots) = self.pivot_indices(index) else {
            return Ok(false);
        };

        let base_size = self
            .expand_to_sizes
            .get(&pane)
            .copied()
            .filter(|&prev| prev >= c.min_size)
            .unwrap_or(c.min_size);
        let delta = self.signed_delta(index, base_size);
        let changed = self.apply_delta(pivots, delta, ResizeTrigger::Imperative);
        if changed {
            tracing::debug!(%pane, base_size, "expanded pane");
        }
        Ok(changed)
    }

    /// Delta that takes pane `index` to `target`. The last pane is the
    /// second pivot, so growing it means a negative delta.
    fn signed_delta(&self, index: usize, target: f64) -> f64 {
        let current = self.layout[index];
        if index == self.ids.len() - 1 {
            current - target
        } else {
            target - current
        }
    }

    /// Drag resize handle `handle` by `delta` percent (positive moves it
    /// toward the end of the group).
    pub fn drag_handle(&mut self, handle: usize, delta: f64) -> Result<bool, LayoutError> {
        let delta = finite(delta)?;
        let pivots = self.handle_pivots(handle)?;
        Ok(self.apply_delta(pivots, delta, ResizeTrigger::Pointer))
    }

    pub fn keyboard_resize(&mut self, handle: usize, key: ResizeKey) -> Result<bool, LayoutError> {
        let pivots = self.handle_pivots(handle)?;
        let delta = match key {
            ResizeKey::Increase => self.keyboard_step,
            ResizeKey::Decrease => -self.keyboard_step,
            ResizeKey::Home => -100.0,
            ResizeKey::End => 100.0,
        };
        Ok(self.apply_delta(pivots, delta, ResizeTrigger::Keyboard))
    }

    pub fn aria_values(&self, handle: usize) -> Result<AriaValues, LayoutError> {
        let pivots = self.handle_pivots(handle)?;
        Ok(compute_aria_values(&self.layout, &self.constraints, &pivots))
    }

    pub fn snapshot(&self) -> SavedGroup {
        let mut expand_to_sizes: Vec<_> = self
            .expand_to_sizes
            .iter()
            .map(|(&pane, &size)| SavedPaneSize { pane, size })
            .collect();
        expand_to_sizes.sort_by_key(|saved| saved.pane);

        SavedGroup {
            panes: self.ids.clone(),
            layout: self.layout.clone(),
            expand_to_sizes,
        }
    }

    /// Restore a layout saved by [`PaneGroup::snapshot`]. The saved pane
    /// order must match this group's.
    pub fn restore(&mut self, saved: &SavedGroup) -> Result<(), LayoutError> {
        if saved.panes != self.ids {
            return Err(LayoutError::SnapshotMismatch);
        }
        self.set_layout(&saved.layout)?;
        self.expand_to_sizes = saved
            .expand_to_sizes
            .iter()
            .map(|saved| (saved.pane, saved.size))
            .collect();
        Ok(())
    }
}

fn finite(value: f64) -> Result<f64, LayoutError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(LayoutError::NonFiniteSize(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(constraints: &[PaneConstraints]) -> PaneGroup {
        let panes = constraints
            .iter()
            .enumerate()
            .map(|(i, c)| (PaneId(i as u64 + 1), *c));
        PaneGroup::new(panes, &Config::default()).unwrap()
    }

    fn sidebar_layout() -> PaneGroup {
        let mut g = group(&[
            PaneConstraints::new(15.0, 50.0).collapsible(0.0),
            PaneConstraints::new(20.0, 100.0),
        ]);
        g.set_layout(&[30.0, 70.0]).unwrap();
        g
    }

    #[test]
    fn new_group_splits_evenly() {
        let g = group(&[PaneConstraints::default(); 2]);
        assert_eq!(g.layout(), &[50.0, 50.0]);
        assert_eq!(g.handle_count(), 1);
    }

    #[test]
    fn new_rejects_bad_input() {
        let config = Config::default();
        assert_eq!(
            PaneGroup::new(Vec::<(PaneId, PaneConstraints)>::new(), &config).unwrap_err(),
            LayoutError::Empty
        );

        let dup = [
            (PaneId(1), PaneConstraints::default()),
            (PaneId(1), PaneConstraints::default()),
        ];
        assert_eq!(
            PaneGroup::new(dup, &config).unwrap_err(),
            LayoutError::DuplicatePane(PaneId(1))
        );

        let bad = [(PaneId(7), PaneConstraints::new(80.0, 20.0))];
        assert!(matches!(
            PaneGroup::new(bad, &config),
            Err(LayoutError::Constraint { pane: PaneId(7), .. })
        ));
    }

    #[test]
    fn new_rejects_panes_that_cannot_fill_the_group() {
        let config = Config::default();

        let too_small = [
            (PaneId(1), PaneConstraints::new(0.0, 40.0)),
            (PaneId(2), PaneConstraints::new(0.0, 40.0)),
        ];
        assert_eq!(
            PaneGroup::new(too_small, &config).unwrap_err(),
            LayoutError::Infeasible { min_total: 0.0, max_total: 80.0 }
        );

        let too_large = [
            (PaneId(1), PaneConstraints::new(70.0, 100.0)),
            (PaneId(2), PaneConstraints::new(70.0, 100.0)),
        ];
        assert_eq!(
            PaneGroup::new(too_large, &config).unwrap_err(),
            LayoutError::Infeasible { min_total: 140.0, max_total: 200.0 }
        );
    }

    #[test]
    fn tight_group_still_resizes() {
        let mut g = group(&[PaneConstraints::new(0.0, 60.0), PaneConstraints::new(0.0, 60.0)]);
        assert_eq!(g.layout(), &[50.0, 50.0]);
        assert!(g.drag_handle(0, -10.0).unwrap());
        assert_eq!(g.layout(), &[40.0, 60.0]);
        let total: f64 = g.layout().iter().sum();
        assert_eq!(total, 100.0);
    }

    #[test]
    fn non_finite_sizes_are_rejected() {
        let mut g = sidebar_layout();
        assert!(matches!(
            g.resize_pane(PaneId(1), f64::NAN),
            Err(LayoutError::NonFiniteSize(_))
        ));
        assert_eq!(
            g.drag_handle(0, f64::INFINITY).unwrap_err(),
            LayoutError::NonFiniteSize(f64::INFINITY)
        );
        assert_eq!(g.layout(), &[30.0, 70.0]);
    }

    #[test]
    fn resize_middle_and_last_pane() {
        let mut g = group(&[PaneConstraints::default(); 3]);
        g.set_layout(&[30.0, 40.0, 30.0]).unwrap();

        assert!(g.resize_pane(PaneId(2), 50.0).unwrap());
        assert_eq!(g.layout(), &[30.0, 50.0, 20.0]);

        assert!(g.resize_pane(PaneId(3), 40.0).unwrap());
        assert_eq!(g.layout(), &[30.0, 30.0, 40.0]);
    }

    #[test]
    fn resize_single_pane_is_a_no_op() {
        let mut g = group(&[PaneConstraints::default()]);
        assert!(!g.resize_pane(PaneId(1), 50.0).unwrap());
        assert_eq!(g.layout(), &[100.0]);
    }

    #[test]
    fn resize_unknown_pane_fails() {
        let mut g = group(&[PaneConstraints::default(); 2]);
        assert_eq!(
            g.resize_pane(PaneId(9), 10.0).unwrap_err(),
            LayoutError::UnknownPane(PaneId(9))
        );
    }

    #[test]
    fn collapse_then_expand_restores_size() {
        let mut g = sidebar_layout();
        let sidebar = PaneId(1);

        assert!(g.collapse_pane(sidebar).unwrap());
        assert_eq!(g.layout(), &[0.0, 100.0]);
        assert!(g.is_collapsed(sidebar).unwrap());
        assert!(!g.is_expanded(sidebar).unwrap());

        assert!(!g.collapse_pane(sidebar).unwrap());

        assert!(g.expand_pane(sidebar).unwrap());
        assert_eq!(g.layout(), &[30.0, 70.0]);
        assert!(g.is_expanded(sidebar).unwrap());
    }

    #[test]
    fn expand_without_memory_uses_min_size() {
        let mut g = sidebar_layout();
        g.set_layout(&[0.0, 100.0]).unwrap();

        assert!(g.expand_pane(PaneId(1)).unwrap());
        assert_eq!(g.layout(), &[15.0, 85.0]);
    }

    #[test]
    fn collapse_last_pane() {
        let mut g = group(&[
            PaneConstraints::default(),
            PaneConstraints::new(10.0, 100.0).collapsible(2.0),
        ]);
        g.set_layout(&[75.0, 25.0]).unwrap();

        assert!(g.collapse_pane(PaneId(2)).unwrap());
        assert_eq!(g.layout(), &[98.0, 2.0]);
        assert!(g.expand_pane(PaneId(2)).unwrap());
        assert_eq!(g.layout(), &[75.0, 25.0]);
    }

    #[test]
    fn non_collapsible_panes_ignore_collapse() {
        let mut g = group(&[PaneConstraints::default(); 2]);
        assert!(!g.collapse_pane(PaneId(1)).unwrap());
        assert!(!g.is_collapsed(PaneId(1)).unwrap());
        assert!(g.is_expanded(PaneId(1)).unwrap());
    }

    #[test]
    fn drag_handle_moves_boundary() {
        let mut g = group(&[PaneConstraints::default(); 3]);
        g.set_layout(&[30.0, 40.0, 30.0]).unwrap();

        assert!(g.drag_handle(1, 10.0).unwrap());
        assert_eq!(g.layout(), &[30.0, 50.0, 20.0]);
        assert_eq!(
            g.drag_handle(2, 5.0).unwrap_err(),
            LayoutError::UnknownHandle { handle: 2, count: 2 }
        );
    }

    #[test]
    fn keyboard_steps_and_jumps() {
        let mut g = sidebar_layout();

        assert!(g.keyboard_resize(0, ResizeKey::Increase).unwrap());
        assert_eq!(g.layout(), &[40.0, 60.0]);

        assert!(g.keyboard_resize(0, ResizeKey::End).unwrap());
        assert_eq!(g.layout(), &[50.0, 50.0]);

        assert!(g.keyboard_resize(0, ResizeKey::Home).unwrap());
        assert_eq!(g.layout(), &[0.0, 100.0]);

        // From collapsed, one step opens straight to the minimum
        assert!(g.keyboard_resize(0, ResizeKey::Increase).unwrap());
        assert_eq!(g.layout(), &[15.0, 85.0]);

        // And at the minimum, one step closes it again
        assert!(g.keyboard_resize(0, ResizeKey::Decrease).unwrap());
        assert_eq!(g.layout(), &[0.0, 100.0]);
    }

    #[test]
    fn aria_values_for_handle() {
        let g = sidebar_layout();
        assert_eq!(g.pane_size(PaneId(1)).unwrap(), 30.0);
        let aria = g.aria_values(0).unwrap();
        assert_eq!(aria.value_min, 15.0);
        assert_eq!(aria.value_max, 50.0);
        assert_eq!(aria.value_now, 30.0);
    }

    #[test]
    fn snapshot_restores_layout_and_memory() {
        let mut g = sidebar_layout();
        g.collapse_pane(PaneId(1)).unwrap();
        let saved = g.snapshot();

        let mut fresh = sidebar_layout();
        fresh.restore(&saved).unwrap();
        assert_eq!(fresh.layout(), &[0.0, 100.0]);
        assert!(fresh.expand_pane(PaneId(1)).unwrap());
        assert_eq!(fresh.layout(), &[30.0, 70.0]);
    }

    #[test]
    fn restore_rejects_other_panes() {
        let mut g = sidebar_layout();
        let saved = SavedGroup {
            panes: vec![PaneId(1), PaneId(3)],
            layout: vec![50.0, 50.0],
            expand_to_sizes: Vec::new(),
        };
        assert_eq!(g.restore(&saved).unwrap_err(), LayoutError::SnapshotMismatch);
    }
}
