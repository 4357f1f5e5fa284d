// ABOUTME: Errors raised by pane group and layout operations.
// ABOUTME: Covers bad layouts, bad constraints, and unknown panes or handles.

use pane_core::{ConstraintError, PaneId};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("Invalid {expected} pane layout: {actual} sizes given")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Layout sizes must add up to a positive total, got {0}")]
    InvalidTotal(f64),

    #[error("Repaired layout adds up to {0}, not 100")]
    Unbalanced(f64),

    #[error("Pane sizes can't add up to 100: smallest total {min_total}, largest total {max_total}")]
    Infeasible { min_total: f64, max_total: f64 },

    #[error("Size must be a finite number, got {0}")]
    NonFiniteSize(f64),

    #[error("A pane group needs at least one pane")]
    Empty,

    #[error("Pane {0} appears more than once")]
    DuplicatePane(PaneId),

    #[error("Invalid constraints for {pane}: {source}")]
    Constraint {
        pane: PaneId,
        #[source]
        source: ConstraintError,
    },

    #[error("Unknown pane {0}")]
    UnknownPane(PaneId),

    #[error("Unknown resize handle {handle} ({count} handles)")]
    UnknownHandle { handle: usize, count: usize },

    #[error("Saved layout was made for different panes")]
    SnapshotMismatch,
}
