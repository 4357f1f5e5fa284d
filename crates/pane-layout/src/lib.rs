// ABOUTME: Constraint-based pane sizing for split layouts.
// ABOUTME: Resolves pane sizes, applies resize deltas, and computes handle ARIA values.

mod adjust;
mod aria;
mod error;
mod group;
mod resolve;
mod tolerance;
mod validate;

pub use adjust::{adjust_layout_by_delta, ResizeTrigger};
pub use aria::{compute_aria_values, AriaValues};
pub use error::LayoutError;
pub use group::{PaneGroup, ResizeKey};
pub use resolve::resolve_pane_size;
pub use tolerance::{
    are_almost_equal, compare_with_tolerance, layouts_almost_equal, round_to_precision,
};
pub use validate::{check_feasible, default_layout, validate_layout};
