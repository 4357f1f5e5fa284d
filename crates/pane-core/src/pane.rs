// ABOUTME: Pane identity and sizing constraints.
// ABOUTME: All sizes are percentages of the total layout space.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaneId(pub u64);

impl std::fmt::Display for PaneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pane-{}", self.0)
    }
}

/// Size limits for a single pane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaneConstraints {
    /// Smallest open size
    pub min_size: f64,

    /// Largest size the pane may grow to
    pub max_size: f64,

    /// Size the pane snaps to when collapsed (only meaningful if collapsible)
    pub collapsed_size: f64,

    /// Whether dragging below the collapse halfway point collapses the pane
    pub collapsible: bool,

    /// Preferred initial size; unset panes share the remaining space
    pub default_size: Option<f64>,
}

impl Default for PaneConstraints {
    fn default() -> Self {
        Self {
            min_size: 0.0,
            max_size: 100.0,
            collapsed_size: 0.0,
            collapsible: false,
            default_size: None,
        }
    }
}

impl PaneConstraints {
    pub fn new(min_size: f64, max_size: f64) -> Self {
        Self {
            min_size,
            max_size,
            ..Self::default()
        }
    }

    /// Make the pane collapsible down to `collapsed_size`.
    pub fn collapsible(mut self, collapsed_size: f64) -> Self {
        self.collapsible = true;
        self.collapsed_size = collapsed_size;
        self
    }

    pub fn with_default_size(mut self, size: f64) -> Self {
        self.default_size = Some(size);
        self
    }

    /// Check `0 <= collapsed_size <= min_size <= max_size <= 100`.
    ///
    /// The sizing functions never call this themselves; they accept any
    /// values and just do the arithmetic.
    pub fn validate(&self) -> Result<(), ConstraintError> {
        let in_range = |v: f64| v.is_finite() && (0.0..=100.0).contains(&v);

        for (field, value) in [
            ("min_size", self.min_size),
            ("max_size", self.max_size),
            ("collapsed_size", self.collapsed_size),
        ] {
            if !in_range(value) {
                return Err(ConstraintError::OutOfRange { field, value });
            }
        }
        if let Some(size) = self.default_size {
            if !in_range(size) {
                return Err(ConstraintError::OutOfRange {
                    field: "default_size",
                    value: size,
                });
            }
        }

        if self.min_size > self.max_size {
            return Err(ConstraintError::MinAboveMax {
                min: self.min_size,
                max: self.max_size,
            });
        }
        if self.collapsible && self.collapsed_size > self.min_size {
            return Err(ConstraintError::CollapsedAboveMin {
                collapsed: self.collapsed_size,
                min: self.min_size,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConstraintError {
    #[error("{field} must be between 0 and 100, got {value}")]
    OutOfRange { field: &'static str, value: f64 },

    #[error("min_size {min} is larger than max_size {max}")]
    MinAboveMax { min: f64, max: f64 },

    #[error("collapsed_size {collapsed} is larger than min_size {min}")]
    CollapsedAboveMin { collapsed: f64, min: f64 },
}
