// ABOUTME: TOML description of a pane group for the command line tool.
// ABOUTME: Lists pane constraints and an optional starting layout.

use std::path::Path;

use anyhow::{Context, Result};
use pane_core::{Config, PaneConstraints, PaneId};
use pane_layout::PaneGroup;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GroupFile {
    /// Key under which the layout is persisted
    pub id: String,

    /// Starting layout; defaults to the panes' default sizes
    #[serde(default)]
    pub layout: Option<Vec<f64>>,

    pub panes: Vec<PaneEntry>,
}

#[derive(Debug, Deserialize)]
pub struct PaneEntry {
    /// Defaults to the pane's position, counting from 1
    pub id: Option<u64>,

    #[serde(flatten)]
    pub constraints: PaneConstraints,
}

impl GroupFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read group file {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid group file {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn build(&self, config: &Config) -> Result<PaneGroup> {
        let panes = self.panes.iter().enumerate().map(|(index, entry)| {
            let id = entry.id.unwrap_or(index as u64 + 1);
            (PaneId(id), entry.constraints)
        });
        let mut group = PaneGroup::new(panes, config)?;
        if let Some(layout) = &self.layout {
            group.set_layout(layout)?;
        }
        Ok(group)
    }
}
