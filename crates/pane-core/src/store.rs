// ABOUTME: Persistence of pane group layouts between runs.
// ABOUTME: Stores layouts and expand-to sizes per group as compressed JSON.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::{Read, Write};
use std::path::PathBuf;

use crate::files::{app_file, write_creating_dirs};
use crate::PaneId;

/// Size a collapsed pane returns to when expanded
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavedPaneSize {
    pub pane: PaneId,
    pub size: f64,
}

/// Saved state of one pane group
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SavedGroup {
    /// Pane order the layout was saved with
    pub panes: Vec<PaneId>,
    pub layout: Vec<f64>,
    #[serde(default)]
    pub expand_to_sizes: Vec<SavedPaneSize>,
}

/// All saved layouts, keyed by group id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutStore {
    pub version: u32,
    pub groups: BTreeMap<String, SavedGroup>,
}

impl LayoutStore {
    pub const CURRENT_VERSION: u32 = 1;

    pub fn new() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            groups: BTreeMap::new(),
        }
    }

    pub fn get(&self, group_id: &str) -> Option<&SavedGroup> {
        self.groups.get(group_id)
    }

    pub fn insert(&mut self, group_id: impl Into<String>, group: SavedGroup) {
        self.groups.insert(group_id.into(), group);
    }

    pub fn remove(&mut self, group_id: &str) -> Option<SavedGroup> {
        self.groups.remove(group_id)
    }

    /// Get the default store path (~/.local/state/splitpane/layouts.bin)
    pub fn default_path() -> Option<PathBuf> {
        app_file(dirs::state_dir().or_else(dirs::data_local_dir), "layouts.bin")
    }

    /// Save the store to disk
    pub fn save(&self, path: &std::path::Path) -> Result<(), StorageError> {
        let json = serde_json::to_vec(self)?;
        let mut encoder = zstd::Encoder::new(Vec::new(), 3)?;
        encoder.write_all(&json)?;
        let compressed = encoder.finish()?;

        write_creating_dirs(path, compressed)?;
        Ok(())
    }

    pub fn save_to_default(&self) -> Result<PathBuf, StorageError> {
        let path = Self::default_path().ok_or(StorageError::NoStatePath)?;
        self.save(&path)?;
        Ok(path)
    }

    /// Load the store from disk
    pub fn load(path: &std::path::Path) -> Result<Self, StorageError> {
        let compressed = std::fs::read(path)?;

        let mut decoder = zstd::Decoder::new(&compressed[..])?;
        let mut json = Vec::new();
        decoder.read_to_end(&mut json)?;

        let store: LayoutStore = serde_json::from_slice(&json)?;
        if store.version > Self::CURRENT_VERSION {
            return Err(StorageError::UnsupportedVersion(store.version));
        }

        Ok(store)
    }

    /// Load from the default path, or start empty if missing or unreadable
    pub fn load_or_default() -> Self {
        Self::default_path()
            .and_then(|path| Self::load(&path).ok())
            .unwrap_or_default()
    }
}

impl Default for LayoutStore {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not determine state directory")]
    NoStatePath,

    #[error("Unsupported layout store version: {0}")]
    UnsupportedVersion(u32),
}
