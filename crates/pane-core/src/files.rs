// ABOUTME: File locations and writes shared by config and layout storage.
// ABOUTME: Keeps every splitpane file under one per-user directory.

use std::path::{Path, PathBuf};

const APP_DIR: &str = "splitpane";

/// `<base>/splitpane/<file_name>`, if the platform has a `base` directory
pub(crate) fn app_file(base: Option<PathBuf>, file_name: &str) -> Option<PathBuf> {
    base.map(|p| p.join(APP_DIR).join(file_name))
}

/// Write `contents` to `path`, creating missing parent directories
pub(crate) fn write_creating_dirs(path: &Path, contents: impl AsRef<[u8]>) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)
}
