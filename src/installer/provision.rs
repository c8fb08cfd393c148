//! Directory provisioning

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, step};

/// Make sure `path` exists as a directory
///
/// Creates missing parents. Returns `true` when the directory was created and
/// `false` when it already existed.
pub fn ensure_dir(path: &Path) -> Result<bool> {
    if path.is_dir() {
        debug!(path = %path.display(), "directory already present");
        return Ok(false);
    }

    if path.exists() {
        return Err(step::provisioning_failed(
            path,
            "path exists and is not a directory",
        ));
    }

    fs::create_dir_all(path).map_err(|e| step::provisioning_failed(path, e.to_string()))?;
    debug!(path = %path.display(), "created directory");
    Ok(true)
}
