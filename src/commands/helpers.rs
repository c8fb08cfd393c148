//! Command helper utilities

use std::path::{Path, PathBuf};

use crate::error::{Result, config as config_error, fs as fs_error};

/// Resolve the working directory from the optional `-C` argument
///
/// Relative paths are taken against the current directory. The result
/// must be an existing directory.
pub fn resolve_work_dir(directory: Option<PathBuf>) -> Result<PathBuf> {
    let cwd = std::env::current_dir()
        .map_err(|e| fs_error::io_error(format!("Failed to get current directory: {}", e)))?;
    work_dir_from(&cwd, directory)
}

fn work_dir_from(cwd: &Path, directory: Option<PathBuf>) -> Result<PathBuf> {
    let dir = match directory {
        Some(path) => cwd.join(path),
        None => cwd.to_path_buf(),
    };

    if !dir.is_dir() {
        return Err(config_error::invalid(format!(
            "working directory {} does not exist",
            dir.display()
        )));
    }
    Ok(dir)
}
