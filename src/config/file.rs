//! `zohmg-install.yaml` loading
//!
//! The file is optional. Every key is optional too; missing keys fall back to
//! the built-in defaults in [`super::settings`].

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, config as config_error};

/// Config filename looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "zohmg-install.yaml";

/// Raw contents of `zohmg-install.yaml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub platform: Option<String>,
    pub shared_root: Option<PathBuf>,
    pub site_root: Option<PathBuf>,
    pub python: Option<String>,
    pub python_version: Option<String>,
    pub lib_dir: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
    pub build_dir: Option<PathBuf>,
    pub build_command: Option<Vec<String>>,
    pub install_command: Option<Vec<String>>,
    pub byproducts: Option<Vec<PathBuf>>,
    pub confirmation_markers: Option<Vec<String>>,
    pub build_from_source: Option<bool>,
}

impl ConfigFile {
    /// Parse from YAML; an empty document yields the defaults
    pub fn from_yaml(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }
}

/// Load the config file
///
/// With an explicit path the file must exist. Otherwise `zohmg-install.yaml`
/// in `work_dir` is read when present and the defaults are used when it isn't.
pub fn load_config_file(work_dir: &Path, explicit: Option<&Path>) -> Result<ConfigFile> {
    let path = match explicit {
        Some(path) => {
            let path = work_dir.join(path);
            if !path.is_file() {
                return Err(config_error::not_found(path.display().to_string()));
            }
            path
        }
        None => {
            let path = work_dir.join(CONFIG_FILE_NAME);
            if !path.exists() {
                return Ok(ConfigFile::default());
            }
            path
        }
    };

    let content = fs::read_to_string(&path).map_err(|e| {
        crate::error::fs::read_failed(path.display().to_string(), e.to_string())
    })?;

    ConfigFile::from_yaml(&content)
        .map_err(|e| config_error::parse_failed(path.display().to_string(), e.to_string()))
}
