//! Configuration handling for zohmg-install
//!
//! This module contains:
//! - `zohmg-install.yaml` - optional host overrides read once at startup
//! - Python runtime detection used to derive the site-packages root
//! - [`InstallConfig`] - the immutable settings threaded through every step

pub mod file;
pub mod runtime;
pub mod settings;

// Re-export commonly used types
pub use file::load_config_file;
pub use settings::{BuildMode, InstallConfig, Overrides};
