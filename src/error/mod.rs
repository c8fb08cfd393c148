//! Error types and handling for zohmg-install
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`config`]: Configuration and runtime detection errors
//! - [`fs`]: File system errors
//! - [`step`]: Errors raised by the provisioning steps

pub mod config;
pub mod fs;
pub mod step;

use miette::Diagnostic;
use thiserror::Error;

/// Exit code used for failures that have no subprocess status of their own
pub const SENTINEL_EXIT_CODE: i32 = 1;

/// Main error type for installer operations
#[derive(Error, Diagnostic, Debug)]
pub enum InstallError {
    // Privilege errors
    #[error("you need to be root. please sudo.")]
    #[diagnostic(
        code(zohmg_install::privilege::insufficient),
        help("Re-run the installer as root, e.g. 'sudo zohmg-install'")
    )]
    InsufficientPrivilege { euid: u32 },

    // Provisioning errors
    #[error("Failed to provision directory {path}: {reason}")]
    #[diagnostic(code(zohmg_install::provision::failed))]
    ProvisioningFailed { path: String, reason: String },

    // Deployment errors
    #[error("Failed to copy {description} to {destination}: {reason}")]
    #[diagnostic(code(zohmg_install::deploy::copy_failed))]
    DeploymentFailed {
        description: String,
        destination: String,
        reason: String,
    },

    #[error("No artifact matches '{pattern}' in {source_dir} ({description})")]
    #[diagnostic(
        code(zohmg_install::deploy::missing_artifact),
        help("Check that the bundled artifacts are present before installing")
    )]
    ArtifactMissing {
        description: String,
        pattern: String,
        source_dir: String,
    },

    #[error("Invalid artifact pattern '{pattern}': {reason}")]
    #[diagnostic(code(zohmg_install::deploy::invalid_pattern))]
    InvalidPattern { pattern: String, reason: String },

    // Build errors
    #[error("problems building the interface bridge: '{command}' exited with status {exit_code}")]
    #[diagnostic(
        code(zohmg_install::build::failed),
        help(
            "I need to know where to find jars for hbase, hadoop and hadoop streaming. \
             Please add them to $CLASSPATH and try again."
        )
    )]
    BuildFailed { command: String, exit_code: i32 },

    // Package install errors
    #[error("Package installation failed with status {exit_code} (log: {log})")]
    #[diagnostic(
        code(zohmg_install::package::install_failed),
        help("try again, it could work the second (or third) time.")
    )]
    PackageInstallFailed { exit_code: i32, log: String },

    #[error("Failed to remove build byproduct {path}: {reason}")]
    #[diagnostic(code(zohmg_install::package::cleanup_failed))]
    CleanupFailed { path: String, reason: String },

    // Subprocess errors
    #[error("Failed to run '{command}': {reason}")]
    #[diagnostic(
        code(zohmg_install::process::spawn_failed),
        help("Check that the program is installed and on $PATH")
    )]
    SpawnFailed {
        command: String,
        reason: String,
        exit_code: i32,
    },

    #[error("Failed to detect Python version using '{python}': {reason}")]
    #[diagnostic(
        code(zohmg_install::runtime::detection_failed),
        help("Set 'python_version' or 'site_root' in zohmg-install.yaml, or pass --site-root")
    )]
    RuntimeDetectionFailed {
        python: String,
        reason: String,
        exit_code: i32,
    },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(zohmg_install::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(zohmg_install::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(zohmg_install::config::invalid))]
    ConfigInvalid { message: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(zohmg_install::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(zohmg_install::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(zohmg_install::fs::io_error))]
    IoError { message: String },
}

impl InstallError {
    /// Process exit code for this error
    ///
    /// Subprocess failures propagate the subprocess status verbatim; everything
    /// else exits with [`SENTINEL_EXIT_CODE`].
    pub fn exit_code(&self) -> i32 {
        match self {
            InstallError::BuildFailed { exit_code, .. }
            | InstallError::PackageInstallFailed { exit_code, .. }
            | InstallError::SpawnFailed { exit_code, .. }
            | InstallError::RuntimeDetectionFailed { exit_code, .. } => *exit_code,
            _ => SENTINEL_EXIT_CODE,
        }
    }
}

impl From<std::io::Error> for InstallError {
    fn from(err: std::io::Error) -> Self {
        InstallError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for InstallError {
    fn from(err: serde_yaml::Error) -> Self {
        InstallError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, InstallError>;
