//! Errors raised by the provisioning steps

use std::path::Path;

use super::InstallError;

/// Creates an insufficient privilege error
pub fn insufficient_privilege(euid: u32) -> InstallError {
    InstallError::InsufficientPrivilege { euid }
}

/// Creates a provisioning failed error
pub fn provisioning_failed(path: &Path, reason: impl Into<String>) -> InstallError {
    InstallError::ProvisioningFailed {
        path: path.display().to_string(),
        reason: reason.into(),
    }
}

/// Creates a deployment failed error
pub fn deployment_failed(
    description: impl Into<String>,
    destination: &Path,
    reason: impl Into<String>,
) -> InstallError {
    InstallError::DeploymentFailed {
        description: description.into(),
        destination: destination.display().to_string(),
        reason: reason.into(),
    }
}

/// Creates an artifact missing error
pub fn artifact_missing(
    description: impl Into<String>,
    pattern: impl Into<String>,
    source_dir: &Path,
) -> InstallError {
    InstallError::ArtifactMissing {
        description: description.into(),
        pattern: pattern.into(),
        source_dir: source_dir.display().to_string(),
    }
}

/// Creates a build failed error
pub fn build_failed(command: impl Into<String>, exit_code: i32) -> InstallError {
    InstallError::BuildFailed {
        command: command.into(),
        exit_code,
    }
}

/// Creates a package install failed error
pub fn package_install_failed(exit_code: i32, log: &Path) -> InstallError {
    InstallError::PackageInstallFailed {
        exit_code,
        log: log.display().to_string(),
    }
}

/// Creates a cleanup failed error
pub fn cleanup_failed(path: &Path, reason: impl Into<String>) -> InstallError {
    InstallError::CleanupFailed {
        path: path.display().to_string(),
        reason: reason.into(),
    }
}
