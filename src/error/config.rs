//! Configuration errors

use super::InstallError;

/// Creates a config not found error
pub fn not_found(path: impl Into<String>) -> InstallError {
    InstallError::ConfigNotFound { path: path.into() }
}

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> InstallError {
    InstallError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> InstallError {
    InstallError::ConfigInvalid {
        message: message.into(),
    }
}

/// Creates a runtime detection error
pub fn runtime_detection_failed(
    python: impl Into<String>,
    reason: impl Into<String>,
    exit_code: i32,
) -> InstallError {
    InstallError::RuntimeDetectionFailed {
        python: python.into(),
        reason: reason.into(),
        exit_code,
    }
}
