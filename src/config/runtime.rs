//! Python runtime detection

use std::path::PathBuf;

use tracing::debug;

use crate::error::{Result, SENTINEL_EXIT_CODE, config as config_error};
use crate::host::{CommandSpec, Host};

/// Snippet printing `major.minor` of the interpreter running it
const VERSION_SNIPPET: &str = "import sys; print('%d.%d' % sys.version_info[:2])";

/// Ask `python` for its `major.minor` version
pub fn detect_python_version<H: Host>(host: &H, python: &str) -> Result<String> {
    let spec = CommandSpec::new(python, ["-c", VERSION_SNIPPET]);
    let result = host.run(&spec).map_err(|e| {
        config_error::runtime_detection_failed(python, e.to_string(), e.exit_code())
    })?;

    if !result.success() {
        return Err(config_error::runtime_detection_failed(
            python,
            format!("exited with status {}", result.exit_code),
            result.exit_code,
        ));
    }

    let version = result.output.trim();
    if !is_major_minor(version) {
        return Err(config_error::runtime_detection_failed(
            python,
            format!("unexpected version output '{}'", version),
            SENTINEL_EXIT_CODE,
        ));
    }

    debug!(python, version, "detected python version");
    Ok(version.to_string())
}

/// Check for a `<digits>.<digits>` version string
pub fn is_major_minor(version: &str) -> bool {
    let Some((major, minor)) = version.split_once('.') else {
        return false;
    };
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    digits(major) && digits(minor)
}

/// Site-packages directory for a Python version
pub fn site_root_for(version: &str) -> PathBuf {
    PathBuf::from(format!("/usr/lib/python{}/site-packages", version))
}
