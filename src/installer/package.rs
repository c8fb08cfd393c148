//! Package installation and validation
//!
//! The package tool is opaque: a zero exit status alone does not prove it
//! installed anything. After a successful run the log is scanned for
//! confirmation lines, which are shown to the operator. The scan never
//! changes the outcome; only the exit status does.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::InstallConfig;
use crate::error::{Result, config as config_error, fs as fs_error, step};
use crate::host::{CommandSpec, Host, OutputMode};
use crate::ui::Reporter;

/// What a successful package install produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageOutcome {
    /// Log lines showing the package was installed or copied
    pub confirmations: Vec<String>,
    /// Byproduct paths that existed and were removed
    pub removed: Vec<PathBuf>,
}

/// Run the package installer with output logged, then validate and clean up
pub fn install_and_validate<H: Host>(
    host: &H,
    config: &InstallConfig,
    reporter: &mut dyn Reporter,
) -> Result<PackageOutcome> {
    let spec = CommandSpec::from_argv(&config.install_command)
        .ok_or_else(|| config_error::invalid("install_command must not be empty"))?
        .current_dir(&config.work_dir)
        .output(OutputMode::Log(config.log_path.clone()));

    reporter.step(&format!("installing {}: {}", config.platform, spec.display()));

    if let Some(log_dir) = config.log_path.parent() {
        fs::create_dir_all(log_dir)
            .map_err(|e| fs_error::write_failed(log_dir.display().to_string(), e.to_string()))?;
    }

    reporter.begin_wait(&format!("installing {}", config.platform));
    let result = host.run(&spec);
    reporter.end_wait();
    let result = result?;

    if !result.success() {
        warn!(
            exit_code = result.exit_code,
            log = %config.log_path.display(),
            "package installation failed"
        );
        return Err(step::package_install_failed(
            result.exit_code,
            &config.log_path,
        ));
    }

    let log = read_log(&config.log_path)?;
    let confirmations = scan_confirmations(&log, &config.confirmation_markers, &config.platform);
    if confirmations.is_empty() {
        debug!(log = %config.log_path.display(), "no confirmation lines in install log");
    }
    for line in &confirmations {
        reporter.confirmation(line);
    }

    let removed = remove_byproducts(&config.byproducts)?;

    Ok(PackageOutcome {
        confirmations,
        removed,
    })
}

/// Lines of `log` that contain `<marker> <package>` for any marker
pub fn scan_confirmations(log: &str, markers: &[String], package: &str) -> Vec<String> {
    let needles: Vec<String> = markers
        .iter()
        .map(|marker| format!("{} {}", marker, package))
        .collect();

    log.lines()
        .filter(|line| needles.iter().any(|needle| line.contains(needle.as_str())))
        .map(|line| line.trim_end().to_string())
        .collect()
}

/// Remove every path in `paths` that exists
pub fn remove_byproducts(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut removed = Vec::new();

    for path in paths {
        let Ok(metadata) = fs::symlink_metadata(path) else {
            continue;
        };

        let result = if metadata.is_dir() {
            fs::remove_dir_all(path)
        } else {
            fs::remove_file(path)
        };
        result.map_err(|e| step::cleanup_failed(path, e.to_string()))?;

        debug!(path = %path.display(), "removed build byproduct");
        removed.push(path.clone());
    }

    Ok(removed)
}

fn read_log(path: &Path) -> Result<String> {
    let bytes =
        fs::read(path).map_err(|e| fs_error::read_failed(path.display().to_string(), e.to_string()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
