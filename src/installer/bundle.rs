//! Bundle deployment
//!
//! A bundle is a prebuilt artifact shipped with the platform: a glob pattern
//! resolved inside a source directory and a destination root to copy the
//! matches into.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

use crate::common::fs::copy_entry;
use crate::config::{BuildMode, InstallConfig};
use crate::error::{InstallError, Result, fs as fs_error, step};
use crate::ui::Reporter;

/// File name pattern of the interface-bridge jar, both prebuilt and built
pub const BRIDGE_PATTERN: &str = "darling-*.jar";

/// A named artifact to copy into a destination root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    pub description: String,
    pub source_dir: PathBuf,
    /// Glob relative to `source_dir`
    pub pattern: String,
    pub destination: PathBuf,
}

impl Bundle {
    pub fn new(
        description: impl Into<String>,
        source_dir: impl Into<PathBuf>,
        pattern: impl Into<String>,
        destination: impl Into<PathBuf>,
    ) -> Self {
        Self {
            description: description.into(),
            source_dir: source_dir.into(),
            pattern: pattern.into(),
            destination: destination.into(),
        }
    }
}

/// Bundles to copy for a run, in display order
///
/// The prebuilt interface-bridge jar is only part of the plan in
/// [`BuildMode::Bundled`]; in [`BuildMode::FromSource`] the native builder
/// provides it instead.
pub fn plan(config: &InstallConfig) -> Vec<Bundle> {
    let lib = &config.lib_dir;
    let shared = &config.target.shared_root;
    let site = &config.target.site_root;

    let mut bundles = Vec::with_capacity(4);
    if config.build_mode == BuildMode::Bundled {
        bundles.push(Bundle::new("pre-built darling jar", lib, BRIDGE_PATTERN, shared));
    }
    bundles.push(Bundle::new("bundled thrift egg", lib, "thrift-*.egg", site));
    bundles.push(Bundle::new("bundled hbase egg", lib, "hbase-*.egg", site));
    bundles.push(Bundle::new(
        "bundled hbase thrift interface",
        lib,
        "Hbase.thrift",
        shared,
    ));
    bundles
}

/// Resolve a bundle's pattern to the matching paths, in lexical order
///
/// A matching directory (an unzipped egg, say) is returned as a whole and not
/// searched further.
pub fn resolve(bundle: &Bundle) -> Result<Vec<PathBuf>> {
    let glob = Glob::new(&bundle.pattern).map_err(|e| InstallError::InvalidPattern {
        pattern: bundle.pattern.clone(),
        reason: e.to_string(),
    })?;

    if !bundle.source_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut matches = Vec::new();
    let mut walker = WalkDir::new(&bundle.source_dir)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter();

    while let Some(entry) = walker.next() {
        let entry = entry.map_err(|e| {
            fs_error::read_failed(bundle.source_dir.display().to_string(), e.to_string())
        })?;
        let relative = relative_candidate(&bundle.source_dir, entry.path());

        if glob.matched(&CandidatePath::from(relative.as_str())).is_some() {
            matches.push(entry.path().to_path_buf());
            if entry.file_type().is_dir() {
                walker.skip_current_dir();
            }
        }
    }

    Ok(matches)
}

/// Copy every match of `bundle` into its destination
///
/// Returns the destination paths. Fails when nothing matches the pattern.
pub fn deploy(bundle: &Bundle, reporter: &mut dyn Reporter) -> Result<Vec<PathBuf>> {
    reporter.step(&format!("copying {}", bundle.description));

    let sources = resolve(bundle)?;
    if sources.is_empty() {
        return Err(step::artifact_missing(
            &bundle.description,
            &bundle.pattern,
            &bundle.source_dir,
        ));
    }

    if !bundle.destination.is_dir() {
        return Err(step::deployment_failed(
            &bundle.description,
            &bundle.destination,
            "destination directory does not exist",
        ));
    }

    let mut deployed = Vec::with_capacity(sources.len());
    for source in sources {
        let Some(file_name) = source.file_name() else {
            continue;
        };
        let target = bundle.destination.join(file_name);

        copy_entry(&source, &target)
            .map_err(|e| step::deployment_failed(&bundle.description, &target, e.to_string()))?;
        debug!(from = %source.display(), to = %target.display(), "copied artifact");

        reporter.copied(&source, &target);
        deployed.push(target);
    }

    Ok(deployed)
}

/// Path of `path` relative to `base`, with `/` separators for glob matching
fn relative_candidate(base: &Path, path: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
