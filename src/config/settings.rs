//! Resolved installer settings
//!
//! [`InstallConfig`] is built once before provisioning starts, from the
//! built-in defaults, `zohmg-install.yaml` and command line overrides (in
//! increasing priority). Nothing reads the environment after that.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::file::ConfigFile;
use super::runtime;
use crate::error::{Result, config as config_error};
use crate::host::Host;

pub const DEFAULT_PLATFORM: &str = "zohmg";
const DEFAULT_PYTHON: &str = "python";
const DEFAULT_LIB_DIR: &str = "lib";
const DEFAULT_LOG_DIR: &str = "tmp";
pub const DEFAULT_BUILD_DIR: &str = "java/darling";
pub const DEFAULT_BUILD_TOOL: &str = "ant";
const DEFAULT_CONFIRMATION_MARKERS: &[&str] = &["Installing", "Copying"];

/// Where the interface-bridge artifact comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildMode {
    /// Copy the prebuilt jar shipped in the lib directory
    #[default]
    Bundled,
    /// Compile the jar with the native build tool
    FromSource,
}

/// Destination roots for deployed artifacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallTarget {
    /// Platform-wide artifacts (interface bridge, schema file)
    pub shared_root: PathBuf,
    /// Python site-packages (thrift and hbase eggs)
    pub site_root: PathBuf,
}

/// Command line overrides
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub build_from_source: bool,
    pub shared_root: Option<PathBuf>,
    pub site_root: Option<PathBuf>,
    pub python: Option<String>,
}

/// Immutable settings for one installer run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallConfig {
    /// Directory holding `setup.py`, the lib directory and the log directory
    pub work_dir: PathBuf,
    /// Platform name; names the shared root, the log file and the egg-info byproduct
    pub platform: String,
    pub target: InstallTarget,
    pub build_mode: BuildMode,
    pub lib_dir: PathBuf,
    pub log_path: PathBuf,
    pub build_dir: PathBuf,
    pub build_command: Vec<String>,
    pub install_command: Vec<String>,
    pub byproducts: Vec<PathBuf>,
    pub confirmation_markers: Vec<String>,
}

impl InstallConfig {
    /// Resolve settings, detecting the Python version when the site root isn't given
    pub fn resolve<H: Host>(
        host: &H,
        work_dir: &Path,
        file: ConfigFile,
        overrides: Overrides,
    ) -> Result<Self> {
        let platform = file
            .platform
            .unwrap_or_else(|| DEFAULT_PLATFORM.to_string());
        validate_platform(&platform)?;

        let python = overrides
            .python
            .or(file.python)
            .unwrap_or_else(|| DEFAULT_PYTHON.to_string());

        let shared_root = overrides
            .shared_root
            .or(file.shared_root)
            .map(|p| work_dir.join(p))
            .unwrap_or_else(|| default_shared_root(&platform));

        let site_root = match overrides.site_root.or(file.site_root) {
            Some(path) => work_dir.join(path),
            None => {
                let version = match file.python_version {
                    Some(version) => {
                        if !runtime::is_major_minor(&version) {
                            return Err(config_error::invalid(format!(
                                "python_version must look like 'X.Y', got '{}'",
                                version
                            )));
                        }
                        version
                    }
                    None => runtime::detect_python_version(host, &python)?,
                };
                runtime::site_root_for(&version)
            }
        };

        let build_mode = if overrides.build_from_source || file.build_from_source == Some(true) {
            BuildMode::FromSource
        } else {
            BuildMode::Bundled
        };

        let log_dir = work_dir.join(file.log_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIR)));
        let log_path = log_dir.join(format!("{}-install.log", platform));

        let build_command = file
            .build_command
            .unwrap_or_else(|| vec![DEFAULT_BUILD_TOOL.to_string()]);
        if build_command.is_empty() {
            return Err(config_error::invalid("build_command must not be empty"));
        }

        let install_command = file.install_command.unwrap_or_else(|| {
            vec![python.clone(), "setup.py".to_string(), "install".to_string()]
        });
        if install_command.is_empty() {
            return Err(config_error::invalid("install_command must not be empty"));
        }

        let byproducts = file
            .byproducts
            .unwrap_or_else(|| {
                vec![
                    PathBuf::from("build"),
                    PathBuf::from("dist"),
                    PathBuf::from(format!("{}.egg-info", platform)),
                ]
            })
            .into_iter()
            .map(|p| work_dir.join(p))
            .collect();

        let confirmation_markers = file.confirmation_markers.unwrap_or_else(|| {
            DEFAULT_CONFIRMATION_MARKERS
                .iter()
                .map(|m| m.to_string())
                .collect()
        });

        let config = Self {
            work_dir: work_dir.to_path_buf(),
            target: InstallTarget {
                shared_root,
                site_root,
            },
            build_mode,
            lib_dir: work_dir.join(file.lib_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_LIB_DIR))),
            log_path,
            build_dir: work_dir.join(
                file.build_dir
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_BUILD_DIR)),
            ),
            build_command,
            install_command,
            byproducts,
            confirmation_markers,
            platform,
        };

        debug!(?config, "resolved install configuration");
        Ok(config)
    }
}

/// Shared root used when neither the CLI nor the config file names one
pub fn default_shared_root(platform: &str) -> PathBuf {
    PathBuf::from(format!("/usr/share/{}", platform))
}

fn validate_platform(platform: &str) -> Result<()> {
    if platform.is_empty() || platform.contains('/') || platform.contains('\\') {
        return Err(config_error::invalid(format!(
            "platform must be a plain name, got '{}'",
            platform
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InstallError;
    use crate::host::fake::{FakeHost, Reply};

    fn resolve(host: &FakeHost, file: ConfigFile, overrides: Overrides) -> Result<InstallConfig> {
        InstallConfig::resolve(host, Path::new("/work"), file, overrides)
    }

    #[test]
    fn test_defaults_follow_detected_python() {
        let host = FakeHost::root().reply("python", Reply::ok("2.5\n"));
        let config = resolve(&host, ConfigFile::default(), Overrides::default()).unwrap();

        assert_eq!(config.platform, "zohmg");
        assert_eq!(config.target.shared_root, PathBuf::from("/usr/share/zohmg"));
        assert_eq!(
            config.target.site_root,
            PathBuf::from("/usr/lib/python2.5/site-packages")
        );
        assert_eq!(config.build_mode, BuildMode::Bundled);
        assert_eq!(config.lib_dir, PathBuf::from("/work/lib"));
        assert_eq!(config.log_path, PathBuf::from("/work/tmp/zohmg-install.log"));
        assert_eq!(config.build_dir, PathBuf::from("/work/java/darling"));
        assert_eq!(config.build_command, vec!["ant"]);
        assert_eq!(config.install_command, vec!["python", "setup.py", "install"]);
        assert_eq!(
            config.byproducts,
            vec![
                PathBuf::from("/work/build"),
                PathBuf::from("/work/dist"),
                PathBuf::from("/work/zohmg.egg-info"),
            ]
        );
        assert_eq!(config.confirmation_markers, vec!["Installing", "Copying"]);
    }

    #[test]
    fn test_python_version_in_file_skips_detection() {
        let host = FakeHost::root();
        let file = ConfigFile {
            python_version: Some("2.6".to_string()),
            ..ConfigFile::default()
        };
        let config = resolve(&host, file, Overrides::default()).unwrap();

        assert_eq!(
            config.target.site_root,
            PathBuf::from("/usr/lib/python2.6/site-packages")
        );
        assert!(host.calls().is_empty());
    }

    #[test]
    fn test_invalid_python_version_in_file() {
        let host = FakeHost::root();
        let file = ConfigFile {
            python_version: Some("two".to_string()),
            ..ConfigFile::default()
        };
        let err = resolve(&host, file, Overrides::default()).unwrap_err();
        assert!(matches!(err, InstallError::ConfigInvalid { .. }));
    }

    #[test]
    fn test_overrides_beat_file() {
        let host = FakeHost::root();
        let file = ConfigFile {
            shared_root: Some(PathBuf::from("/opt/file-share")),
            site_root: Some(PathBuf::from("/opt/file-site")),
            python: Some("python2".to_string()),
            ..ConfigFile::default()
        };
        let overrides = Overrides {
            build_from_source: true,
            shared_root: Some(PathBuf::from("/opt/cli-share")),
            site_root: Some(PathBuf::from("/opt/cli-site")),
            python: Some("python3".to_string()),
        };
        let config = resolve(&host, file, overrides).unwrap();

        assert_eq!(config.target.shared_root, PathBuf::from("/opt/cli-share"));
        assert_eq!(config.target.site_root, PathBuf::from("/opt/cli-site"));
        assert_eq!(config.build_mode, BuildMode::FromSource);
        assert_eq!(config.install_command[0], "python3");
        assert!(host.calls().is_empty());
    }

    #[test]
    fn test_relative_roots_resolve_against_work_dir() {
        let host = FakeHost::root();
        let overrides = Overrides {
            shared_root: Some(PathBuf::from("share")),
            site_root: Some(PathBuf::from("site")),
            ..Overrides::default()
        };
        let config = resolve(&host, ConfigFile::default(), overrides).unwrap();

        assert_eq!(config.target.shared_root, PathBuf::from("/work/share"));
        assert_eq!(config.target.site_root, PathBuf::from("/work/site"));
    }

    #[test]
    fn test_platform_names_paths() {
        let host = FakeHost::root();
        let file = ConfigFile {
            platform: Some("acme".to_string()),
            site_root: Some(PathBuf::from("/site")),
            ..ConfigFile::default()
        };
        let config = resolve(&host, file, Overrides::default()).unwrap();

        assert_eq!(config.target.shared_root, PathBuf::from("/usr/share/acme"));
        assert_eq!(config.log_path, PathBuf::from("/work/tmp/acme-install.log"));
        assert!(config.byproducts.contains(&PathBuf::from("/work/acme.egg-info")));
    }

    #[test]
    fn test_build_from_source_in_file() {
        let host = FakeHost::root();
        let file = ConfigFile {
            site_root: Some(PathBuf::from("/site")),
            build_from_source: Some(true),
            ..ConfigFile::default()
        };
        let config = resolve(&host, file, Overrides::default()).unwrap();
        assert_eq!(config.build_mode, BuildMode::FromSource);
    }

    #[test]
    fn test_empty_commands_rejected() {
        let host = FakeHost::root();
        for file in [
            ConfigFile {
                site_root: Some(PathBuf::from("/site")),
                install_command: Some(Vec::new()),
                ..ConfigFile::default()
            },
            ConfigFile {
                site_root: Some(PathBuf::from("/site")),
                build_command: Some(Vec::new()),
                ..ConfigFile::default()
            },
        ] {
            let err = resolve(&host, file, Overrides::default()).unwrap_err();
            assert!(matches!(err, InstallError::ConfigInvalid { .. }));
        }
    }

    #[test]
    fn test_platform_with_separator_rejected() {
        let host = FakeHost::root();
        let file = ConfigFile {
            platform: Some("../etc".to_string()),
            ..ConfigFile::default()
        };
        let err = resolve(&host, file, Overrides::default()).unwrap_err();
        assert!(matches!(err, InstallError::ConfigInvalid { .. }));
    }

    #[test]
    fn test_detection_failure_stops_resolution() {
        let host = FakeHost::root().reply("python", Reply::exit(5));
        let err = resolve(&host, ConfigFile::default(), Overrides::default()).unwrap_err();
        assert_eq!(err.exit_code(), 5);
    }
}
