//! Native build of the interface-bridge jar

use std::path::PathBuf;

use tracing::{debug, warn};

use super::bundle::{self, BRIDGE_PATTERN, Bundle};
use crate::config::InstallConfig;
use crate::error::{Result, config as config_error, step};
use crate::host::{CommandSpec, Host, OutputMode};
use crate::ui::Reporter;

/// Directory inside the build directory where the build tool leaves the jar
const BUILD_OUTPUT_DIR: &str = "build";

/// Run the build tool, then copy the built jar into the shared root
///
/// A failing build ends the run; there is no fallback to the prebuilt jar.
pub fn build_and_deploy<H: Host>(
    host: &H,
    config: &InstallConfig,
    reporter: &mut dyn Reporter,
) -> Result<Vec<PathBuf>> {
    reporter.step("building java hook-ups");

    if !config.build_dir.is_dir() {
        return Err(config_error::invalid(format!(
            "build directory {} does not exist",
            config.build_dir.display()
        )));
    }

    let spec = CommandSpec::from_argv(&config.build_command)
        .ok_or_else(|| config_error::invalid("build_command must not be empty"))?
        .current_dir(&config.build_dir)
        .output(OutputMode::Inherit);

    let result = host.run(&spec)?;
    if !result.success() {
        warn!(command = %spec.display(), exit_code = result.exit_code, "build failed");
        return Err(step::build_failed(spec.display(), result.exit_code));
    }
    debug!(command = %spec.display(), "build succeeded");

    let built = Bundle::new(
        "built darling jar",
        config.build_dir.join(BUILD_OUTPUT_DIR),
        BRIDGE_PATTERN,
        &config.target.shared_root,
    );
    bundle::deploy(&built, reporter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuildMode;
    use crate::config::settings::InstallTarget;
    use crate::error::InstallError;
    use crate::host::fake::{FakeHost, Reply};
    use crate::ui::recording::RecordingReporter;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn config(root: &Path) -> InstallConfig {
        let shared_root = root.join("share");
        fs::create_dir_all(&shared_root).unwrap();
        let build_dir = root.join("java/darling");
        fs::create_dir_all(&build_dir).unwrap();

        InstallConfig {
            work_dir: root.to_path_buf(),
            platform: "zohmg".to_string(),
            target: InstallTarget {
                shared_root,
                site_root: root.join("site"),
            },
            build_mode: BuildMode::FromSource,
            lib_dir: root.join("lib"),
            log_path: root.join("tmp/zohmg-install.log"),
            build_dir,
            build_command: vec!["ant".to_string()],
            install_command: vec!["python".to_string()],
            byproducts: Vec::new(),
            confirmation_markers: Vec::new(),
        }
    }

    #[test]
    fn test_build_then_copy_jar() {
        let temp = TempDir::new().unwrap();
        let config = config(temp.path());
        let host =
            FakeHost::root().reply("ant", Reply::ok("").creating("build/darling-0.4.jar", "jar"));

        let mut reporter = RecordingReporter::default();
        let deployed = build_and_deploy(&host, &config, &mut reporter).unwrap();

        assert_eq!(deployed, vec![temp.path().join("share/darling-0.4.jar")]);
        let calls = host.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].current_dir.as_deref(), Some(config.build_dir.as_path()));
        assert_eq!(calls[0].output, OutputMode::Inherit);
        assert_eq!(
            reporter.steps(),
            vec!["building java hook-ups", "copying built darling jar"]
        );
    }

    #[test]
    fn test_build_failure_propagates_exit_code() {
        let temp = TempDir::new().unwrap();
        let config = config(temp.path());
        fs::create_dir_all(temp.path().join("lib")).unwrap();
        fs::write(temp.path().join("lib/darling-0.3.jar"), "prebuilt").unwrap();
        let host = FakeHost::root().reply("ant", Reply::exit(13));

        let err = build_and_deploy(&host, &config, &mut RecordingReporter::default()).unwrap_err();

        assert!(matches!(err, InstallError::BuildFailed { exit_code: 13, .. }));
        assert_eq!(err.exit_code(), 13);
        assert!(!temp.path().join("share/darling-0.3.jar").exists());
    }

    #[test]
    fn test_build_without_output_jar() {
        let temp = TempDir::new().unwrap();
        let config = config(temp.path());
        let host = FakeHost::root().reply("ant", Reply::ok(""));

        let err = build_and_deploy(&host, &config, &mut RecordingReporter::default()).unwrap_err();
        assert!(matches!(err, InstallError::ArtifactMissing { .. }));
    }

    #[test]
    fn test_missing_build_dir() {
        let temp = TempDir::new().unwrap();
        let mut config = config(temp.path());
        config.build_dir = temp.path().join("java/missing");
        let host = FakeHost::root().reply("ant", Reply::ok(""));

        let err = build_and_deploy(&host, &config, &mut RecordingReporter::default()).unwrap_err();
        assert!(matches!(err, InstallError::ConfigInvalid { .. }));
        assert!(host.calls().is_empty());
    }
}
