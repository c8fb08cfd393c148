//! Host provisioning for the zohmg platform
//!
//! This module handles:
//! - Checking for root privileges
//! - Creating the shared directory
//! - Copying bundled artifacts, or building the interface-bridge jar
//! - Running the package installer and validating its log
//!
//! Steps run strictly in that order. The first failure ends the run and
//! nothing already done is rolled back.

pub mod build;
pub mod bundle;
pub mod package;
pub mod privilege;
pub mod provision;

use std::fmt;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::config::{BuildMode, InstallConfig};
use crate::error::Result;
use crate::host::Host;
use crate::ui::Reporter;

/// Progress of an installer run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    PrivilegeChecked,
    DirProvisioned,
    ArtifactsDeployed,
    PackageInstalled,
    Done,
    /// Terminal; carries the process exit code
    Failed(i32),
}

impl Stage {
    fn ordinal(self) -> u8 {
        match self {
            Stage::Start => 0,
            Stage::PrivilegeChecked => 1,
            Stage::DirProvisioned => 2,
            Stage::ArtifactsDeployed => 3,
            Stage::PackageInstalled => 4,
            Stage::Done => 5,
            Stage::Failed(_) => 6,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Start => write!(f, "start"),
            Stage::PrivilegeChecked => write!(f, "privilege checked"),
            Stage::DirProvisioned => write!(f, "directory provisioned"),
            Stage::ArtifactsDeployed => write!(f, "artifacts deployed"),
            Stage::PackageInstalled => write!(f, "package installed"),
            Stage::Done => write!(f, "done"),
            Stage::Failed(code) => write!(f, "failed ({})", code),
        }
    }
}

/// Summary of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    pub build_mode: BuildMode,
    /// Whether this run created the shared root
    pub shared_root_created: bool,
    /// Every path written into the shared or site root
    pub deployed: Vec<PathBuf>,
    pub confirmations: Vec<String>,
    pub removed: Vec<PathBuf>,
}

/// Runs the provisioning sequence for one host
pub struct Installer<'a, H: Host> {
    host: &'a H,
    config: &'a InstallConfig,
    stage: Stage,
}

impl<'a, H: Host> Installer<'a, H> {
    pub fn new(host: &'a H, config: &'a InstallConfig) -> Self {
        Self {
            host,
            config,
            stage: Stage::Start,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Run every step; a runner is single use
    pub fn run(&mut self, reporter: &mut dyn Reporter) -> Result<InstallReport> {
        debug_assert_eq!(self.stage, Stage::Start, "installer runs only once");

        match self.run_steps(reporter) {
            Ok(report) => {
                self.advance(Stage::Done);
                Ok(report)
            }
            Err(err) => {
                self.stage = Stage::Failed(err.exit_code());
                debug!(stage = %self.stage, error = %err, "installation stopped");
                Err(err)
            }
        }
    }

    fn run_steps(&mut self, reporter: &mut dyn Reporter) -> Result<InstallReport> {
        privilege::check_privilege(self.host)?;
        self.advance(Stage::PrivilegeChecked);
        reporter.step("installing!");

        let shared_root_created = provision::ensure_dir(&self.config.target.shared_root)?;
        self.advance(Stage::DirProvisioned);

        let deployed = self.deploy_artifacts(reporter)?;
        self.advance(Stage::ArtifactsDeployed);

        let outcome = package::install_and_validate(self.host, self.config, reporter)?;
        self.advance(Stage::PackageInstalled);

        Ok(InstallReport {
            build_mode: self.config.build_mode,
            shared_root_created,
            deployed,
            confirmations: outcome.confirmations,
            removed: outcome.removed,
        })
    }

    /// Exactly one source provides the interface-bridge jar: the build, or the bundle plan
    fn deploy_artifacts(&self, reporter: &mut dyn Reporter) -> Result<Vec<PathBuf>> {
        let mut deployed = Vec::new();

        if self.config.build_mode == BuildMode::FromSource {
            deployed.extend(build::build_and_deploy(self.host, self.config, reporter)?);
        }

        for bundle in bundle::plan(self.config) {
            deployed.extend(bundle::deploy(&bundle, reporter)?);
        }

        Ok(deployed)
    }

    fn advance(&mut self, next: Stage) {
        debug_assert!(
            next.ordinal() > self.stage.ordinal(),
            "stage cannot go from {} to {}",
            self.stage,
            next
        );
        info!(from = %self.stage, to = %next, "installer stage");
        self.stage = next;
    }
}
