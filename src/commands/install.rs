//! Install command implementation
//!
//! Resolves the host configuration once, then hands it to the installer:
//! 1. Refuse to go on without root
//! 2. Find the working directory and optional config file
//! 3. Detect the python runtime unless the site root is given
//! 4. Run the provisioning sequence against the real host

use std::path::PathBuf;

use tracing::{debug, info};

use crate::cli::InstallArgs;
use crate::config::{InstallConfig, load_config_file};
use crate::error::Result;
use crate::host::SystemHost;
use crate::installer::Installer;
use crate::installer::privilege::check_privilege;
use crate::ui::{ConsoleReporter, print_success};

use super::helpers::resolve_work_dir;

/// Run install command
pub fn run(directory: Option<PathBuf>, args: InstallArgs) -> Result<()> {
    let host = SystemHost;
    // Runtime detection spawns python; a non-root run must stop before that
    check_privilege(&host)?;

    let work_dir = resolve_work_dir(directory)?;
    let file = load_config_file(&work_dir, args.config.as_deref())?;

    let config = InstallConfig::resolve(&host, &work_dir, file, args.overrides())?;
    debug!(?config, "resolved install configuration");

    let mut reporter = ConsoleReporter::new();
    let mut installer = Installer::new(&host, &config);
    let report = installer.run(&mut reporter)?;

    info!(
        stage = %installer.stage(),
        deployed = report.deployed.len(),
        confirmations = report.confirmations.len(),
        removed = report.removed.len(),
        "installation finished"
    );
    print_success(&config.platform);

    Ok(())
}
