use clap::Args;
use std::path::PathBuf;

use crate::config::Overrides;

/// Arguments for installing; accepted with or without the `install` subcommand
#[derive(Args, Debug)]
pub struct InstallArgs {
    /// Build the darling jar with ant instead of copying the bundled one
    #[arg(long, global = true, env = "ZOHMG_BUILD_FROM_SOURCE")]
    pub build_from_source: bool,

    /// Directory receiving the jar and Hbase.thrift (default /usr/share/zohmg)
    #[arg(long, global = true, value_name = "DIR")]
    pub shared_root: Option<PathBuf>,

    /// Python site-packages directory receiving the eggs (detected by default)
    #[arg(long, global = true, value_name = "DIR")]
    pub site_root: Option<PathBuf>,

    /// Python interpreter used for detection and setup.py
    #[arg(long, global = true, value_name = "EXE")]
    pub python: Option<String>,

    /// Config file (default zohmg-install.yaml in the working directory)
    #[arg(long, global = true, value_name = "FILE", env = "ZOHMG_INSTALL_CONFIG")]
    pub config: Option<PathBuf>,
}

impl InstallArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            build_from_source: self.build_from_source,
            shared_root: self.shared_root.clone(),
            site_root: self.site_root.clone(),
            python: self.python.clone(),
        }
    }
}
