//! Common test utilities for zohmg-install integration tests

#![allow(clippy::expect_used)]

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A scratch checkout plus scratch install roots
pub struct TestWorkspace {
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Working directory passed with `-C`
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create an empty workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("checkout");
        std::fs::create_dir_all(&path).expect("Failed to create checkout directory");
        Self { temp, path }
    }

    /// Create a workspace with the bundled artifacts in `lib/`
    #[allow(dead_code)]
    pub fn with_bundles() -> Self {
        let workspace = Self::new();
        workspace.write_file("lib/darling-0.3.jar", "prebuilt jar");
        workspace.write_file("lib/thrift-0.1.egg", "thrift egg");
        workspace.write_file("lib/hbase-0.2.egg", "hbase egg");
        workspace.write_file("lib/Hbase.thrift", "service Hbase {}");
        std::fs::create_dir_all(workspace.site_root()).expect("Failed to create site root");
        workspace
    }

    /// Shared root outside the checkout, not created up front
    #[allow(dead_code)]
    pub fn shared_root(&self) -> PathBuf {
        self.temp.path().join("share/zohmg")
    }

    /// Site-packages root outside the checkout
    #[allow(dead_code)]
    pub fn site_root(&self) -> PathBuf {
        self.temp.path().join("site-packages")
    }

    /// Write `zohmg-install.yaml` pointing at the scratch roots, plus extra keys
    #[allow(dead_code)]
    pub fn write_config(&self, extra: &str) {
        let yaml = format!(
            "shared_root: {}\nsite_root: {}\n{}",
            self.shared_root().display(),
            self.site_root().display(),
            extra
        );
        self.write_file("zohmg-install.yaml", &yaml);
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Command running the binary inside this workspace
    #[allow(dead_code)]
    pub fn cmd(&self) -> Command {
        let mut cmd = zohmg_cmd();
        cmd.arg("-C").arg(&self.path);
        cmd
    }
}

/// The real zohmg-install binary with a clean environment
#[allow(deprecated)]
pub fn zohmg_cmd() -> Command {
    let mut cmd = Command::cargo_bin("zohmg-install").expect("binary should be built");
    cmd.env_remove("ZOHMG_INSTALL_DIR")
        .env_remove("ZOHMG_INSTALL_CONFIG")
        .env_remove("ZOHMG_BUILD_FROM_SOURCE")
        .env_remove("RUST_LOG");
    cmd
}

/// Whether the tests run with root privileges
#[allow(dead_code)]
pub fn is_root() -> bool {
    unsafe { libc::geteuid() == 0 }
}
