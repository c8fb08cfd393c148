//! Version command implementation

use crate::config::file::CONFIG_FILE_NAME;
use crate::config::settings::{
    DEFAULT_BUILD_DIR, DEFAULT_BUILD_TOOL, DEFAULT_PLATFORM, default_shared_root,
};
use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    print!("{}", report());
    Ok(())
}

/// Version, install defaults and build info
fn report() -> String {
    let mut lines = vec![
        format!("zohmg-install {}", env!("CARGO_PKG_VERSION")),
        String::new(),
        "Defaults:".to_string(),
        format!("  Platform: {}", DEFAULT_PLATFORM),
        format!(
            "  Shared root: {}",
            default_shared_root(DEFAULT_PLATFORM).display()
        ),
        "  Site root: /usr/lib/python<X.Y>/site-packages (X.Y detected)".to_string(),
        format!("  Config file: {}", CONFIG_FILE_NAME),
        format!("  Build tool: {} in {}", DEFAULT_BUILD_TOOL, DEFAULT_BUILD_DIR),
        String::new(),
        "Build info:".to_string(),
        format!("  Minimum Rust version: {}", env!("CARGO_PKG_RUST_VERSION")),
        format!("  Profile: {}", build_profile()),
    ];
    lines.push(String::new());
    lines.join("\n")
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
