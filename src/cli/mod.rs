//! CLI definitions using clap derive API
//!
//! Each subcommand's arguments live in their own submodule.

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod fallback;
pub mod install;

pub use completions::CompletionsArgs;
pub use fallback::FallbackArgs;
pub use install::InstallArgs;

/// zohmg-install - provision a host for the zohmg platform
#[derive(Parser, Debug)]
#[command(
    name = "zohmg-install",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Install the zohmg platform on this host",
    long_about = "Copies zohmg's bundled jars, eggs and thrift interface into the shared and \
                  site-packages directories, optionally builds the java hook-ups, and installs \
                  the zohmg python package. Must be run as root.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  sudo zohmg-install                          \x1b[90m# Install with bundled jars\x1b[0m\n   \
                  sudo zohmg-install install --build-from-source \x1b[90m# Build darling with ant first\x1b[0m\n   \
                  zohmg-install fallback /data                \x1b[90m# Show the 404 page for /data\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Directory holding lib/, tmp/ and setup.py (defaults to current directory)
    #[arg(long, short = 'C', global = true, env = "ZOHMG_INSTALL_DIR")]
    pub directory: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub install: InstallArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install zohmg on this host (the default)
    #[command(after_help = "EXAMPLES:\n  \
                   Install with the bundled darling jar:\n    sudo zohmg-install install\n\n\
                   Build darling from source with ant:\n    sudo zohmg-install install --build-from-source\n\n\
                   Install into a different python:\n    sudo zohmg-install --python python2.6")]
    Install,

    /// Render the response served when no application matches a path
    Fallback(FallbackArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
