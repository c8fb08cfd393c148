//! zohmg-install - host provisioning for the zohmg platform
//!
//! Copies zohmg's prebuilt jars, eggs and thrift interface into place,
//! optionally builds the java hook-ups, and installs the python package.
//! Exits with the first failing tool's exit code.

use clap::Parser;
use miette::Diagnostic;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod cli;
mod commands;
mod common;
mod config;
mod error;
mod fallback;
mod host;
mod installer;
mod ui;

use cli::{Cli, Commands};
use error::InstallError;

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "zohmg_install=debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn report_error(err: &InstallError) {
    eprintln!("Error: {}", err);
    if let Some(help) = err.help() {
        eprintln!("  help: {}", help);
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        None | Some(Commands::Install) => commands::install::run(cli.directory, cli.install),
        Some(Commands::Fallback(args)) => commands::fallback::run(args),
        Some(Commands::Version) => commands::version::run(),
        Some(Commands::Completions(args)) => commands::completions::run(args),
    };

    if let Err(e) = result {
        report_error(&e);
        std::process::exit(e.exit_code());
    }
}
