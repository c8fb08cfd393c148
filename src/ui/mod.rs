//! Operator-facing output
//!
//! This module handles:
//! - Step announcements ("copying bundled thrift egg")
//! - Per-file copy lines in `cp -v` style
//! - Confirmation lines found in the package installer's log
//! - A spinner while a long-running tool executes
//!
//! All output goes through the [`Reporter`] trait so the installer can run
//! against the terminal or against a recorder in tests.

use std::path::Path;
use std::time::Duration;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

/// Receives progress events from the installer
pub trait Reporter {
    /// Announce a step
    fn step(&mut self, message: &str);

    /// A file or directory was copied
    fn copied(&mut self, from: &Path, to: &Path);

    /// A confirmation line found in the install log
    fn confirmation(&mut self, line: &str);

    /// Start waiting on a long-running tool
    fn begin_wait(&mut self, message: &str);

    /// Stop waiting
    fn end_wait(&mut self);
}

/// Reporter printing to stdout
#[derive(Default)]
pub struct ConsoleReporter {
    spinner: Option<ProgressBar>,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Reporter for ConsoleReporter {
    fn step(&mut self, message: &str) {
        println!("{}", Style::new().bold().apply_to(message));
    }

    fn copied(&mut self, from: &Path, to: &Path) {
        println!(
            "  {}",
            Style::new()
                .dim()
                .apply_to(format!("'{}' -> '{}'", from.display(), to.display()))
        );
    }

    fn confirmation(&mut self, line: &str) {
        println!("  {}", Style::new().green().apply_to(line));
    }

    fn begin_wait(&mut self, message: &str) {
        // Only spin on an interactive terminal
        if !console::user_attended() {
            return;
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .template(&format!("{{spinner}} {}...", message))
        {
            pb.set_style(style.tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]));
        }
        pb.enable_steady_tick(Duration::from_millis(80));
        self.spinner = Some(pb);
    }

    fn end_wait(&mut self) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
    }
}

/// Print the closing hint after a successful install
pub fn print_success(platform: &str) {
    println!();
    println!("{}", Style::new().bold().green().apply_to("ok, that should do it!"));
    println!("now try this:");
    println!("{}", Style::new().cyan().apply_to(format!("$> {} help", platform)));
    println!();
}
