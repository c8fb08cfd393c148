//! Host capabilities the installer depends on
//!
//! Everything that touches the operating system beyond plain file copies goes
//! through the [`Host`] trait: looking up the effective user id and running
//! external tools. The installer composes these calls sequentially and treats
//! every non-zero exit status as fatal.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use tracing::debug;

use crate::error::{InstallError, Result, fs as fs_error};

/// Exit status reported when a program cannot be found
pub const EXIT_COMMAND_NOT_FOUND: i32 = 127;

/// Exit status reported when a program exists but cannot be started
pub const EXIT_COMMAND_NOT_EXECUTABLE: i32 = 126;

/// Where a subprocess writes its standard output and error streams
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    /// Collect both streams into [`SubprocessResult::output`]
    Capture,
    /// Pass both streams through to the operator's terminal
    Inherit,
    /// Truncate the file, then send both streams into it
    Log(PathBuf),
}

/// An external tool invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub current_dir: Option<PathBuf>,
    pub output: OutputMode,
}

impl CommandSpec {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            current_dir: None,
            output: OutputMode::Capture,
        }
    }

    /// Build a command from an argv vector; `None` when the vector is empty
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self::new(program.clone(), args.iter().cloned()))
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    pub fn output(mut self, output: OutputMode) -> Self {
        self.output = output;
        self
    }

    /// Shell-like rendering for messages
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Exit status and text produced by an external invocation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubprocessResult {
    pub exit_code: i32,
    /// Combined stdout and stderr; empty unless the command ran with [`OutputMode::Capture`]
    pub output: String,
}

impl SubprocessResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Operating system capabilities used by the installer
pub trait Host {
    /// Effective user id of the running process
    fn effective_uid(&self) -> u32;

    /// Run a command to completion
    ///
    /// Returns `Ok` for any exit status, including non-zero ones; callers decide
    /// what a failure means. `Err` means the process could not be started.
    fn run(&self, command: &CommandSpec) -> Result<SubprocessResult>;
}

/// The real host
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemHost;

impl Host for SystemHost {
    fn effective_uid(&self) -> u32 {
        // SAFETY: geteuid has no preconditions and cannot fail.
        unsafe { libc::geteuid() }
    }

    fn run(&self, spec: &CommandSpec) -> Result<SubprocessResult> {
        let mut command = Command::new(&spec.program);
        command.args(&spec.args).stdin(Stdio::null());
        if let Some(dir) = &spec.current_dir {
            command.current_dir(dir);
        }

        debug!(command = %spec.display(), dir = ?spec.current_dir, "running subprocess");

        let result = match &spec.output {
            OutputMode::Capture => {
                let output = command.output().map_err(|e| spawn_failed(spec, e))?;
                let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
                text.push_str(&String::from_utf8_lossy(&output.stderr));
                SubprocessResult {
                    exit_code: exit_code(output.status),
                    output: text,
                }
            }
            OutputMode::Inherit => {
                let status = command.status().map_err(|e| spawn_failed(spec, e))?;
                SubprocessResult {
                    exit_code: exit_code(status),
                    output: String::new(),
                }
            }
            OutputMode::Log(path) => {
                let (stdout, stderr) = open_log(path)?;
                let status = command
                    .stdout(stdout)
                    .stderr(stderr)
                    .status()
                    .map_err(|e| spawn_failed(spec, e))?;
                SubprocessResult {
                    exit_code: exit_code(status),
                    output: String::new(),
                }
            }
        };

        debug!(command = %spec.display(), exit_code = result.exit_code, "subprocess finished");
        Ok(result)
    }
}

/// Open a log file for both output streams of a child process
fn open_log(path: &Path) -> Result<(File, File)> {
    let write_err = |e: io::Error| fs_error::write_failed(path.display().to_string(), e.to_string());
    let stdout = File::create(path).map_err(write_err)?;
    let stderr = stdout.try_clone().map_err(write_err)?;
    Ok((stdout, stderr))
}

fn spawn_failed(spec: &CommandSpec, err: io::Error) -> InstallError {
    let exit_code = if err.kind() == io::ErrorKind::NotFound {
        EXIT_COMMAND_NOT_FOUND
    } else {
        EXIT_COMMAND_NOT_EXECUTABLE
    };
    InstallError::SpawnFailed {
        command: spec.display(),
        reason: err.to_string(),
        exit_code,
    }
}

/// Map an exit status to a shell-style exit code
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
