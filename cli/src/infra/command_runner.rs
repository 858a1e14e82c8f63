//! Infrastructure implementation of the `CommandRunner` port.
//!
//! `StdCommandRunner` is the production implementation. It blocks the
//! calling thread until the child exits; no timeout is applied here, the
//! agent invoking this module owns wall-clock limits.

use std::process::{Command, ExitStatus, Output, Stdio};

use anyhow::{Context, Result};

use crate::application::ports::CommandRunner;
use crate::domain::Platform;

/// Production `CommandRunner` backed by `std::process`.
#[derive(Debug, Clone, Copy)]
pub struct StdCommandRunner {
    platform: Platform,
}

impl StdCommandRunner {
    #[must_use]
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }

    /// Shell invocation for a composed command line.
    fn shell(&self, command: &str) -> Command {
        let mut cmd = match self.platform {
            Platform::Posix => {
                let mut cmd = Command::new("sh");
                cmd.arg("-c");
                cmd
            }
            Platform::Windows => {
                let mut cmd = Command::new("cmd");
                cmd.arg("/C");
                cmd
            }
        };
        cmd.arg(command);
        cmd
    }
}

impl CommandRunner for StdCommandRunner {
    fn output(&self, program: &str, args: &[&str]) -> Result<Output> {
        Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .with_context(|| format!("failed to spawn {program}"))
    }

    fn run_shell(&self, command: &str) -> Result<i32> {
        let status = self
            .shell(command)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .context("failed to spawn shell")?;
        Ok(exit_code(status))
    }
}

/// Exit code of a finished process; signal deaths map to `128 + signal`.
#[must_use]
pub fn exit_code(status: ExitStatus) -> i32 {
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
    -1
}
