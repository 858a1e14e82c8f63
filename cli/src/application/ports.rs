//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` and `pxp_common` — never from
//! `crate::infra` or `crate::commands`.
//!
//! Everything here is synchronous: a module invocation handles one request
//! and blocks on the agent process until it exits.

use std::path::Path;
use std::process::Output;

use anyhow::Result;
use pxp_common::{RunConfig, RunParams, RunResult};

// ── Infrastructure ports ──────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
pub trait CommandRunner {
    /// Run a program directly (no shell) and capture its output.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned.
    fn output(&self, program: &str, args: &[&str]) -> Result<Output>;

    /// Run a composed command line through the platform shell and return
    /// its exit code. The child's stdout and stderr never reach ours.
    ///
    /// # Errors
    ///
    /// Returns an error only when the shell could not be launched.
    fn run_shell(&self, command: &str) -> Result<i32>;
}

/// Read-only filesystem access.
pub trait LocalFs {
    /// Whether anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Read a whole file as UTF-8.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> Result<String>;
}

/// Resolves settings from the agent's own configuration.
pub trait ConfigProbe {
    /// Value of `key` as printed by the agent, trimmed.
    ///
    /// # Errors
    ///
    /// Returns an error if `puppet_bin` is unset or the agent cannot report
    /// the value.
    fn probe(&self, key: &str, config: &RunConfig) -> Result<String>;
}

// ── Run capabilities ──────────────────────────────────────────────────────────

/// Lock state checks. Implementations must not cache between calls.
pub trait StateGuard {
    /// Whether a catalog run is in progress.
    ///
    /// # Errors
    ///
    /// Returns an error if the lockfile location cannot be resolved.
    fn is_running(&self, config: &RunConfig) -> Result<bool>;

    /// Whether runs have been administratively disabled.
    ///
    /// # Errors
    ///
    /// Returns an error if the lockfile location cannot be resolved.
    fn is_disabled(&self, config: &RunConfig) -> Result<bool>;
}

/// Composes the shell command for a run.
pub trait CommandBuilder {
    fn build_command(&self, config: &RunConfig, params: &RunParams) -> String;
}

/// Starts the agent and turns its exit into a `RunResult`.
pub trait RunExecutor {
    /// # Errors
    ///
    /// Returns an error only for faults outside the run itself, such as the
    /// state directory lookup failing.
    fn start_run(&self, config: &RunConfig, params: &RunParams) -> Result<RunResult>;
}

/// Maps an exit code and the report artifact onto a `RunResult`.
pub trait ReportNormalizer {
    /// # Errors
    ///
    /// Returns an error if the state directory cannot be resolved.
    fn normalize(&self, exitcode: i32, config: &RunConfig, error: &str) -> Result<RunResult>;
}
