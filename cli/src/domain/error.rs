//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `std::fs` or `std::process`. The `Display` text of
//! every variant is part of the module's external contract: callers match on
//! these strings, so they must not be reworded.

use std::path::PathBuf;

use thiserror::Error;

// ── Request rejections ────────────────────────────────────────────────────────

/// Reasons a `run` request is turned down before any process is launched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunError {
    #[error("Invalid json parsed on STDIN. Cannot start run action")]
    InvalidInput,

    #[error("puppet_bin configuration value not set")]
    PuppetBinNotSet,

    #[error("Puppet executable '{0}' does not exist")]
    PuppetBinMissing(String),

    #[error("Puppet agent is already performing a run")]
    AlreadyRunning,

    #[error("Puppet agent is disabled")]
    Disabled,

    #[error("Invalid environment variable assignment '{0}'")]
    InvalidEnvAssignment(String),

    #[error("Refusing to pass unsafe token '{0}' to the Puppet agent")]
    UnsafeToken(String),
}

// ── Executor outcomes ─────────────────────────────────────────────────────────

/// Abnormal run outcomes recorded in `RunResult.error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RunFailure {
    #[error("Failed to start Puppet agent")]
    LaunchFailed,

    #[error("Puppet agent exited with a non 0 exitcode")]
    NonZeroExit,
}

impl RunFailure {
    /// Exit code reported when the agent process never started.
    pub const LAUNCH_FAILED_EXITCODE: i32 = -1;
}

// ── Report errors ─────────────────────────────────────────────────────────────

/// Reasons the last run report could not be used after a clean exit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error("{} doesn't exist", .0.display())]
    Missing(PathBuf),

    #[error("{} isn't valid yaml", .0.display())]
    Invalid(PathBuf),
}
