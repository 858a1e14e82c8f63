//! Agent command-line composition and token checks.
//!
//! Pure functions only — no I/O, no process spawning.

use std::sync::LazyLock;

use pxp_common::RunParams;
use regex::Regex;

use crate::domain::error::RunError;

// ── Constants ────────────────────────────────────────────────────────────────

/// Subcommand and flags every run is started with.
pub const AGENT_RUN_ARGS: &[&str] = &[
    "agent",
    "--no-usecacheonfailure",
    "--no-splay",
    "--show_diff",
    "--no-daemonize",
    "--onetime",
    "--verbose",
];

/// `NAME=value` with a portable variable name and no whitespace in the value,
/// so the assignment stays a single shell word ahead of the executable.
static ENV_ASSIGNMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*=\S*$").expect("valid regex")
});

/// Shell control, quoting and comment characters that must not reach the
/// composed command.
static SHELL_CONTROL_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r#"[;|&`$()<>#'"\\\r\n]"#).expect("valid regex")
});

// ── Platform ─────────────────────────────────────────────────────────────────

/// Host platform family, resolved once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Posix,
    Windows,
}

impl Platform {
    /// The platform this binary was built for.
    #[must_use]
    pub fn host() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    #[must_use]
    pub fn null_device(self) -> NullDevice {
        match self {
            Self::Posix => NullDevice::new("/dev/null"),
            Self::Windows => NullDevice::new("nul"),
        }
    }
}

/// Redirect target used to discard the agent's output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NullDevice(String);

impl NullDevice {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    #[must_use]
    pub(crate) fn path(&self) -> &str {
        &self.0
    }

    /// Shell suffix sending stdout and stderr to the null device.
    #[must_use]
    pub fn redirect_suffix(&self) -> String {
        format!("> {} 2>&1", self.path())
    }
}

// ── Builder ──────────────────────────────────────────────────────────────────

/// Compose the shell command for one agent run.
///
/// Layout: `[env ]<puppet_bin> agent <fixed flags> <flags> > <null> 2>&1`.
/// Tokens are joined verbatim; an empty `env` drops the leading separator
/// while an empty `flags` still leaves its separator in place.
#[must_use]
pub fn build_command(puppet_bin: &str, params: &RunParams, null_device: &NullDevice) -> String {
    let mut command = String::new();
    if !params.env.is_empty() {
        command.push_str(&params.env.join(" "));
        command.push(' ');
    }
    command.push_str(puppet_bin);
    command.push(' ');
    command.push_str(&AGENT_RUN_ARGS.join(" "));
    command.push(' ');
    command.push_str(&params.flags.join(" "));
    command.push(' ');
    command.push_str(&null_device.redirect_suffix());
    command
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Reject tokens that would change the meaning of the composed command.
///
/// # Errors
///
/// Returns the first offending token as a [`RunError`].
pub fn validate_params(params: &RunParams) -> Result<(), RunError> {
    for token in &params.env {
        if !ENV_ASSIGNMENT_RE.is_match(token) {
            return Err(RunError::InvalidEnvAssignment(token.clone()));
        }
        if SHELL_CONTROL_RE.is_match(token) {
            return Err(RunError::UnsafeToken(token.clone()));
        }
    }
    for token in &params.flags {
        if SHELL_CONTROL_RE.is_match(token) {
            return Err(RunError::UnsafeToken(token.clone()));
        }
    }
    Ok(())
}

// ── Unit tests ───────────────────────────────────────────────────────────────


// ============================================================================
// Property-Based Tests
// ============================================================================
