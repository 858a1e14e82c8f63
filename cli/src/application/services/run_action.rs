//! Application service — the `run` action entry point.
//!
//! Validation short-circuits in a fixed order:
//! 1. a request was decoded,
//! 2. `puppet_bin` is configured,
//! 3. `puppet_bin` exists on disk,
//! 4. no run is in progress,
//! 5. runs are not disabled,
//! 6. `env`/`flags` tokens are safe to compose,
//!
//! and only then is the executor invoked.

use std::path::Path;

use anyhow::Result;
use pxp_common::{ErrorResponse, RunRequest, RunResult};
use serde::Serialize;

use crate::application::ports::{LocalFs, RunExecutor, StateGuard};
use crate::domain::{RunError, validate_params};

/// What the action hands back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResponse {
    /// A run was attempted; the result describes how it went.
    Completed(RunResult),
    /// The request was refused before launching anything.
    Rejected(RunError),
}

impl ActionResponse {
    /// Error text carried by the response, empty for clean runs.
    #[must_use]
    pub fn error(&self) -> String {
        match self {
            Self::Completed(result) => result.error.clone(),
            Self::Rejected(e) => e.to_string(),
        }
    }
}

/// Wire form: a full `RunResult`, or `{"error": "..."}` for rejections.
#[derive(Serialize)]
#[serde(untagged)]
enum WireResponse {
    Completed(RunResult),
    Rejected(ErrorResponse),
}

impl Serialize for ActionResponse {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let wire = match self {
            Self::Completed(result) => WireResponse::Completed(result.clone()),
            Self::Rejected(e) => WireResponse::Rejected(ErrorResponse::new(e.to_string())),
        };
        wire.serialize(serializer)
    }
}

/// The `run` action with its collaborators supplied at construction.
#[derive(Debug, Clone)]
pub struct RunAction<F, G, E> {
    fs: F,
    guard: G,
    executor: E,
}

impl<F, G, E> RunAction<F, G, E>
where
    F: LocalFs,
    G: StateGuard,
    E: RunExecutor,
{
    pub fn new(fs: F, guard: G, executor: E) -> Self {
        Self {
            fs,
            guard,
            executor,
        }
    }

    /// Handle one request. `None` means stdin did not decode.
    ///
    /// # Errors
    ///
    /// Returns an error only for faults outside the request contract, such
    /// as the agent failing to print a configuration value.
    pub fn run(&self, request: Option<&RunRequest>) -> Result<ActionResponse> {
        let Some(request) = request else {
            return Ok(reject(RunError::InvalidInput));
        };
        let config = &request.config;

        let Some(puppet_bin) = config.puppet_bin() else {
            return Ok(reject(RunError::PuppetBinNotSet));
        };

        if !self.fs.exists(Path::new(puppet_bin)) {
            return Ok(reject(RunError::PuppetBinMissing(puppet_bin.to_string())));
        }

        if self.guard.is_running(config)? {
            return Ok(reject(RunError::AlreadyRunning));
        }

        if self.guard.is_disabled(config)? {
            return Ok(reject(RunError::Disabled));
        }

        if let Err(e) = validate_params(&request.params) {
            return Ok(reject(e));
        }

        let result = self.executor.start_run(config, &request.params)?;
        tracing::info!(
            exitcode = result.exitcode,
            status = %result.status.as_str(),
            "run action finished"
        );
        Ok(ActionResponse::Completed(result))
    }
}

fn reject(error: RunError) -> ActionResponse {
    tracing::warn!(reason = %error, "run request rejected");
    ActionResponse::Rejected(error)
}
