//! Application service — start one agent run and classify how it ended.
//!
//! The executor never looks at the report itself: every outcome is handed to
//! the injected `ReportNormalizer` together with the exit code and, for
//! abnormal outcomes, the failure message.

use anyhow::Result;
use pxp_common::{RunConfig, RunParams, RunResult};

use crate::application::ports::{CommandBuilder, CommandRunner, ReportNormalizer, RunExecutor};
use crate::domain::{NullDevice, RunFailure, build_command};

/// `CommandBuilder` bound to the null device chosen at startup.
#[derive(Debug, Clone)]
pub struct AgentCommandBuilder {
    null_device: NullDevice,
}

impl AgentCommandBuilder {
    #[must_use]
    pub fn new(null_device: NullDevice) -> Self {
        Self { null_device }
    }
}

impl CommandBuilder for AgentCommandBuilder {
    fn build_command(&self, config: &RunConfig, params: &RunParams) -> String {
        build_command(config.puppet_bin().unwrap_or_default(), params, &self.null_device)
    }
}

/// `RunExecutor` that launches the composed command through the shell.
#[derive(Debug, Clone)]
pub struct PuppetRunExecutor<B, R, N> {
    builder: B,
    runner: R,
    normalizer: N,
}

impl<B, R, N> PuppetRunExecutor<B, R, N>
where
    B: CommandBuilder,
    R: CommandRunner,
    N: ReportNormalizer,
{
    pub fn new(builder: B, runner: R, normalizer: N) -> Self {
        Self {
            builder,
            runner,
            normalizer,
        }
    }
}

impl<B, R, N> RunExecutor for PuppetRunExecutor<B, R, N>
where
    B: CommandBuilder,
    R: CommandRunner,
    N: ReportNormalizer,
{
    fn start_run(&self, config: &RunConfig, params: &RunParams) -> Result<RunResult> {
        let command = self.builder.build_command(config, params);
        tracing::info!(command = %command, "starting puppet agent run");

        match self.runner.run_shell(&command) {
            Err(e) => {
                tracing::error!(error = %format!("{e:#}"), "puppet agent did not start");
                self.normalizer.normalize(
                    RunFailure::LAUNCH_FAILED_EXITCODE,
                    config,
                    &RunFailure::LaunchFailed.to_string(),
                )
            }
            Ok(0) => {
                tracing::info!("puppet agent run finished");
                self.normalizer.normalize(0, config, "")
            }
            Ok(exitcode) => {
                tracing::warn!(exitcode, "puppet agent exited with an error");
                self.normalizer
                    .normalize(exitcode, config, &RunFailure::NonZeroExit.to_string())
            }
        }
    }
}
