//! Application context — production wiring of the run pipeline.
//!
//! `AppContext` resolves the platform and settings once at startup and
//! assembles the concrete adapters behind each port. Command handlers only
//! see the finished `RunAction`.

use anyhow::Result;

use crate::application::services::{
    AgentCommandBuilder, LastRunReportNormalizer, PuppetRunExecutor, PuppetStateGuard, RunAction,
};
use crate::domain::Platform;
use crate::infra::{HostFs, ModuleSettings, PuppetConfigProbe, StdCommandRunner};

type Probe = PuppetConfigProbe<StdCommandRunner>;

/// The `run` action as assembled for production.
pub type ProductionRunAction = RunAction<
    HostFs,
    PuppetStateGuard<Probe, HostFs>,
    PuppetRunExecutor<AgentCommandBuilder, StdCommandRunner, LastRunReportNormalizer<Probe, HostFs>>,
>;

/// Unified application context passed to every command handler.
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Host platform family.
    pub platform: Platform,
    /// Settings decoded from `PXP_PUPPET_*`.
    pub settings: ModuleSettings,
}

impl AppContext {
    /// Resolve the platform and load settings from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot be decoded.
    pub fn new() -> Result<Self> {
        Ok(Self::with_settings(Platform::host(), ModuleSettings::from_env()?))
    }

    #[must_use]
    pub fn with_settings(platform: Platform, settings: ModuleSettings) -> Self {
        Self { platform, settings }
    }

    /// Build the `run` action over the real process and filesystem adapters.
    #[must_use]
    pub fn run_action(&self) -> ProductionRunAction {
        let runner = StdCommandRunner::new(self.platform);
        let probe = PuppetConfigProbe::new(runner);
        let builder = AgentCommandBuilder::new(self.settings.null_device(self.platform));
        let normalizer = LastRunReportNormalizer::new(probe.clone(), HostFs);
        let executor = PuppetRunExecutor::new(builder, runner, normalizer);
        RunAction::new(HostFs, PuppetStateGuard::new(probe, HostFs), executor)
    }
}
