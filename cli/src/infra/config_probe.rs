//! Infrastructure implementation of the `ConfigProbe` port.
//!
//! Values come from `<puppet_bin> agent --configprint <key>`, so they always
//! reflect the agent's current settings (puppet.conf, run mode, defaults).

use anyhow::{Context, Result};
use pxp_common::RunConfig;

use crate::application::ports::{CommandRunner, ConfigProbe};
use crate::domain::RunError;

/// `ConfigProbe` that asks the agent binary itself.
#[derive(Debug, Clone)]
pub struct PuppetConfigProbe<R> {
    runner: R,
}

impl<R: CommandRunner> PuppetConfigProbe<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }
}

impl<R: CommandRunner> ConfigProbe for PuppetConfigProbe<R> {
    fn probe(&self, key: &str, config: &RunConfig) -> Result<String> {
        let puppet_bin = config.puppet_bin().ok_or(RunError::PuppetBinNotSet)?;
        let output = self
            .runner
            .output(puppet_bin, &["agent", "--configprint", key])
            .with_context(|| format!("cannot print Puppet setting {key}"))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!(
                "{puppet_bin} agent --configprint {key} failed ({}): {}",
                output.status,
                stderr.trim()
            );
        }

        let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
        tracing::debug!(key, value = %value, "resolved Puppet setting");
        Ok(value)
    }
}
