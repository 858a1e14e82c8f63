//! Module settings loaded from `PXP_PUPPET_*` environment variables.
//!
//! Each field maps to `PXP_PUPPET_<FIELD>`:
//!   - `PXP_PUPPET_NULL_DEVICE` (optional, redirect target for agent output)
//!
//! Logging is configured separately through `PXP_PUPPET_LOG`.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::domain::{NullDevice, Platform};

/// Environment variable prefix for module settings.
pub const ENV_PREFIX: &str = "PXP_PUPPET_";

/// Environment variable holding the `tracing` filter directive.
pub const LOG_ENV: &str = "PXP_PUPPET_LOG";

/// Settings decoded from the environment via `envy`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ModuleSettings {
    /// Overrides the platform's null device.
    #[serde(default)]
    pub null_device: Option<String>,
}

impl ModuleSettings {
    /// Load settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a `PXP_PUPPET_*` variable cannot be decoded.
    pub fn from_env() -> Result<Self> {
        envy::prefixed(ENV_PREFIX)
            .from_env()
            .context("failed to load settings from PXP_PUPPET_* env vars")
    }

    /// Load settings from explicit key/value pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if a `PXP_PUPPET_*` variable cannot be decoded.
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(ENV_PREFIX)
            .from_iter(vars)
            .context("failed to load settings from PXP_PUPPET_* env vars")
    }

    /// Null device to redirect agent output to on `platform`.
    #[must_use]
    pub fn null_device(&self, platform: Platform) -> NullDevice {
        match self.null_device.as_deref().filter(|path| !path.is_empty()) {
            Some(path) => NullDevice::new(path),
            None => platform.null_device(),
        }
    }
}
