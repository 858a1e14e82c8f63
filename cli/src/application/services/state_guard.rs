//! Application service — run/disable lock inspection.
//!
//! Lock files are owned by the agent; this service only looks at them. Each
//! check resolves the lockfile path and tests for it afresh.

use std::path::Path;

use anyhow::Result;
use pxp_common::RunConfig;

use crate::application::ports::{ConfigProbe, LocalFs, StateGuard};

/// Setting naming the lockfile present while a catalog run is in progress.
pub const RUN_LOCKFILE_KEY: &str = "agent_catalog_run_lockfile";

/// Setting naming the lockfile present while runs are disabled.
pub const DISABLED_LOCKFILE_KEY: &str = "agent_disabled_lockfile";

/// `StateGuard` backed by the agent's configuration and the filesystem.
#[derive(Debug, Clone)]
pub struct PuppetStateGuard<P, F> {
    probe: P,
    fs: F,
}

impl<P: ConfigProbe, F: LocalFs> PuppetStateGuard<P, F> {
    pub fn new(probe: P, fs: F) -> Self {
        Self { probe, fs }
    }

    fn lockfile_exists(&self, key: &str, config: &RunConfig) -> Result<bool> {
        let lockfile = self.probe.probe(key, config)?;
        let exists = self.fs.exists(Path::new(&lockfile));
        tracing::debug!(key, lockfile = %lockfile, exists, "checked lockfile");
        Ok(exists)
    }
}

impl<P: ConfigProbe, F: LocalFs> StateGuard for PuppetStateGuard<P, F> {
    fn is_running(&self, config: &RunConfig) -> Result<bool> {
        self.lockfile_exists(RUN_LOCKFILE_KEY, config)
    }

    fn is_disabled(&self, config: &RunConfig) -> Result<bool> {
        self.lockfile_exists(DISABLED_LOCKFILE_KEY, config)
    }
}
