//! Application service — turn an exit code and the last run report into a
//! `RunResult`.
//!
//! The report is only consulted after a clean exit; after anything else it
//! may be stale or half-written.

use anyhow::Result;
use pxp_common::{RunConfig, RunResult};

use crate::application::ports::{ConfigProbe, LocalFs, ReportNormalizer};
use crate::domain::{ReportError, STATEDIR_KEY, last_run_report_path, parse_last_run_report};

/// `ReportNormalizer` reading `last_run_report.yaml` from the state directory.
#[derive(Debug, Clone)]
pub struct LastRunReportNormalizer<P, F> {
    probe: P,
    fs: F,
}

impl<P: ConfigProbe, F: LocalFs> LastRunReportNormalizer<P, F> {
    pub fn new(probe: P, fs: F) -> Self {
        Self { probe, fs }
    }
}

impl<P: ConfigProbe, F: LocalFs> ReportNormalizer for LastRunReportNormalizer<P, F> {
    fn normalize(&self, exitcode: i32, config: &RunConfig, error: &str) -> Result<RunResult> {
        if exitcode != 0 {
            return Ok(RunResult::unknown(exitcode, error));
        }

        let state_dir = self.probe.probe(STATEDIR_KEY, config)?;
        let path = last_run_report_path(&state_dir);

        if !self.fs.exists(&path) {
            tracing::warn!(path = %path.display(), "last run report missing");
            return Ok(RunResult::unknown(0, ReportError::Missing(path).to_string()));
        }

        let report = self
            .fs
            .read_to_string(&path)
            .and_then(|text| parse_last_run_report(&text).map_err(anyhow::Error::from));
        match report {
            Ok(report) => {
                tracing::debug!(path = %path.display(), status = %report.status, "read last run report");
                Ok(report.into_result())
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %format!("{e:#}"), "last run report unreadable");
                Ok(RunResult::unknown(0, ReportError::Invalid(path).to_string()))
            }
        }
    }
}
