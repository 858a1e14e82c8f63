//! Last run report decoding.
//!
//! Pure functions only — the caller reads the file, this module turns its
//! text into the handful of fields surfaced in a `RunResult`.

use std::path::{Path, PathBuf};

use pxp_common::{ReportField, RunResult};
use serde::Deserialize;

/// Configuration key resolving the agent's state directory.
pub const STATEDIR_KEY: &str = "statedir";

/// File name of the report the agent leaves in its state directory.
pub const LAST_RUN_REPORT_FILE: &str = "last_run_report.yaml";

/// Fields read from `last_run_report.yaml`. Everything else is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LastRunReport {
    pub kind: String,
    pub time: String,
    pub transaction_uuid: String,
    pub environment: String,
    pub status: String,
}

impl LastRunReport {
    /// Successful-run result carrying this report's fields.
    #[must_use]
    pub fn into_result(self) -> RunResult {
        RunResult {
            kind: ReportField::Known(self.kind),
            time: ReportField::Known(self.time),
            transaction_uuid: ReportField::Known(self.transaction_uuid),
            environment: ReportField::Known(self.environment),
            status: ReportField::Known(self.status),
            error: String::new(),
            exitcode: 0,
        }
    }
}

/// Path of the report inside `state_dir`.
#[must_use]
pub fn last_run_report_path(state_dir: &str) -> PathBuf {
    Path::new(state_dir).join(LAST_RUN_REPORT_FILE)
}

/// Decode report text.
///
/// Reports are usually written with a Ruby object tag on the document
/// (`--- !ruby/object:Puppet::Transaction::Report`); the tag is dropped
/// before the fields are read.
///
/// # Errors
///
/// Returns an error for malformed YAML as well as for missing or
/// non-string fields.
pub fn parse_last_run_report(text: &str) -> Result<LastRunReport, serde_yaml::Error> {
    let value: serde_yaml::Value = serde_yaml::from_str(text)?;
    let value = match value {
        serde_yaml::Value::Tagged(tagged) => tagged.value,
        other => other,
    };
    serde_yaml::from_value(value)
}

// ── Unit tests ───────────────────────────────────────────────────────────────
