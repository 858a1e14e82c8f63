use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Literal used on the wire for result fields with no authoritative value.
pub const UNKNOWN: &str = "unknown";

/// Module configuration handed over by the agent with each request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Path to the `puppet` executable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub puppet_bin: Option<String>,
    /// Any other configuration keys, kept as-is.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl RunConfig {
    /// Config carrying only a `puppet_bin` entry.
    pub fn with_puppet_bin(puppet_bin: impl Into<String>) -> Self {
        Self {
            puppet_bin: Some(puppet_bin.into()),
            extra: BTreeMap::new(),
        }
    }

    /// The configured `puppet_bin`, treating an empty string as unset.
    #[must_use]
    pub fn puppet_bin(&self) -> Option<&str> {
        self.puppet_bin.as_deref().filter(|bin| !bin.is_empty())
    }
}

/// Action input: environment assignments and extra agent flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunParams {
    /// `KEY=VALUE` tokens prefixed to the command line.
    #[serde(default)]
    pub env: Vec<String>,
    /// Flags appended after the fixed agent flags, in order.
    #[serde(default)]
    pub flags: Vec<String>,
}

/// A decoded `run` request as read from stdin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunRequest {
    #[serde(default)]
    pub config: RunConfig,
    #[serde(default)]
    pub params: RunParams,
}

/// A result field that is either known or the `"unknown"` sentinel.
///
/// Serializes as a plain string so callers matching on the literal
/// `"unknown"` keep working.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReportField {
    Known(String),
    #[default]
    Unknown,
}

impl ReportField {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(value) => value,
            Self::Unknown => UNKNOWN,
        }
    }
}

impl From<String> for ReportField {
    fn from(value: String) -> Self {
        if value == UNKNOWN {
            Self::Unknown
        } else {
            Self::Known(value)
        }
    }
}

impl From<&str> for ReportField {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<ReportField> for String {
    fn from(field: ReportField) -> Self {
        match field {
            ReportField::Known(value) => value,
            ReportField::Unknown => UNKNOWN.to_string(),
        }
    }
}

/// Outcome of a `run` action. Every field is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    pub kind: ReportField,
    pub time: ReportField,
    pub transaction_uuid: ReportField,
    pub environment: ReportField,
    pub status: ReportField,
    pub error: String,
    pub exitcode: i32,
}

impl RunResult {
    /// Result with every report field set to the sentinel.
    pub fn unknown(exitcode: i32, error: impl Into<String>) -> Self {
        Self {
            kind: ReportField::Unknown,
            time: ReportField::Unknown,
            transaction_uuid: ReportField::Unknown,
            environment: ReportField::Unknown,
            status: ReportField::Unknown,
            error: error.into(),
            exitcode,
        }
    }
}

/// Response for requests rejected before a run was attempted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
