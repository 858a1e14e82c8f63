//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `std::fs`, or `std::process`.
//! All functions are synchronous and take data in, returning data out.

pub mod command;
pub mod error;
pub mod report;

pub use command::{AGENT_RUN_ARGS, NullDevice, Platform, build_command, validate_params};
pub use error::{ReportError, RunError, RunFailure};
pub use report::{LastRunReport, STATEDIR_KEY, last_run_report_path, parse_last_run_report};
