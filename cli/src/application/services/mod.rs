//! Application services — use-case orchestration.
//!
//! Each service module implements one stage of the run pipeline by composing
//! domain logic with port trait calls. Services import only from
//! `crate::domain` and `crate::application::ports` — never from
//! `crate::infra` or `crate::commands`.

pub mod report_normalizer;
pub mod run_action;
pub mod run_executor;
pub mod state_guard;

pub use report_normalizer::LastRunReportNormalizer;
pub use run_action::{ActionResponse, RunAction};
pub use run_executor::{AgentCommandBuilder, PuppetRunExecutor};
pub use state_guard::{DISABLED_LOCKFILE_KEY, PuppetStateGuard, RUN_LOCKFILE_KEY};
