//! Infrastructure layer — concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: process execution,
//! configuration probing, filesystem access, and environment settings.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` are forbidden.

pub mod command_runner;
pub mod config_probe;
pub mod fs;
pub mod settings;

pub use command_runner::StdCommandRunner;
pub use config_probe::PuppetConfigProbe;
pub use fs::HostFs;
pub use settings::ModuleSettings;
