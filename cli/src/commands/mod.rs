//! Command implementations

pub mod metadata;
pub mod run;
