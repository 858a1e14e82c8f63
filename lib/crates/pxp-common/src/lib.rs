//! Wire types and metadata shared by PXP Puppet module components.

pub mod metadata;
pub mod types;

pub use metadata::module_metadata;
pub use types::*;
