//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::AppContext;
use crate::commands;

/// PXP module triggering and reporting on Puppet agent runs
#[derive(Parser)]
#[command(
    name = "pxp-module-puppet",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the module metadata document
    Metadata,

    /// Start a Puppet run; reads the request JSON from stdin
    Run,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if settings cannot be loaded or the action hits a
    /// fault outside the request contract.
    pub fn run(self) -> Result<()> {
        match self.command {
            Command::Metadata => commands::metadata::run(std::io::stdout().lock()),
            Command::Run => {
                let ctx = AppContext::new()?;
                let action = ctx.run_action();
                commands::run::run(&action, std::io::stdin().lock(), std::io::stdout().lock())?;
                Ok(())
            }
        }
    }
}
