//! PXP Puppet module - trigger and report on Puppet agent runs

use clap::Parser;
use pxp_module_puppet::cli::Cli;
use pxp_module_puppet::infra::settings::LOG_ENV;
use tracing_subscriber::EnvFilter;

fn main() {
    // stdout carries the result document; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    if let Err(e) = cli.run() {
        tracing::error!(error = %format!("{e:#}"), "pxp-module-puppet failed");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
