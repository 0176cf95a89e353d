//! autodiag: run a vehicle fault diagnosis from local data.

mod cli;
mod commands;
mod display;
mod prompt;

use anyhow::{Context, Result};
use autodiag_core::DiagConfig;
use clap::Parser;

use crate::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let overrides = cli.overrides.to_overrides();
    let config = match &cli.user_config {
        Some(user) => {
            DiagConfig::load_with_user_config(&cli.root, Some(user.as_path()), Some(&overrides))
        }
        None => DiagConfig::load(&cli.root, Some(&overrides)),
    }
    .context("loading configuration")?;
    autodiag_observability::init_from_config(&config.observability);

    match &cli.command {
        Commands::Diagnose { data, obd } => commands::diagnose(&config, data, obd),
        Commands::Isolate {
            data,
            anomalous,
            dtc,
        } => commands::isolate(&config, data, anomalous, dtc.as_deref()),
        Commands::Graph {
            knowledge_base,
            seed,
            deny_cycles,
        } => commands::graph(&config, knowledge_base, seed, *deny_cycles),
        Commands::Config => commands::show_config(&config),
    }
}
