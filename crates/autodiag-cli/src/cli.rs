//! Command-line arguments.

use std::path::PathBuf;

use autodiag_core::config::CliOverrides;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "autodiag")]
#[command(about = "Vehicle fault diagnosis by causal fault isolation", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Project directory holding autodiag.toml
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// User config file (default: ~/.autodiag/config.toml)
    #[arg(long)]
    pub user_config: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: OverrideArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Flags taking precedence over every config file and the environment.
#[derive(Args, Debug, Default)]
pub struct OverrideArgs {
    /// Directory of trained models (`<component>.onnx` + `<component>.toml`)
    #[arg(long, global = true)]
    pub model_pool: Option<PathBuf>,

    /// Abort when graph expansion discovers more components than this
    #[arg(long, global = true)]
    pub max_graph_components: Option<usize>,

    /// Skip the causal graph preview before isolation
    #[arg(long, global = true)]
    pub no_preview: bool,

    /// Classification log file
    #[arg(long, global = true)]
    pub classification_log: Option<PathBuf>,

    /// Log filter, e.g. `info` or `autodiag_causal=debug`
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,
}

impl OverrideArgs {
    pub fn to_overrides(&self) -> CliOverrides {
        CliOverrides {
            model_pool_dir: self.model_pool.clone(),
            max_graph_components: self.max_graph_components,
            show_graph_preview: self.no_preview.then_some(false),
            classification_log_path: self.classification_log.clone(),
            log_level: self.log_level.clone(),
            json_logs: self.json_logs.then_some(true),
        }
    }
}

/// Local data sources shared by the commands that classify.
#[derive(Args, Debug)]
pub struct DataArgs {
    /// Knowledge base JSON (structural graph and suspect components)
    #[arg(long, short = 'k')]
    pub knowledge_base: PathBuf,

    /// Directory of recorded signals (`<component>.json`)
    #[arg(long, short = 'r', default_value = "recordings")]
    pub recordings: PathBuf,

    /// Write each causal graph as Graphviz DOT into this directory
    #[arg(long)]
    pub dot_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a full session: select trouble codes, classify suspects, isolate faults
    Diagnose {
        #[command(flatten)]
        data: DataArgs,

        /// On-board diagnosis data JSON (`dtc_list`, `vin`, ...)
        #[arg(long)]
        obd: PathBuf,
    },

    /// Isolate fault paths starting from components already known to be anomalous
    Isolate {
        #[command(flatten)]
        data: DataArgs,

        /// Anomalous component (repeatable, order is seed order)
        #[arg(long = "anomalous", required = true)]
        anomalous: Vec<String>,

        /// Trouble code the isolation is attributed to
        #[arg(long)]
        dtc: Option<String>,
    },

    /// Print the complete causal graph around a component as DOT
    Graph {
        /// Knowledge base JSON
        #[arg(long, short = 'k')]
        knowledge_base: PathBuf,

        /// Component to expand from
        seed: String,

        /// Fail instead of warning when the expanded graph contains a cycle
        #[arg(long)]
        deny_cycles: bool,
    },

    /// Print the effective configuration
    Config,
}
