//! Family tree command line front end
//!
//! Seeds one of the example families, runs a single query and prints it.

mod commands;
mod state;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use genealogy::{Dataset, FamilyRegistry, NameMatch, RegistryConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

use commands::Command;
use state::{AppState, OutputFormat};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DatasetArg {
    Integrated,
    Cousins,
    Generations,
}

impl From<DatasetArg> for Dataset {
    fn from(arg: DatasetArg) -> Self {
        match arg {
            DatasetArg::Integrated => Dataset::Integrated,
            DatasetArg::Cousins => Dataset::Cousins,
            DatasetArg::Generations => Dataset::Generations,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "family-tree", version, about = "Query an example family tree")]
struct Cli {
    /// Example family to load
    #[arg(long, value_enum, env = "FAMILY_TREE_DATASET", default_value_t = DatasetArg::Integrated)]
    dataset: DatasetArg,

    /// Match names case-insensitively
    #[arg(long, env = "FAMILY_TREE_IGNORE_CASE")]
    ignore_case: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Log registry activity to stderr
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = RegistryConfig {
        name_match: if cli.ignore_case {
            NameMatch::IgnoreCase
        } else {
            NameMatch::Exact
        },
    };
    let mut registry = FamilyRegistry::with_config(config);

    let dataset = Dataset::from(cli.dataset);
    dataset
        .seed(&mut registry)
        .with_context(|| format!("failed to seed {dataset:?} dataset"))?;
    info!(?dataset, people = registry.len(), "family tree ready");

    let state = AppState {
        registry,
        format: if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        },
    };

    let output = cli.command.run(&state)?;
    println!("{output}");
    Ok(())
}
