use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Where the catalog lives unless `--data` says otherwise.
pub const DEFAULT_DATA_PATH: &str = "assets/data/pickup_lines.json";

#[derive(Parser)]
#[command(
    name = "quip",
    about = "Maintain a categorized catalog of pickup lines",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Append new lines from an addition file to the catalog
    Append(AppendArgs),
    /// Validate the catalog and report per-category counts
    Check(CheckArgs),
}

#[derive(Args)]
pub struct AppendArgs {
    /// JSON addition-map: category id to an array of new lines
    pub additions: PathBuf,

    /// Catalog data file to read and update
    #[arg(long, default_value = DEFAULT_DATA_PATH)]
    pub data: PathBuf,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Catalog data file to validate
    #[arg(long, default_value = DEFAULT_DATA_PATH)]
    pub data: PathBuf,
}
