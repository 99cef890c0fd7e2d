use std::fs;

use anyhow::Context;
use colored::Colorize;
use quip_catalog::Additions;
use quip_store::{CatalogStore, JsonFileStore};
use tracing::warn;

use crate::cli::{AppendArgs, CheckArgs, Cli, Command, OutputFormat};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Append(args) => cmd_append(args, &cli.format),
        Command::Check(args) => cmd_check(args, &cli.format),
    }
}

/// Load the catalog, append the addition-map entries, write it back.
///
/// Any load failure halts the run before the save, so a malformed data
/// file is never overwritten.
fn cmd_append(args: AppendArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let raw = fs::read_to_string(&args.additions)
        .with_context(|| format!("reading addition file {}", args.additions.display()))?;
    let additions: Additions = serde_json::from_str(&raw)
        .with_context(|| format!("parsing addition file {}", args.additions.display()))?;

    let store = JsonFileStore::new(&args.data);
    let mut catalog = store.load()?;
    let report = catalog.append_messages(&additions);
    store.save(&catalog)?;

    for id in &report.unmatched {
        warn!(category_id = %id, "addition key matches no category");
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            for delta in &report.appended {
                println!(
                    "{} Added {} lines to {}",
                    "✓".green().bold(),
                    delta.appended.to_string().bold(),
                    delta.category_name.yellow()
                );
            }
            for id in &report.unmatched {
                println!("{} No category with id {}", "!".yellow().bold(), id.yellow());
            }
            println!(
                "{} Updated {}",
                "✓".green().bold(),
                args.data.display().to_string().bold()
            );
            print_summary(&catalog.summary());
        }
    }
    Ok(())
}

/// Load the catalog and report per-category counts, or report the load
/// failure and its classification. A load failure is the terminal,
/// reported outcome, not a process fault.
fn cmd_check(args: CheckArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let store = JsonFileStore::new(&args.data);
    match store.load() {
        Ok(catalog) => match format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&catalog.summary())?)
            }
            OutputFormat::Text => {
                println!(
                    "{} Catalog is valid! Found {} categories:",
                    "✓".green().bold(),
                    catalog.len().to_string().bold()
                );
                print_summary(&catalog.summary());
            }
        },
        Err(e) => {
            println!("{} Catalog failed to load", "✗".red().bold());
            println!("  Error: {e}");
            println!("  Class: {}", e.classification().red());
        }
    }
    Ok(())
}

fn print_summary(summary: &quip_catalog::CatalogSummary) {
    println!("Total categories: {}", summary.category_count().to_string().bold());
    for entry in &summary.categories {
        println!(
            "- {}: {} messages",
            entry.category_name.yellow(),
            entry.message_count
        );
    }
}
