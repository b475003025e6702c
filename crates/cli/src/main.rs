//! `flow-builder` CLI entry-point.
//!
//! Available sub-commands:
//! - `validate` — validate a flow definition JSON file.
//! - `inspect`  — print a summary of a valid flow definition JSON file.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::debug;

use flow::validate::rootless_nodes;
use flow::{validate_flow, Flow};

#[derive(Parser)]
#[command(
    name = "flow-builder",
    about = "Flow graph validation tooling",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a flow definition JSON file.
    Validate {
        /// Path to the flow JSON file.
        path: PathBuf,
    },
    /// Print a summary of a flow definition JSON file.
    Inspect {
        /// Path to the flow JSON file.
        path: PathBuf,
    },
}

fn load_flow(path: &Path) -> anyhow::Result<Flow> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read file {}", path.display()))?;
    let flow: Flow = serde_json::from_str(&content)
        .with_context(|| format!("invalid flow JSON in {}", path.display()))?;
    debug!(nodes = flow.nodes.len(), edges = flow.edges.len(), "flow loaded");
    Ok(flow)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Validate { path } => {
            let flow = load_flow(&path)?;
            match validate_flow(&flow) {
                Ok(()) => {
                    println!("✅ Flow is valid.");
                }
                Err(e) => {
                    eprintln!("❌ Validation failed: {e}");
                    std::process::exit(1);
                }
            }
        }
        Command::Inspect { path } => {
            let flow = load_flow(&path)?;
            if let Err(e) = validate_flow(&flow) {
                eprintln!("❌ Validation failed: {e}");
                std::process::exit(1);
            }

            println!("Nodes: {}", flow.nodes.len());
            println!("Edges: {}", flow.edges.len());
            match rootless_nodes(&flow.nodes, &flow.edges).first() {
                Some(entry) => println!("Entry: {} ({})", entry.id, entry.kind),
                None => println!("Entry: none"),
            }
        }
    }

    Ok(())
}
