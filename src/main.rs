use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use entity_pairing::telemetry::init_tracing;
use entity_pairing::{run_demo, write_snapshots, PairingPolicy};
use tracing::Level;

#[derive(Parser)]
#[command(name = "entity-pairing")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Pair entities and recover from a named pairing error", long_about = None)]
struct Cli {
    /// How a rejected pairing treats the caller: transactional or asymmetric
    #[arg(short, long, default_value_t = PairingPolicy::Transactional)]
    policy: PairingPolicy,

    /// Write the entity snapshot CSV here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    init_tracing(cli.json, level);

    let mut stdout = io::stdout().lock();

    let entities = run_demo(cli.policy, &mut stdout).context("Failed to run pairing demo")?;

    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file '{}'", path.display()))?;
            write_snapshots(&entities, file).context("Failed to write entity snapshot")?;
        }
        None => {
            write_snapshots(&entities, &mut stdout).context("Failed to write entity snapshot")?;
        }
    }

    Ok(())
}
