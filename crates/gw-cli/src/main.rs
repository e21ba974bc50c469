//! CLI frontend for the Gatewalker interactive fiction engine.

mod commands;
mod content;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "gw",
    about = "Gatewalker — a turn-based interactive fiction engine",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the shipped campaign
    Play {
        /// RNG seed for reproducible creature movement (default: from entropy)
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { seed } => commands::play::run(seed),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
