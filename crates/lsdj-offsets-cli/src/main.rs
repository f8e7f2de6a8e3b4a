mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lsdj-offsets")]
#[command(about = "Locate LSDj runtime variables in working RAM")]
#[command(version)]
struct Args {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show ROM identity and script profile
    Info {
        /// Path to the LSDj ROM
        rom: PathBuf,
    },

    /// Resolve offsets from the built-in catalog
    Lookup {
        /// Path to the LSDj ROM
        rom: PathBuf,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Write the result as JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List catalog rows
    Catalog {
        /// Only rows for this version (e.g. 9.2.6)
        #[arg(long)]
        version: Option<String>,

        /// Only the row with this content hash (decimal or 0x-prefixed hex)
        #[arg(long)]
        hash: Option<String>,
    },

    /// Decode a raw RAM dump through the ROM's offsets
    Inspect {
        /// Path to the LSDj ROM
        rom: PathBuf,

        /// Path to the RAM dump
        ram: PathBuf,

        /// Also print a hexdump of the search window
        #[arg(long)]
        hexdump: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(format!("lsdj_offsets={}", default_level).parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Info { rom } => commands::info::run(&rom),
        Command::Lookup { rom, json, output } => {
            commands::lookup::run(&rom, json, output.as_deref())
        }
        Command::Catalog { version, hash } => {
            commands::catalog::run(version.as_deref(), hash.as_deref())
        }
        Command::Inspect { rom, ram, hexdump } => commands::inspect::run(&rom, &ram, hexdump),
    }
}
