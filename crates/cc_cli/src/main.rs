//! Save codec CLI
//!
//! Pipes text between stdin/stdout (or files) and the core's encode,
//! decode, and validate entry points, plus a small id-table browser.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use cc_core::ids::{
    self, IdTable, ACHIEVEMENTS, BUFFS, BUILDINGS, GODS, GOODS, PLANTS, SOILS, UPGRADES,
};

#[derive(Parser)]
#[command(name = "cc")]
#[command(about = "Encode, decode and validate cookie-game saves", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a native wire string to pretty-printed JSON
    Decode {
        /// Input file ("-" or omitted reads stdin)
        input: Option<PathBuf>,
    },

    /// Validate a JSON save object and encode it to a native wire string
    Encode {
        /// Input JSON file ("-" or omitted reads stdin)
        input: Option<PathBuf>,

        /// Encode the best-effort save even when validation reports problems
        #[arg(long)]
        lenient: bool,
    },

    /// Validate a JSON save object and print the normalized result
    Validate {
        /// Input JSON file ("-" or omitted reads stdin)
        input: Option<PathBuf>,

        /// Exit successfully even when diagnostics were reported
        #[arg(long)]
        lenient: bool,
    },

    /// Print a canonical id table
    Ids {
        /// Table name: buildings, upgrades, achievements, plants, soils,
        /// gods, goods, lumps or buffs
        table: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Decode { input } => {
            let wire = read_input(input.as_deref())?;
            let save = cc_core::decode(wire.trim())?;
            print_json(&save)?;
        }

        Commands::Encode { input, lenient } => {
            let (save, diagnostics) = validate_input(input.as_deref())?;
            if !diagnostics.is_empty() && !lenient {
                bail!("input failed validation with {} problem(s)", diagnostics.len());
            }
            println!("{}", cc_core::encode(&save));
        }

        Commands::Validate { input, lenient } => {
            let (save, diagnostics) = validate_input(input.as_deref())?;
            print_json(&save)?;
            if !diagnostics.is_empty() && !lenient {
                bail!("input failed validation with {} problem(s)", diagnostics.len());
            }
        }

        Commands::Ids { table } => {
            let table = lookup_table(&table)?;
            for (id, name) in table.names().iter().enumerate() {
                println!("{}\t{}", id, name);
            }
        }
    }

    Ok(())
}

fn read_input(path: Option<&std::path::Path>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        _ => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text).context("reading stdin")?;
            Ok(text)
        }
    }
}

fn validate_input(path: Option<&std::path::Path>) -> Result<(cc_core::Save, Vec<String>)> {
    let text = read_input(path)?;
    let value: serde_json::Value = serde_json::from_str(&text).context("parsing input JSON")?;
    let mut diagnostics = Vec::new();
    let save = cc_core::from_object_with(&value, &mut |message| {
        eprintln!("{}", message);
        diagnostics.push(message.to_string());
    });
    Ok((save, diagnostics))
}

/// Pretty-prints with sorted keys by going through a JSON value.
fn print_json(save: &cc_core::Save) -> Result<()> {
    let value = serde_json::to_value(save).context("serializing save")?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn lookup_table(name: &str) -> Result<&'static IdTable> {
    Ok(match name {
        "buildings" => &BUILDINGS,
        "upgrades" => &UPGRADES,
        "achievements" => &ACHIEVEMENTS,
        "plants" => &PLANTS,
        "soils" => &SOILS,
        "gods" => &GODS,
        "goods" => &GOODS,
        "lumps" => &ids::SUGAR_LUMP_KINDS,
        "buffs" => &BUFFS,
        _ => bail!("unknown id table {:?}", name),
    })
}
