// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small CLI for working with `Script_Extensions` tables.
//! It validates a regenerated table before it replaces the embedded one, answers code point
//! queries, and prints a table back in normalized form.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use script_extensions::ScriptExtensionsTable;

#[derive(Parser, Debug)]
#[command(version, about = "Validate and query Unicode Script_Extensions tables")]
struct Cli {
    /// Log more; repeat for more detail.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load a table and summarize it.
    Check {
        /// The table file.
        file: PathBuf,
    },
    /// Print the scripts of each code point, given as `U+0041`, `0x41` or `41`.
    Lookup {
        /// Table file to query instead of the embedded table.
        #[arg(long)]
        table: Option<PathBuf>,
        #[arg(required = true)]
        code_points: Vec<String>,
    },
    /// Print the code point ranges whose script list contains a script.
    Ranges {
        /// Table file to query instead of the embedded table.
        #[arg(long)]
        table: Option<PathBuf>,
        script: String,
    },
    /// Print a table in normalized form.
    Dump {
        /// Table file to print instead of the embedded table.
        #[arg(long)]
        table: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Check { file } => check(&file),
        Command::Lookup { table, code_points } => {
            let table = load(table.as_deref())?;
            for arg in &code_points {
                let code_point = parse_code_point(arg)?;
                let scripts = table.lookup(code_point)?;
                println!("U+{code_point:04X}\t{scripts}");
            }
            Ok(())
        }
        Command::Ranges { table, script } => {
            let table = load(table.as_deref())?;
            let mut found = false;
            for range in table.ranges_for_script(&script) {
                found = true;
                if range.start() == range.end() {
                    println!("{:04X}", range.start());
                } else {
                    println!("{:04X}..{:04X}", range.start(), range.end());
                }
            }
            if !found {
                log::warn!("no code point has script {script}");
            }
            Ok(())
        }
        Command::Dump { table } => {
            print!("{}", load(table.as_deref())?);
            Ok(())
        }
    }
}

/// `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn check(path: &Path) -> Result<()> {
    let table = read_table(path)?;
    let metadata = table.metadata();
    let multi = table.ranges().filter(|range| range.scripts().len() > 1).count();
    let covered: u32 = table
        .ranges()
        .map(|range| range.end() - range.start() + 1)
        .sum();
    println!("{}: ok", path.display());
    println!("table:    {}", metadata.table().unwrap_or("-"));
    println!("unicode:  {}", metadata.unicode_version().unwrap_or("-"));
    println!("missing:  {}", metadata.missing());
    println!("ranges:   {} ({multi} with several scripts)", table.len());
    println!("scripts:  {}", table.script_names().len());
    println!("covered:  {covered} code points");
    Ok(())
}

/// Loads `path`, or borrows the embedded table when no path is given.
fn load(path: Option<&Path>) -> Result<Cow<'static, ScriptExtensionsTable>> {
    match path {
        Some(path) => read_table(path).map(Cow::Owned),
        None => Ok(Cow::Borrowed(script_extensions_data::try_table()?)),
    }
}

fn read_table(path: &Path) -> Result<ScriptExtensionsTable> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let table = ScriptExtensionsTable::parse(&source)
        .with_context(|| format!("{} is not a valid table", path.display()))?;
    log::info!("loaded {} ranges from {}", table.len(), path.display());
    Ok(table)
}

/// Parses `U+0041`, `0x41` or bare hexadecimal `41`.
fn parse_code_point(arg: &str) -> Result<u32> {
    let digits = ["U+", "u+", "0x", "0X"]
        .iter()
        .find_map(|prefix| arg.strip_prefix(prefix))
        .unwrap_or(arg);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        bail!("`{arg}` is not a hexadecimal code point");
    }
    u32::from_str_radix(digits, 16).with_context(|| format!("`{arg}` is too large"))
}
