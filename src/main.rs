// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;
use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use scales::{
    enumerate_into, CanonicalRegistry, Enumeration, EnumerationReport, PatternWriter, QueryFile,
    SearchParams,
};
use tracing::Level;

fn print_usage() {
    println!("Please supply the following arguments:");
    println!("\tN: number of active pitches");
    println!("\tM: max number of consecutive chromatic notes");
    println!("\teg: scales N M");
}

fn print_help() {
    print_usage();
    println!();
    println!("Options:");
    println!("  --config <FILE>   Read N and M from a YAML or TOML query file");
    println!("  --yaml            Print a YAML report instead of one line per scale");
    println!("  -v, --verbose     Log search progress to stderr");
    println!("  -h, --help        Show this help message");
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

/// One line per scale, then the total
fn print_lines(params: SearchParams) -> Result<()> {
    let stdout = io::stdout();
    let mut writer = PatternWriter::new(BufWriter::new(stdout.lock()));
    let mut registry = CanonicalRegistry::new();

    let total = enumerate_into(params, &mut registry, &mut writer)?;
    writer.finish(total).context("Failed to write total")?;
    Ok(())
}

fn print_yaml(params: SearchParams) -> Result<()> {
    let run = Enumeration::run(params)?;
    print!("{}", EnumerationReport::from(&run).to_yaml()?);
    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut verbose = false;
    let mut yaml = false;
    let mut config: Option<String> = None;
    let mut positional: Vec<&str> = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-v" | "--verbose" => verbose = true,
            "--yaml" => yaml = true,
            "--config" => {
                let Some(path) = iter.next() else {
                    eprintln!("Error: --config requires a file path");
                    std::process::exit(1);
                };
                config = Some(path.clone());
            }
            "-h" | "--help" => {
                print_help();
                return Ok(());
            }
            other => positional.push(other),
        }
    }

    init_logging(verbose);

    let params = match (&config, positional.as_slice()) {
        (Some(path), _) => QueryFile::load(path)?.params()?,
        (None, [n, m, ..]) => SearchParams::from_args(n, m)?,
        (None, _) => {
            print_usage();
            return Ok(());
        }
    };

    if yaml {
        print_yaml(params)
    } else {
        print_lines(params)
    }
}
