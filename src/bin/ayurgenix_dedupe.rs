

use std::env;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use ayurgenix::data::dedupe_csv;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("ayurgenix=info".parse()?))
        .init();

    let args: Vec<String> = env::args().collect();

    let mut input: Option<PathBuf> = None;
    let mut output: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--output" | "-o" => {
                if i + 1 < args.len() {
                    output = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            other => input = Some(PathBuf::from(other)),
        }
        i += 1;
    }

    let Some(input) = input else {
        print_help();
        std::process::exit(1);
    };
    let output = output.unwrap_or_else(|| input.with_extension("dedup.csv"));
    if output == input {
        eprintln!("❌ Refusing to overwrite the input file: {}", input.display());
        std::process::exit(1);
    }

    println!("🧹 Deduplicating {}", input.display());
    let reader = BufReader::new(File::open(&input)?);
    let writer = BufWriter::new(File::create(&output)?);
    let stats = dedupe_csv(reader, writer)?;

    println!("   Rows read: {}", stats.read);
    println!("   Kept: {}", stats.kept);
    println!("   Dropped duplicates: {}", stats.dropped);
    println!();
    println!("✅ Written to {}", output.display());

    Ok(())
}

fn print_help() {
    println!("Usage: ayurgenix-dedupe <INPUT.csv> [--output <FILE>]");
    println!();
    println!("Keeps the first row for each Disease value (case-insensitive).");
}
