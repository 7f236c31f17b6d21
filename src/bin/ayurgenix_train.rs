

use std::env;
use std::path::PathBuf;

use ayurgenix::intent::train_model;
use ayurgenix::{AyurgenixConfig, RecordStore, DEFAULT_INTENT_THRESHOLD};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("ayurgenix=info".parse()?))
        .init();

    let args: Vec<String> = env::args().collect();

    let mut config_file: Option<String> = None;
    let mut dataset: Option<PathBuf> = None;
    let mut output: Option<PathBuf> = None;
    let mut threshold: Option<f64> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_file = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--dataset" | "-d" => {
                if i + 1 < args.len() {
                    dataset = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--output" | "-o" => {
                if i + 1 < args.len() {
                    output = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--threshold" | "-t" => {
                if i + 1 < args.len() {
                    threshold = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    let config = match &config_file {
        Some(path) => AyurgenixConfig::from_file(path)?,
        None => AyurgenixConfig::from_env(),
    };
    let dataset = dataset.unwrap_or_else(|| config.dataset_path());
    let output = output.unwrap_or_else(|| config.model_path());
    let threshold = threshold
        .or(config.intent_threshold)
        .unwrap_or(DEFAULT_INTENT_THRESHOLD);

    println!("🧠 AyurGenix intent training");
    println!("   Dataset: {}", dataset.display());
    println!("   Output: {}", output.display());
    println!();

    let records = RecordStore::from_path(&dataset).load().await?;
    if records.is_empty() {
        eprintln!("❌ Dataset has no usable records: {}", dataset.display());
        std::process::exit(1);
    }

    let model = train_model(&records, threshold);
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    model.save(&output)?;

    println!(
        "   ✅ {} intents from {} documents",
        model.intent_count(),
        model.document_count()
    );
    println!();
    println!("🎉 Model saved to {}", output.display());

    Ok(())
}

fn print_help() {
    println!("Usage: ayurgenix-train [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -c, --config <FILE>      Load settings from a config file");
    println!("  -d, --dataset <FILE>     Remedy CSV to train on (default: configured dataset)");
    println!("  -o, --output <FILE>      Where to write the model (default: configured model path)");
    println!("  -t, --threshold <SCORE>  Minimum confidence stored with the model");
    println!("  -h, --help               Show this help");
}
