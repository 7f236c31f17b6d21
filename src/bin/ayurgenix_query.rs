

use std::env;
use std::sync::Arc;

use ayurgenix::{format_confidence, AyurgenixConfig, Runtime, SymptomPipeline};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("ayurgenix=info".parse()?))
        .init();

    let args: Vec<String> = env::args().collect();

    let mut config_file: Option<String> = None;
    let mut limit: Option<usize> = None;
    let mut medicines = false;
    let mut lexical = false;
    let mut words: Vec<String> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_file = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--limit" | "-n" => {
                if i + 1 < args.len() {
                    limit = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--medicines" | "-m" => medicines = true,
            "--lexical" => lexical = true,
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            other => words.push(other.to_string()),
        }
        i += 1;
    }

    let query = words.join(" ");
    if query.trim().is_empty() {
        print_help();
        std::process::exit(1);
    }

    let config = match &config_file {
        Some(path) => AyurgenixConfig::from_file(path)?,
        None => AyurgenixConfig::from_env(),
    };
    let runtime = Runtime::new(config);

    if medicines {
        let limit = limit.unwrap_or(runtime.config().medicine_limit);
        let found = runtime.retrieve_medicines(&query, limit).await?;
        if found.is_empty() {
            println!("🔍 No medicines found for \"{}\"", query);
            return Ok(());
        }
        println!("💊 {} medicine(s) for \"{}\"", found.len(), query);
        for medicine in &found {
            println!("   • {} [{}] {}", medicine.name, medicine.id, medicine.composition);
            if !medicine.uses.is_empty() {
                println!("     uses: {}", medicine.uses.join(", "));
            }
        }
        return Ok(());
    }

    let limit = limit.unwrap_or(runtime.config().default_limit);
    let outcome = if lexical {
        SymptomPipeline::lexical_only(Arc::clone(runtime.engine()))
            .process(&query, limit)
            .await?
    } else {
        runtime.process(&query, limit).await?
    };

    match &outcome.best_match {
        Some(prediction) => println!(
            "🧭 {} confident you mean \"{}\"",
            format_confidence(prediction.confidence),
            prediction.label
        ),
        None if outcome.degraded => println!("⚠️  Intent model unavailable, matching keywords only"),
        None => {}
    }

    if outcome.remedies.is_empty() {
        println!("🔍 No remedies found for \"{}\"", query);
        return Ok(());
    }

    let scored = runtime
        .engine()
        .retrieve_scored(outcome.effective_query(&query), limit)
        .await?;
    println!("🌿 {} remedy record(s)", scored.len());
    for (rank, candidate) in scored.iter().enumerate() {
        let record = &candidate.record;
        println!("{:>3}. {} (score {})", rank + 1, record.summary(80), candidate.score);
        if !record.ayurvedic_herbs.is_empty() {
            println!("     herbs: {}", record.ayurvedic_herbs);
        }
        if !record.formulation.is_empty() {
            println!("     formulation: {}", record.formulation);
        }
    }

    Ok(())
}

fn print_help() {
    println!("Usage: ayurgenix-query [OPTIONS] <query...>");
    println!();
    println!("Options:");
    println!("  -c, --config <FILE>   Load settings from a TOML/JSON/YAML file");
    println!("  -n, --limit <N>       Maximum number of results");
    println!("  -m, --medicines       Look up medicines instead of remedies");
    println!("      --lexical         Skip intent classification");
    println!("  -h, --help            Show this help");
    println!();
    println!("Environment: AYURGENIX_DATA_DIR, AYURGENIX_DEFAULT_LIMIT, AYURGENIX_INTENT_THRESHOLD, RUST_LOG");
}
