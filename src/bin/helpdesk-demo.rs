use anyhow::{Context, Result};
use clap::Parser;
use helpdesk_core::{Category, HelpdeskConfig, IncidentManager, Language, ReporterKind, reporters};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "helpdesk-demo", version, about = "Incident factory demonstration")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured language (english, spanish)
    #[arg(short, long)]
    language: Option<String>,

    /// Override the configured reporter (console, tracing, silent)
    #[arg(short, long)]
    reporter: Option<String>,

    /// Print summaries as JSON
    #[arg(long)]
    json: bool,
}

struct Sample {
    category: Category,
    title: &'static str,
    description: &'static str,
    user_id: u64,
}

const SAMPLES: [Sample; 4] = [
    Sample {
        category: Category::Hardware,
        title: "HP LaserJet printer failure",
        description: "The printer does not respond and reports a paper jam",
        user_id: 1,
    },
    Sample {
        category: Category::Software,
        title: "Microsoft Excel error",
        description: "Excel closes unexpectedly when opening large files",
        user_id: 2,
    },
    Sample {
        category: Category::Network,
        title: "Slow internet connection",
        description: "Very low connection speed across the whole office",
        user_id: 3,
    },
    Sample {
        category: Category::Security,
        title: "Possible phishing attempt",
        description: "An employee received a suspicious email asking for credentials",
        user_id: 4,
    },
];

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => HelpdeskConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => HelpdeskConfig::default(),
    };

    if let Some(language) = cli.language.as_deref() {
        config.language = Language::try_from(language).context("Invalid --language value")?;
    }

    if let Some(reporter) = cli.reporter.as_deref() {
        let kind = ReporterKind::try_from(reporter).context("Invalid --reporter value")?;
        config = config.with_reporter(kind);
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(
        language = %config.language,
        reporter = %config.reporter,
        "helpdesk-demo v{} starting",
        env!("CARGO_PKG_VERSION")
    );

    println!("=== Incident Management System - Factory Method ===\n");

    let manager = IncidentManager::with_config(&config, reporters::from_kind(config.reporter));

    for (i, sample) in SAMPLES.iter().enumerate() {
        println!("--- Incident {} ---", i + 1);

        let summary = manager
            .create_incident(
                sample.category,
                sample.title,
                sample.description,
                sample.user_id,
            )
            .with_context(|| format!("Failed to create {} incident", sample.category))?;

        if summary.priority.is_critical() {
            warn!(
                category = %sample.category,
                title = %summary.title,
                "Critical incident created"
            );
        }

        if cli.json {
            println!("{}", summary.to_json()?);
        } else {
            println!("Incident details:");
            for (key, value) in summary.fields() {
                println!("  {}: {}", key, value);
            }
        }
        println!();
    }

    println!(
        "Available incident categories: {}",
        manager.available_categories_in(config.language).join(", ")
    );

    Ok(())
}
