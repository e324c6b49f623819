//! # boxquote
//!
//! Prices a box printing order from the command line.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  order.json ──► QuoteService ──► JsonDirectoryReader (tables/*.json)   │
//! │                      │                                                  │
//! │                      ▼                                                  │
//! │               QuotationEngine ──► quotation text on stdout             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Logs go to stderr so stdout carries only the quotation.

mod args;
mod config;

use anyhow::Context;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use boxquote_core::{Order, QuotationEngine};
use boxquote_tables::{JsonDirectoryReader, QuoteService};

use crate::args::{Command, USAGE};
use crate::config::QuoteConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = match args::parse(std::env::args().skip(1)) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("error: {e}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    if cli.command == Command::Help {
        println!("{USAGE}");
        return Ok(());
    }

    init_tracing();

    let config = QuoteConfig::load(cli.config).context("Failed to load configuration")?;
    info!(tables = %config.tables.dir.display(), "Configuration loaded");

    match cli.command {
        Command::Quote { order, json } => quote(config, &order, json).await,
        Command::Catalog => {
            println!("{}", serde_json::to_string_pretty(&config.settings.catalog)?);
            Ok(())
        }
        Command::Help => Ok(()),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

async fn quote(config: QuoteConfig, order_path: &Path, json: bool) -> anyhow::Result<()> {
    let raw = tokio::fs::read_to_string(order_path)
        .await
        .with_context(|| format!("Failed to read order {}", order_path.display()))?;
    let order: Order = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid order {}", order_path.display()))?;

    let reader = JsonDirectoryReader::new(&config.tables.dir).with_names(config.tables.names);
    let engine = QuotationEngine::new(Arc::new(config.settings));
    let service = QuoteService::new(engine, Arc::new(reader));

    let quotation = service.quote(&order).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&quotation)?);
    } else {
        print!("{}", quotation.text);
    }
    Ok(())
}
