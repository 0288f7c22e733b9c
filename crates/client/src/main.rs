//! Headless crawler client.
//!
//! Composition root that loads content, builds the runtime, recruits the
//! configured party and lets the autopilot play until the run ends or the
//! command budget runs out. Every published event is journaled next to the
//! session log, and a JSON summary is printed on stdout.
//!
//! # Examples
//!
//! ```bash
//! CRAWLER_SEED=7 CRAWLER_PARTY="Aria:FIGHTER,Bram:PRIEST" cargo run -p crawler-client
//! ```

mod autopilot;
mod config;
mod journal;
mod logging;
mod summary;

use std::sync::Arc;

use anyhow::{Context, Result};
use game_content::ContentFactory;
use runtime::{OracleManager, Runtime, RuntimeConfig};

use crate::autopilot::Autopilot;
use crate::config::ClientConfig;
use crate::journal::EventJournal;
use crate::summary::RunSummary;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env()?;
    let logs = logging::setup_logging(config.session_id.clone())?;

    tracing::info!("Starting crawler client");
    tracing::info!("Data directory: {}", config.data_dir.display());

    let oracles = load_oracles(&config)?;
    let mut runtime = Runtime::builder()
        .config(RuntimeConfig {
            seed: config.seed,
            ..RuntimeConfig::default()
        })
        .oracles(oracles)
        .build()?;
    let mut journal = EventJournal::create(&runtime.event_bus(), &logs.dir.join("events.jsonl"))?;

    for (name, class) in &config.party {
        runtime.recruit(name, *class)?;
    }
    runtime.embark()?;
    journal.flush()?;

    let mut autopilot = Autopilot::new(runtime.seed(), config.max_steps);
    while autopilot.step(&mut runtime)? {
        journal.flush()?;
    }
    journal.flush()?;

    let summary = RunSummary::new(
        logs.session_id.clone(),
        runtime.state(),
        autopilot.stats().clone(),
        journal.written(),
    );
    tracing::info!(
        phase = %summary.phase,
        depth = summary.depth,
        commands = summary.stats.commands,
        "Run finished"
    );
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn load_oracles(config: &ClientConfig) -> Result<OracleManager> {
    let factory = ContentFactory::new(config.data_dir.clone());
    let tables = factory.load_tables().context("Failed to load tables")?;
    let maps = factory.load_maps().context("Failed to load dungeon layouts")?;
    let game_config = factory.load_config().context("Failed to load game config")?;

    tracing::info!(layouts = maps.len(), "Content loaded");
    Ok(OracleManager::new(
        Arc::new(tables),
        Arc::new(maps),
        Arc::new(game_config),
    ))
}
