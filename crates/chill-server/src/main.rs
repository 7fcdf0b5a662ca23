//! Break server binary.
//!
//! Composition root: resolves configuration (flags over file over
//! defaults), builds the one engine instance and the routine registry, and
//! serves the JSONL protocol over stdin/stdout. All logging goes to stderr.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use chill_core::{BreakLogger, ChillState, EngineConfig};
use chill_routines::Registry;
use chill_server::config::{ConfigError, ServerConfig};
use chill_server::server;

/// Command line arguments for the break server
#[derive(Parser, Debug)]
#[command(name = "chill-server")]
#[command(about = "A break server for overworked automated agents")]
struct Args {
    /// Probability (0-100) that the boss notices each break
    #[arg(long)]
    boss_alertness: Option<u8>,

    /// Seconds between automatic boss alert reductions
    #[arg(long)]
    boss_alertness_cooldown: Option<u64>,

    /// Stress gained per minute without a break
    #[arg(long)]
    stress_increase_rate: Option<f64>,

    /// Random seed for reproducible sessions
    #[arg(long)]
    rng_seed: Option<u64>,

    /// Optional TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Optional JSONL break history file
    #[arg(long)]
    history_log: Option<PathBuf>,
}

/// Server defaults, used when neither a flag nor a config file says
/// otherwise.
fn default_engine_config() -> EngineConfig {
    EngineConfig {
        boss_alertness: 50,
        boss_alertness_cooldown: 300,
        stress_increase_rate: 10.0,
        rng_seed: None,
    }
}

/// Flag > config file > default.
fn resolve_engine_config(args: &Args) -> Result<EngineConfig, ConfigError> {
    let mut engine = match &args.config {
        Some(path) => ServerConfig::from_file(path)?.engine,
        None => default_engine_config(),
    };

    if let Some(value) = args.boss_alertness {
        engine.boss_alertness = value;
    }
    if let Some(value) = args.boss_alertness_cooldown {
        engine.boss_alertness_cooldown = value;
    }
    if let Some(value) = args.stress_increase_rate {
        engine.stress_increase_rate = value;
    }
    if let Some(value) = args.rng_seed {
        engine.rng_seed = Some(value);
    }

    Ok(engine)
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let engine_config = match resolve_engine_config(&args) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let mut logger = match &args.history_log {
        Some(path) => match BreakLogger::new(path) {
            Ok(logger) => logger,
            Err(e) => {
                tracing::error!("could not open history log {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => BreakLogger::null(),
    };

    let registry = Registry::builtin();
    let mut engine = ChillState::new(engine_config);

    tracing::info!("🚀 booting the break server, reclaim your coffee loops");
    tracing::info!("boss alertness configured: {}", engine.config().boss_alertness);
    tracing::info!(
        "stress increase rate: {}/min",
        engine.config().stress_increase_rate
    );
    tracing::info!(
        "boss alertness cooldown: {}s",
        engine.config().boss_alertness_cooldown
    );
    tracing::info!("registered {} break routines", registry.len());

    if let Err(e) = server::run_stdio(&mut engine, &registry, &mut logger).await {
        tracing::error!("server terminated with error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("input closed, clocking out for real");
}
