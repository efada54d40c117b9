//! Scorched Space sandbox
//!
//! Spawns rocky planets and a spray of bullets, then runs the collision
//! engine headless for a fixed number of ticks.
//!
//! Usage: `scorched_space [config.toml | config.ron]`

mod config;
mod sandbox;

use collision_engine::config::Config;
use collision_engine::foundation::logging;

use crate::config::SandboxConfig;
use crate::sandbox::{Sandbox, SandboxError};

fn load_config() -> Result<SandboxConfig, SandboxError> {
    match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading sandbox configuration from {}", path);
            Ok(SandboxConfig::load_from_file(&path)?)
        }
        None => {
            log::warn!("No configuration path given, using defaults");
            Ok(SandboxConfig::default())
        }
    }
}

fn run() -> Result<(), SandboxError> {
    let config = load_config()?;
    let mut sandbox = Sandbox::spawn(&config)?;

    log::info!("Running {} ticks", config.ticks);
    let stats = sandbox.run(config.ticks);

    log::info!(
        "Finished after {} ticks: {} broad-phase candidates, {} hits ({} core hits), \
         {} bullets still flying, {} debug shapes recorded",
        stats.ticks,
        stats.candidates,
        stats.hits,
        stats.core_hits,
        sandbox.active_bullets(),
        stats.shapes_recorded
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    log::info!("Starting Scorched Space sandbox");

    match run() {
        Ok(()) => {
            log::info!("Sandbox completed successfully");
            Ok(())
        }
        Err(e) => {
            log::error!("Sandbox failed: {}", e);
            Err(e.into())
        }
    }
}
