//! Sandbox configuration

use collision_engine::config::{CollisionConfig, Config};
use serde::{Deserialize, Serialize};

use crate::sandbox::SandboxError;

/// Sandbox configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    /// Number of ticks to simulate
    pub ticks: u32,

    /// Seconds per tick, used to age debug shapes
    pub tick_length: f32,

    /// RNG seed for planet and bullet placement
    pub seed: u64,

    /// Half extent of the square arena
    pub arena_size: f32,

    /// Planet settings
    pub planets: PlanetSettings,

    /// Bullet settings
    pub bullets: BulletSettings,

    /// Collision engine settings
    pub collision: CollisionConfig,
}

/// Planet spawn settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanetSettings {
    /// Number of planets
    pub count: u32,

    /// Smallest planet radius
    pub min_radius: f32,

    /// Largest planet radius
    pub max_radius: f32,

    /// Largest rotation speed in radians per tick, either direction
    pub max_rotation: f32,
}

/// Bullet spawn settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletSettings {
    /// Number of bullets
    pub count: u32,

    /// Bullet radius
    pub radius: f32,

    /// Distance travelled per tick
    pub speed: f32,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            ticks: 600,
            tick_length: 1.0 / 60.0,
            seed: 42,
            arena_size: 100.0,
            planets: PlanetSettings::default(),
            bullets: BulletSettings::default(),
            collision: CollisionConfig::default(),
        }
    }
}

impl Default for PlanetSettings {
    fn default() -> Self {
        Self {
            count: 4,
            min_radius: 10.0,
            max_radius: 20.0,
            max_rotation: 0.002,
        }
    }
}

impl Default for BulletSettings {
    fn default() -> Self {
        Self {
            count: 64,
            radius: 0.25,
            speed: 0.5,
        }
    }
}

impl Config for SandboxConfig {}

impl SandboxConfig {
    /// Reject settings the spawner cannot use
    pub fn validate(&self) -> Result<(), SandboxError> {
        let invalid = |reason: &str| Err(SandboxError::InvalidConfig(reason.to_string()));

        if !(self.arena_size.is_finite() && self.arena_size > 0.0) {
            return invalid("arena_size must be positive");
        }
        if !(self.tick_length.is_finite() && self.tick_length > 0.0) {
            return invalid("tick_length must be positive");
        }
        let planets = &self.planets;
        if !(planets.min_radius > 0.0 && planets.min_radius <= planets.max_radius) {
            return invalid("planet radii must satisfy 0 < min_radius <= max_radius");
        }
        if !(planets.max_radius.is_finite() && planets.max_rotation.is_finite()) {
            return invalid("planet settings must be finite");
        }
        let bullets = &self.bullets;
        if !(bullets.radius.is_finite() && bullets.radius > 0.0) {
            return invalid("bullet radius must be positive");
        }
        if !(bullets.speed.is_finite() && bullets.speed >= 0.0) {
            return invalid("bullet speed must be non-negative");
        }
        Ok(())
    }
}
