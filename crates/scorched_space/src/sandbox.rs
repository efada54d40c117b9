//! Headless planet and bullet world
//!
//! Planets spin in place and bullets fly in straight lines. Each tick every
//! live bullet is checked against the planets near it, and a bullet that
//! hits comes to rest on the planet.

use collision_engine::config::ConfigError;
use collision_engine::debug::DebugDrawSystem;
use collision_engine::foundation::collections::{BulletHandle, HandleMap, PlanetHandle};
use collision_engine::foundation::math::{Point2, Vec2};
use collision_engine::physics::collision::{
    Circle, FractalPolygon, GeometryError, Planet, PlanetPose, PolygonProvider,
};
use collision_engine::physics::{CollisionEngine, CollisionOutcome};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;
use thiserror::Error;

use crate::config::SandboxConfig;

/// Sandbox errors
#[derive(Error, Debug)]
pub enum SandboxError {
    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Planet geometry could not be built
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    /// Configuration values out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// A planet and its spin
#[derive(Debug, Clone)]
pub struct SandboxPlanet {
    /// Collision geometry and pose
    pub planet: Planet,
    /// Radians per tick
    pub rotation_speed: f32,
}

/// A bullet in flight or at rest
#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    /// Current position and radius; radius 0 marks a spent bullet
    pub circle: Circle,
    /// Displacement per tick
    pub velocity: Vec2,
    /// Set once the bullet has struck a planet
    pub on_planet: bool,
}

impl Bullet {
    /// Whether the bullet still takes part in collision checks
    pub fn is_active(&self) -> bool {
        self.circle.radius > 0.0
    }

    fn resolve(&mut self) {
        self.circle.radius = 0.0;
        self.velocity = Vec2::zeros();
        self.on_planet = true;
    }
}

/// Counters accumulated over a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SandboxStats {
    /// Ticks simulated
    pub ticks: u32,
    /// Pairs that passed the broad phase
    pub candidates: u64,
    /// Bullets that struck a planet
    pub hits: u32,
    /// Hits that reached a planet center
    pub core_hits: u32,
    /// Debug shapes recorded for hit triangles
    pub shapes_recorded: usize,
}

/// The simulated world
pub struct Sandbox {
    planets: HandleMap<PlanetHandle, SandboxPlanet>,
    bullets: HandleMap<BulletHandle, Bullet>,
    engine: CollisionEngine,
    debug_draw: DebugDrawSystem,
    tick_length: f32,
    stats: SandboxStats,
}

impl Sandbox {
    /// Empty world using `config` for the engine and tick length
    pub fn new(config: &SandboxConfig) -> Self {
        Self {
            planets: HandleMap::with_key(),
            bullets: HandleMap::with_key(),
            engine: CollisionEngine::new(config.collision.clone()),
            debug_draw: DebugDrawSystem::new().with_shape_duration(config.tick_length),
            tick_length: config.tick_length,
            stats: SandboxStats::default(),
        }
    }

    /// World populated with random planets and bullets from `config.seed`
    pub fn spawn(config: &SandboxConfig) -> Result<Self, SandboxError> {
        config.validate()?;

        let mut sandbox = Self::new(config);
        let mut rng = StdRng::seed_from_u64(config.seed);
        let arena = config.arena_size;
        let settings = &config.planets;

        for _ in 0..settings.count {
            let radius = rng.gen_range(settings.min_radius..=settings.max_radius);
            let polygon = FractalPolygon::new(radius).generate(&mut rng)?;
            let position = Point2::new(rng.gen_range(-arena..arena), rng.gen_range(-arena..arena));
            let pose = PlanetPose::new(position, rng.gen_range(0.0..TAU));
            let rotation_speed = if settings.max_rotation > 0.0 {
                rng.gen_range(-settings.max_rotation..=settings.max_rotation)
            } else {
                0.0
            };
            sandbox.add_planet(Planet::new(pose, polygon), rotation_speed);
        }

        for _ in 0..config.bullets.count {
            let position = Point2::new(rng.gen_range(-arena..arena), rng.gen_range(-arena..arena));
            let heading = rng.gen_range(0.0..TAU);
            let velocity = Vec2::new(heading.cos(), heading.sin()) * config.bullets.speed;
            sandbox.add_bullet(Circle::new(position, config.bullets.radius), velocity);
        }

        log::info!(
            "Spawned {} planets and {} bullets (seed {})",
            sandbox.planets.len(),
            sandbox.bullets.len(),
            config.seed
        );
        Ok(sandbox)
    }

    /// Add a planet spinning at `rotation_speed` radians per tick
    pub fn add_planet(&mut self, planet: Planet, rotation_speed: f32) -> PlanetHandle {
        self.planets.insert(SandboxPlanet { planet, rotation_speed })
    }

    /// Add a bullet moving by `velocity` each tick
    pub fn add_bullet(&mut self, circle: Circle, velocity: Vec2) -> BulletHandle {
        self.bullets.insert(Bullet {
            circle,
            velocity,
            on_planet: false,
        })
    }

    /// Look up a planet
    pub fn planet(&self, handle: PlanetHandle) -> Option<&SandboxPlanet> {
        self.planets.get(handle)
    }

    /// Look up a bullet
    pub fn bullet(&self, handle: BulletHandle) -> Option<&Bullet> {
        self.bullets.get(handle)
    }

    /// Bullets still in flight
    pub fn active_bullets(&self) -> usize {
        self.bullets.values().filter(|bullet| bullet.is_active()).count()
    }

    /// Counters so far
    pub fn stats(&self) -> SandboxStats {
        self.stats
    }

    /// Debug shapes currently alive
    pub fn debug_draw(&self) -> &DebugDrawSystem {
        &self.debug_draw
    }

    /// Advance the world by one tick
    pub fn tick(&mut self) {
        self.debug_draw.update(self.tick_length);

        for entry in self.planets.values_mut() {
            entry.planet.pose.rotate_by(entry.rotation_speed);
        }

        for (handle, bullet) in &mut self.bullets {
            if !bullet.is_active() {
                continue;
            }
            bullet.circle.center += bullet.velocity;

            for (planet_handle, entry) in &self.planets {
                let reach = entry.planet.bounding_radius() + bullet.circle.radius;
                let offset = bullet.circle.center - entry.planet.pose.position;
                if offset.norm_squared() >= reach * reach {
                    continue;
                }
                self.stats.candidates += 1;

                let before = self.debug_draw.shape_count();
                let report = self.engine.check_detailed(
                    &entry.planet,
                    &bullet.circle,
                    Some(&mut self.debug_draw),
                );
                self.stats.shapes_recorded += self.debug_draw.shape_count() - before;

                if report.is_hit() {
                    self.stats.hits += 1;
                    if report.outcome == CollisionOutcome::CoreHit {
                        self.stats.core_hits += 1;
                    }
                    log::info!(
                        "Bullet {:?} hit planet {:?} at ({:.2}, {:.2}): {:?}, {} triangles",
                        handle,
                        planet_handle,
                        bullet.circle.center.x,
                        bullet.circle.center.y,
                        report.outcome,
                        report.hit_triangles.len()
                    );
                    bullet.resolve();
                    break;
                }
            }
        }

        self.stats.ticks += 1;
    }

    /// Advance the world by `ticks` ticks
    pub fn run(&mut self, ticks: u32) -> SandboxStats {
        for _ in 0..ticks {
            self.tick();
            if self.active_bullets() == 0 {
                log::info!("All bullets spent after {} ticks", self.stats.ticks);
                break;
            }
        }
        self.stats
    }
}
