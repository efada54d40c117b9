//! # Collision Engine
//!
//! Narrow-phase collision detection between rocky planets and round bullets
//! in a 2D artillery game.
//!
//! ## Features
//!
//! - **Sector Extraction**: Only the boundary wedge facing the bullet is tested
//! - **Separating Axis Tests**: Exact triangle/circle intersection
//! - **Core Hits**: Bullets that reach the planet center are reported at once
//! - **Debug Drawing**: Optional hit visualization through a renderer context
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use collision_engine::prelude::*;
//! use rand::SeedableRng;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//!     let polygon = FractalPolygon::new(15.0).generate(&mut rng)?;
//!     let planet: Planet = Planet::new(PlanetPose::default(), polygon);
//!
//!     let engine = CollisionEngine::new(CollisionConfig::default());
//!     let bullet = Circle::new(Point2::new(14.0, 0.0), 0.25);
//!     if engine.check(&planet, &bullet, None) {
//!         println!("hit");
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod debug;
pub mod physics;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{CollisionConfig, Config, ConfigError},
        debug::{CollisionDebugColors, DebugDrawSystem, DrawQueue, Renderer},
        foundation::{
            collections::{BulletHandle, HandleMap, PlanetHandle},
            math::{Point2, Vec2, Vec4},
        },
        physics::collision::{
            Circle, FractalPolygon, GeometryError, Planet, PlanetPolygon, PlanetPose,
            PolygonProvider, RegularPolygon, Triangle, NUM_PLANET_VERTS,
        },
        physics::{CollisionEngine, CollisionOutcome, CollisionReport},
    };
}
