//! Physics module for collision detection
//!
//! Provides the planet/bullet narrow-phase: sector extraction followed by
//! per-triangle separating axis tests.

pub mod collision;
pub mod collision_system;

#[cfg(test)]
mod tests;

pub use collision::{Circle, Planet, PlanetPolygon, PlanetPose, Triangle};
pub use collision_system::{CollisionEngine, CollisionOutcome, CollisionReport};
