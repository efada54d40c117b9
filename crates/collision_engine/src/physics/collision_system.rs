//! Core collision detection system
//!
//! Based on Game Engine Architecture 3rd Edition, Chapter 13:
//! "The collision detection system is typically split into two phases:
//! broad-phase and narrow-phase."
//!
//! This is the narrow phase for one (planet, bullet) pair. Broad-phase
//! filtering is left to the caller. Every query is a pure function of its
//! inputs; the only side channel is the optional renderer.

use crate::config::CollisionConfig;
use crate::debug::{CollisionDebugVisualizer, Renderer};
use crate::physics::collision::{
    extract_sector, test_triangle_circle, Circle, Planet, SatOptions, SatOutcome, SectorQuery,
    Triangle,
};

/// How a collision query ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollisionOutcome {
    /// The bullet covers the planet center; no triangles were tested
    CoreHit,
    /// At least one sector triangle intersects the bullet
    TriangleHit,
    /// Sector triangles were tested and none intersects the bullet
    NoTriangleHit,
    /// No usable geometry; reported as no collision
    Empty,
}

impl CollisionOutcome {
    /// Whether this outcome counts as a collision
    pub fn is_hit(self) -> bool {
        matches!(self, Self::CoreHit | Self::TriangleHit)
    }
}

/// Detailed result of a collision query
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionReport {
    /// Terminal state of the query
    pub outcome: CollisionOutcome,
    /// Every sector triangle the bullet intersects, in ring order
    pub hit_triangles: Vec<Triangle>,
    /// Number of sector triangles tested
    pub tested_triangles: usize,
}

impl CollisionReport {
    fn terminal(outcome: CollisionOutcome) -> Self {
        Self {
            outcome,
            hit_triangles: Vec::new(),
            tested_triangles: 0,
        }
    }

    /// Whether the query found a collision
    pub fn is_hit(&self) -> bool {
        self.outcome.is_hit()
    }

    /// Whether the bullet reached the planet center
    pub fn is_core_hit(&self) -> bool {
        self.outcome == CollisionOutcome::CoreHit
    }
}

/// Planet/bullet collision engine
///
/// Holds configuration only, so one engine can serve any number of threads.
/// When queries run concurrently, hand each thread its own
/// [`DrawQueue`](crate::debug::DrawQueue) clone so draw calls reach the
/// render thread in whole batches.
#[derive(Debug, Clone, Default)]
pub struct CollisionEngine {
    config: CollisionConfig,
    visualizer: CollisionDebugVisualizer,
}

impl CollisionEngine {
    /// Create a new engine with the given configuration
    pub fn new(config: CollisionConfig) -> Self {
        let visualizer = CollisionDebugVisualizer::new().with_colors(config.debug.clone());
        Self { config, visualizer }
    }

    /// Active configuration
    pub fn config(&self) -> &CollisionConfig {
        &self.config
    }

    /// Check a bullet against a planet
    ///
    /// Intersecting triangles are drawn to `renderer` when one is given and
    /// hit visualization is enabled. The renderer never affects the result.
    pub fn check<const N: usize>(
        &self,
        planet: &Planet<N>,
        bullet: &Circle,
        renderer: Option<&mut dyn Renderer>,
    ) -> bool {
        self.check_detailed(planet, bullet, renderer).is_hit()
    }

    /// Check a bullet against a planet and report which triangles were hit
    ///
    /// Testing does not stop at the first hit: every candidate triangle is
    /// tested so all intersecting triangles are reported and drawn.
    pub fn check_detailed<const N: usize>(
        &self,
        planet: &Planet<N>,
        bullet: &Circle,
        mut renderer: Option<&mut dyn Renderer>,
    ) -> CollisionReport {
        let sector = match extract_sector(&planet.polygon, &planet.pose, bullet) {
            SectorQuery::CoreHit => {
                // Hook point for breaking the planet apart
                log::info!(
                    "Core hit: bullet at ({}, {}) r={} reached planet center ({}, {})",
                    bullet.center.x, bullet.center.y, bullet.radius,
                    planet.pose.position.x, planet.pose.position.y
                );
                return CollisionReport::terminal(CollisionOutcome::CoreHit);
            }
            SectorQuery::Empty => {
                log::debug!("No resolvable sector geometry, reporting no collision");
                return CollisionReport::terminal(CollisionOutcome::Empty);
            }
            SectorQuery::Triangles(sector) => sector,
        };

        let options = SatOptions {
            closest_vertex_axis: self.config.closest_vertex_axis,
        };

        let mut hit_triangles = Vec::new();
        for triangle in sector.triangles() {
            match test_triangle_circle(&triangle, bullet, options) {
                SatOutcome::Intersecting => {
                    log::debug!(
                        "Bullet intersects triangle <{}, {}>, <{}, {}>, <{}, {}>",
                        triangle.v0.x, triangle.v0.y,
                        triangle.v1.x, triangle.v1.y,
                        triangle.v2.x, triangle.v2.y
                    );
                    if self.config.visualize_hits {
                        if let Some(renderer) = renderer.as_deref_mut() {
                            self.visualizer.draw_hit_triangle(renderer, &triangle);
                        }
                    }
                    hit_triangles.push(triangle);
                }
                SatOutcome::Separated(axis) => {
                    log::trace!("Triangle separated on axis <{}, {}>", axis.x, axis.y);
                }
                SatOutcome::Degenerate => {
                    log::trace!("Skipping degenerate triangle");
                }
            }
        }

        let outcome = if hit_triangles.is_empty() {
            CollisionOutcome::NoTriangleHit
        } else {
            CollisionOutcome::TriangleHit
        };

        CollisionReport {
            outcome,
            hit_triangles,
            tested_triangles: sector.triangle_count(),
        }
    }

    /// Check many independent (planet, bullet) pairs
    ///
    /// Returns one result per pair, in input order.
    pub fn check_pairs<'a, const N: usize, I>(
        &self,
        pairs: I,
        mut renderer: Option<&mut dyn Renderer>,
    ) -> Vec<bool>
    where
        I: IntoIterator<Item = (&'a Planet<N>, &'a Circle)>,
    {
        let mut results = Vec::new();
        for (planet, bullet) in pairs {
            let renderer = renderer.as_mut().map(|r| &mut **r as &mut dyn Renderer);
            results.push(self.check(planet, bullet, renderer));
        }
        results
    }
}
