//! End-to-end tests for planet/bullet collision queries
//!
//! Fixed scenarios on a decagon planet plus seeded randomized properties
//! over fractal planets.

use crate::config::CollisionConfig;
use crate::debug::{DebugDrawSystem, DrawQueue};
use crate::foundation::math::constants::{PI, TAU};
use crate::foundation::math::{Point2, Vec2};
use crate::physics::collision::{
    extract_sector, AxisSet, Circle, FractalPolygon, Planet, PlanetPolygon, PlanetPose,
    PolygonProvider, RegularPolygon, SectorQuery, NUM_PLANET_VERTS,
};
use crate::physics::{CollisionEngine, CollisionOutcome};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn decagon(pose: PlanetPose) -> Planet<10> {
    let polygon = RegularPolygon { radius: 10.0 }
        .generate(&mut StdRng::seed_from_u64(0))
        .unwrap();
    Planet::new(pose, polygon)
}

fn random_planet(rng: &mut StdRng) -> Planet {
    let radius = rng.gen_range(10.0..20.0);
    let polygon = FractalPolygon::new(radius).generate(rng).unwrap();
    let position = Point2::new(rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0));
    let orientation = rng.gen_range(0.0..TAU);
    Planet::new(PlanetPose::new(position, orientation), polygon)
}

fn random_direction(rng: &mut StdRng) -> Vec2 {
    let angle = rng.gen_range(0.0..TAU);
    Vec2::new(angle.cos(), angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullet_outside_decagon_misses() {
        crate::foundation::logging::init_for_tests();
        let engine = CollisionEngine::default();
        let planet = decagon(PlanetPose::default());

        let report = engine.check_detailed(&planet, &Circle::new(Point2::new(15.0, 0.0), 1.0), None);
        assert_eq!(report.outcome, CollisionOutcome::NoTriangleHit);
        assert!(!engine.check(&planet, &Circle::new(Point2::new(15.0, 0.0), 1.0), None));
    }

    #[test]
    fn test_bullet_crossing_boundary_hits() {
        let engine = CollisionEngine::default();
        let planet = decagon(PlanetPose::default());

        let report = engine.check_detailed(&planet, &Circle::new(Point2::new(10.5, 0.0), 1.0), None);
        assert_eq!(report.outcome, CollisionOutcome::TriangleHit);
        assert!(!report.hit_triangles.is_empty());
    }

    #[test]
    fn test_bullet_covering_center_is_core_hit() {
        let engine = CollisionEngine::default();
        let planet = decagon(PlanetPose::default());

        let report = engine.check_detailed(&planet, &Circle::new(Point2::new(0.0, 0.0), 11.0), None);
        assert_eq!(report.outcome, CollisionOutcome::CoreHit);
        assert!(report.is_hit());
    }

    #[test]
    fn test_point_bullet_on_vertex_touches() {
        let engine = CollisionEngine::default();
        let poses = [
            PlanetPose::default(),
            PlanetPose::new(Point2::new(3.0, -7.0), 0.4),
            PlanetPose::new(Point2::new(-20.0, 5.0), 5.9),
        ];

        for pose in poses {
            let planet = decagon(pose);
            for index in 0..10 {
                let vertex = planet.world_vertex(index);
                let bullet = Circle::new(vertex, 0.0);
                assert!(
                    engine.check(&planet, &bullet, None),
                    "vertex {index} at ({}, {}) should touch",
                    vertex.x,
                    vertex.y
                );
            }
        }
    }

    #[test]
    fn test_malformed_inputs_give_definite_answers() {
        let engine = CollisionEngine::default();
        let planet = decagon(PlanetPose::default());

        // Zero radius at the center counts as covering it
        assert!(engine.check(&planet, &Circle::new(Point2::new(0.0, 0.0), 0.0), None));

        let nan = Circle::new(Point2::new(f32::NAN, 1.0), 1.0);
        assert_eq!(engine.check_detailed(&planet, &nan, None).outcome, CollisionOutcome::Empty);

        let infinite = Circle::new(Point2::new(f32::INFINITY, 0.0), 1.0);
        assert!(!engine.check(&planet, &infinite, None));

        let negative = Circle::new(Point2::new(10.5, 0.0), -1.0);
        assert!(!engine.check(&planet, &negative, None));

        // Ring with repeated vertices produces zero-length edges
        let collapsed = PlanetPolygon::<4>::new([
            Point2::new(5.0, 0.0),
            Point2::new(5.0, 0.0),
            Point2::new(-5.0, 0.0),
            Point2::new(-5.0, 0.0),
        ])
        .unwrap();
        let planet = Planet::new(PlanetPose::default(), collapsed);
        for step in 0..16 {
            let angle = step as f32 * TAU / 16.0;
            let bullet = Circle::new(Point2::new(5.2 * angle.cos(), 5.2 * angle.sin()), 0.5);
            let report = engine.check_detailed(&planet, &bullet, None);
            for triangle in &report.hit_triangles {
                assert!(triangle.vertices().iter().all(|v| v.x.is_finite() && v.y.is_finite()));
            }
        }
    }

    #[test]
    fn test_covering_center_always_hits() {
        let engine = CollisionEngine::default();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let planet = random_planet(&mut rng);
            let offset = random_direction(&mut rng) * rng.gen_range(0.0..30.0);
            let center = planet.pose.position + offset;
            let radius = offset.norm() + rng.gen_range(0.001..5.0);

            let report = engine.check_detailed(&planet, &Circle::new(center, radius), None);
            assert_eq!(report.outcome, CollisionOutcome::CoreHit);
        }
    }

    #[test]
    fn test_beyond_bounding_radius_never_hits() {
        let engine = CollisionEngine::default();
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..500 {
            let planet = random_planet(&mut rng);
            let radius = rng.gen_range(0.0..3.0);
            let distance = planet.bounding_radius() + radius + rng.gen_range(0.01..10.0);
            let center = planet.pose.position + random_direction(&mut rng) * distance;

            assert!(!engine.check(&planet, &Circle::new(center, radius), None));
        }
    }

    #[test]
    fn test_repeated_queries_are_identical() {
        let engine = CollisionEngine::default();
        let mut rng = StdRng::seed_from_u64(19);

        for _ in 0..100 {
            let planet = random_planet(&mut rng);
            let distance = planet.bounding_radius() * rng.gen_range(0.5..1.3);
            let bullet = Circle::new(
                planet.pose.position + random_direction(&mut rng) * distance,
                rng.gen_range(0.1..2.0),
            );

            let first = engine.check_detailed(&planet, &bullet, None);
            let second = engine.check_detailed(&planet, &bullet, None);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_visualization_never_changes_result() {
        let loud = CollisionEngine::default();
        let quiet = CollisionEngine::new(CollisionConfig {
            visualize_hits: false,
            ..CollisionConfig::default()
        });
        let mut rng = StdRng::seed_from_u64(23);
        let mut system = DebugDrawSystem::new();

        for _ in 0..100 {
            let planet = random_planet(&mut rng);
            let distance = planet.bounding_radius() * rng.gen_range(0.5..1.3);
            let bullet = Circle::new(
                planet.pose.position + random_direction(&mut rng) * distance,
                rng.gen_range(0.1..2.0),
            );

            let drawn = loud.check(&planet, &bullet, Some(&mut system));
            assert_eq!(drawn, loud.check(&planet, &bullet, None));
            assert_eq!(drawn, quiet.check(&planet, &bullet, Some(&mut system)));
        }
    }

    #[test]
    fn test_queued_rendering_matches_direct_rendering() {
        let engine = CollisionEngine::default();
        let mut rng = StdRng::seed_from_u64(29);
        let planets: Vec<Planet> = (0..8).map(|_| random_planet(&mut rng)).collect();
        let bullets: Vec<Circle> = planets
            .iter()
            .map(|planet| {
                let distance = planet.bounding_radius() * 0.95;
                Circle::new(planet.pose.position + random_direction(&mut rng) * distance, 1.0)
            })
            .collect();

        let mut direct = DebugDrawSystem::new();
        let expected = engine.check_pairs(planets.iter().zip(bullets.iter()), Some(&mut direct));

        let (queue, receiver) = DrawQueue::new();
        let queued: Vec<bool> = std::thread::scope(|scope| {
            let handles: Vec<_> = planets
                .iter()
                .zip(bullets.iter())
                .map(|(planet, bullet)| {
                    let mut producer = queue.clone();
                    let engine = &engine;
                    scope.spawn(move || engine.check(planet, bullet, Some(&mut producer)))
                })
                .collect();
            handles.into_iter().map(|handle| handle.join().unwrap()).collect()
        });
        drop(queue);

        let mut replayed = DebugDrawSystem::new();
        DrawQueue::drain_into(&receiver, &mut replayed);

        assert_eq!(queued, expected);
        assert_eq!(replayed.shape_count(), direct.shape_count());
    }

    #[test]
    fn test_sector_covers_angular_interval() {
        let mut rng = StdRng::seed_from_u64(31);

        for _ in 0..300 {
            let planet = random_planet(&mut rng);
            let increment = planet.polygon.angular_increment();
            let distance = planet.bounding_radius() * rng.gen_range(0.3..2.0);
            let bullet = Circle::new(
                planet.pose.position + random_direction(&mut rng) * distance,
                rng.gen_range(0.0..3.0),
            );

            let sector = match extract_sector(&planet.polygon, &planet.pose, &bullet) {
                SectorQuery::Triangles(sector) => sector,
                other => panic!("expected a sector, got {other:?}"),
            };
            assert!(sector.triangle_count() >= 1);
            if sector.vertex_count() > NUM_PLANET_VERTS {
                continue;
            }

            let (lower, upper) = sector.interval();
            let (lower_index, upper_index) = sector.raw_range();
            assert!(lower_index as f32 * increment <= lower + 1e-4);
            assert!(upper_index as f32 * increment >= upper - 1e-4);
        }
    }

    #[test]
    fn test_axis_set_counts_undirected_directions() {
        let mut rng = StdRng::seed_from_u64(37);

        for count in 1..12 {
            let mut axes = AxisSet::new();
            for i in 0..count {
                // Spread directions over a half turn so no two are parallel
                let angle = i as f32 * PI / count as f32 + rng.gen_range(0.0..0.01);
                let normal = Vec2::new(angle.cos(), angle.sin()) * rng.gen_range(0.5..5.0);
                axes.insert_normal(normal);
                axes.insert_normal(-normal);
            }
            assert_eq!(axes.len(), count);
        }
    }
}
