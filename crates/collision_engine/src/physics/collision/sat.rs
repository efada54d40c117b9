//! Separating axis test between a triangle and a circle
//!
//! A triangle and a circle are disjoint iff some axis exists on which the
//! triangle's projected interval and the circle's projected interval
//! `[c - r, c + r]` do not overlap. Touching intervals count as overlap.

use crate::foundation::math::Vec2;
use super::axes::AxisSet;
use super::primitives::{Circle, Triangle};
use super::support::extremes_along_unit;

/// Options for the triangle/circle test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SatOptions {
    /// Also test the axis from the nearest triangle vertex to the circle center
    pub closest_vertex_axis: bool,
}

impl Default for SatOptions {
    fn default() -> Self {
        Self { closest_vertex_axis: true }
    }
}

/// Result of a triangle/circle separating axis test
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SatOutcome {
    /// The shapes overlap on every tested axis
    Intersecting,
    /// This unit axis separates the shapes
    Separated(Vec2),
    /// No usable axis (collapsed triangle or non-finite circle)
    Degenerate,
}

impl SatOutcome {
    /// True only for [`SatOutcome::Intersecting`]
    pub fn is_intersecting(&self) -> bool {
        matches!(self, Self::Intersecting)
    }
}

/// Candidate axes for a triangle/circle pair
pub fn candidate_axes(triangle: &Triangle, circle: &Circle, options: SatOptions) -> AxisSet {
    let vertices = triangle.vertices();
    let mut axes = AxisSet::from_triangle(&vertices);

    if options.closest_vertex_axis {
        let closest = vertices
            .iter()
            .min_by(|a, b| {
                let da = (circle.center - *a).norm_squared();
                let db = (circle.center - *b).norm_squared();
                da.total_cmp(&db)
            })
            .copied()
            .unwrap_or(triangle.v0);
        axes.insert_normal(circle.center - closest);
    }

    axes
}

/// Run the separating axis test
pub fn test_triangle_circle(triangle: &Triangle, circle: &Circle, options: SatOptions) -> SatOutcome {
    if !circle.is_finite() {
        return SatOutcome::Degenerate;
    }

    let axes = candidate_axes(triangle, circle, options);
    if axes.is_empty() {
        return SatOutcome::Degenerate;
    }

    let vertices = triangle.vertices();
    for axis in &axes {
        let Some(interval) = extremes_along_unit(&vertices, axis) else {
            continue;
        };
        let center = circle.center.coords.dot(axis);

        // |midpoint - center| > half_width + radius, evaluated on the bounds
        if center - interval.max.value > circle.radius || interval.min.value - center > circle.radius {
            return SatOutcome::Separated(*axis);
        }
    }

    SatOutcome::Intersecting
}

/// Convenience wrapper returning whether the shapes intersect
pub fn triangle_intersects_circle(triangle: &Triangle, circle: &Circle, options: SatOptions) -> bool {
    test_triangle_circle(triangle, circle, options).is_intersecting()
}
