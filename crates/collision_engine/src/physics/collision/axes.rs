//! Candidate separating axes
//!
//! Collects the unit edge normals of a closed point loop, dropping any
//! normal that is parallel or antiparallel (within tolerance) to one already
//! collected. A triangle yields at most three axes.

use crate::foundation::math::{constants::AXIS_TOLERANCE, utils::perp, Point2, Vec2};
use super::support::unit_axis;
use approx::AbsDiffEq;

/// Deduplicated set of unit axes
#[derive(Debug, Clone, PartialEq)]
pub struct AxisSet {
    axes: Vec<Vec2>,
    tolerance: f32,
}

impl AxisSet {
    /// Create an empty set with the default tolerance
    pub fn new() -> Self {
        Self::with_tolerance(AXIS_TOLERANCE)
    }

    /// Create an empty set with a custom componentwise tolerance
    pub fn with_tolerance(tolerance: f32) -> Self {
        Self {
            axes: Vec::with_capacity(3),
            tolerance,
        }
    }

    /// Axes from the edges of a triangle (P0→P1, P1→P2, P2→P0)
    pub fn from_triangle(vertices: &[Point2; 3]) -> Self {
        Self::from_loop(vertices)
    }

    /// Axes from the edges of a closed loop of points
    pub fn from_loop(points: &[Point2]) -> Self {
        let mut set = Self::new();
        set.extend_from_loop(points);
        set
    }

    /// Insert the edge normals of a closed loop of points
    pub fn extend_from_loop(&mut self, points: &[Point2]) {
        for (i, start) in points.iter().enumerate() {
            let end = points[(i + 1) % points.len()];
            self.insert_normal(perp(&(end - start)));
        }
    }

    /// Insert a direction unless it duplicates an existing axis
    ///
    /// The direction is normalized first. Zero-length and non-finite
    /// directions are never inserted. Returns true if the set grew.
    pub fn insert_normal(&mut self, normal: Vec2) -> bool {
        let Some(unit) = unit_axis(&normal) else {
            log::trace!("Skipping degenerate axis <{}, {}>", normal.x, normal.y);
            return false;
        };

        let duplicate = self.axes.iter().find(|&&axis| {
            axis.abs_diff_eq(&unit, self.tolerance) || axis.abs_diff_eq(&-unit, self.tolerance)
        });
        if let Some(existing) = duplicate {
            log::trace!(
                "Axis <{}, {}> duplicates <{}, {}>, not inserted",
                unit.x, unit.y, existing.x, existing.y
            );
            return false;
        }

        self.axes.push(unit);
        true
    }

    /// Number of unique axes
    pub fn len(&self) -> usize {
        self.axes.len()
    }

    /// True if no usable axis was found
    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    /// Iterate over the unit axes
    pub fn iter(&self) -> std::slice::Iter<'_, Vec2> {
        self.axes.iter()
    }

    /// The unit axes as a slice
    pub fn as_slice(&self) -> &[Vec2] {
        &self.axes
    }
}

impl Default for AxisSet {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a AxisSet {
    type Item = &'a Vec2;
    type IntoIter = std::slice::Iter<'a, Vec2>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
