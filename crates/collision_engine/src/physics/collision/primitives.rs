//! Primitive collision shapes
//!
//! Provides the circle probe, triangle wedge, and rigid pose types the
//! collision queries operate on.

use crate::foundation::math::{constants::TAU, Point2, Rotation2, Vec2};

/// A circle for collision detection (the bullet's collision shape)
///
/// A radius of zero is a point probe and is valid input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// The center position of the circle in world space
    pub center: Point2,
    /// The radius of the circle
    pub radius: f32,
}

impl Circle {
    /// Creates a new circle with the given center and radius
    pub fn new(center: Point2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Whether the center and radius are finite numbers
    pub fn is_finite(&self) -> bool {
        self.center.x.is_finite() && self.center.y.is_finite() && self.radius.is_finite()
    }

    /// Check if this circle overlaps a bounding circle (broad-phase test)
    pub fn overlaps_bounds(&self, center: &Point2, radius: f32) -> bool {
        let distance_squared = (self.center - center).norm_squared();
        let radius_sum = self.radius + radius;
        distance_squared < radius_sum * radius_sum
    }
}

/// A triangle for collision detection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// First vertex (the planet center for sector wedges)
    pub v0: Point2,
    /// Second vertex
    pub v1: Point2,
    /// Third vertex
    pub v2: Point2,
}

impl Triangle {
    /// Creates a new triangle
    pub fn new(v0: Point2, v1: Point2, v2: Point2) -> Self {
        Self { v0, v1, v2 }
    }

    /// The three vertices in order
    pub fn vertices(&self) -> [Point2; 3] {
        [self.v0, self.v1, self.v2]
    }

    /// The closed edge loop v0→v1, v1→v2, v2→v0
    pub fn edges(&self) -> [(Point2, Point2); 3] {
        [(self.v0, self.v1), (self.v1, self.v2), (self.v2, self.v0)]
    }
}

/// World placement of a planet: translation plus rotation about its center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetPose {
    /// World position of the planet center
    pub position: Point2,
    /// Rotation in radians, counter-clockwise
    pub orientation: f32,
}

impl PlanetPose {
    /// Creates a new pose
    pub fn new(position: Point2, orientation: f32) -> Self {
        Self { position, orientation }
    }

    /// The planet's local +x axis expressed in world space
    pub fn x_axis(&self) -> Vec2 {
        Vec2::new(self.orientation.cos(), self.orientation.sin())
    }

    /// Rotation matrix for the current orientation
    pub fn rotation(&self) -> Rotation2 {
        Rotation2::new(self.orientation)
    }

    /// Map a local-frame point into world space
    pub fn transform_point(&self, local: &Point2) -> Point2 {
        self.position + self.rotation() * local.coords
    }

    /// Advance the orientation and keep it within `[0, 2π)`
    pub fn rotate_by(&mut self, delta: f32) {
        self.orientation += delta;
        self.wrap_orientation();
    }

    /// Fold the orientation back into `[0, 2π)`
    pub fn wrap_orientation(&mut self) {
        if !self.orientation.is_finite() {
            self.orientation = 0.0;
            return;
        }
        self.orientation = self.orientation.rem_euclid(TAU);
        if self.orientation >= TAU {
            self.orientation = 0.0;
        }
    }
}

impl Default for PlanetPose {
    fn default() -> Self {
        Self::new(Point2::origin(), 0.0)
    }
}
