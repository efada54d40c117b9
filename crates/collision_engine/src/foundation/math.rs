//! Math utilities and types
//!
//! Provides the 2D math types used by the collision engine.

pub use nalgebra::{Vector2, Vector4, Unit};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 4D vector type (RGBA colors)
pub type Vec4 = Vector4<f32>;

/// 2D point type
pub type Point2 = nalgebra::Point2<f32>;

/// 2D rotation type
pub type Rotation2 = nalgebra::Rotation2<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = std::f32::consts::TAU;

    /// Componentwise tolerance under which two axes count as the same direction
    pub const AXIS_TOLERANCE: f32 = 1e-6;

    /// Fixed-point scale used when snapping angles onto the vertex grid
    pub const SNAP_SCALE: f32 = 1e6;
}

/// Math utility functions
pub mod utils {
    use super::*;

    /// Rotate a vector by 90 degrees counter-clockwise
    pub fn perp(v: &Vec2) -> Vec2 {
        Vec2::new(-v.y, v.x)
    }

    /// Z component of the 3D cross product of two planar vectors
    pub fn cross2(a: &Vec2, b: &Vec2) -> f32 {
        a.x * b.y - a.y * b.x
    }

    /// Inverse cosine with its argument clamped into `[-1, 1]`
    ///
    /// A NaN argument yields `0.0` so callers never see NaN angles.
    pub fn acos_clamped(value: f32) -> f32 {
        if value.is_nan() {
            return 0.0;
        }
        value.clamp(-1.0, 1.0).acos()
    }

    /// Unsigned angle between two vectors, 0 when either has zero length
    pub fn angle_between(a: &Vec2, b: &Vec2) -> f32 {
        let denom = a.norm() * b.norm();
        if denom <= 0.0 {
            return 0.0;
        }
        acos_clamped(a.dot(b) / denom)
    }

    /// Whether every component of a vector is finite
    pub fn is_finite(v: &Vec2) -> bool {
        v.x.is_finite() && v.y.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::constants::*;
    use super::utils::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_perp_rotates_counter_clockwise() {
        let v = perp(&Vec2::new(1.0, 0.0));
        assert_relative_eq!(v, Vec2::new(0.0, 1.0));
        assert_relative_eq!(cross2(&Vec2::new(1.0, 0.0), &v), 1.0);
    }

    #[test]
    fn test_acos_clamped_handles_round_off() {
        assert_relative_eq!(acos_clamped(1.000_001), 0.0);
        assert_relative_eq!(acos_clamped(-1.000_001), PI);
        assert_eq!(acos_clamped(f32::NAN), 0.0);
    }

    #[test]
    fn test_angle_between_zero_vector() {
        assert_eq!(angle_between(&Vec2::zeros(), &Vec2::new(1.0, 0.0)), 0.0);
        assert_relative_eq!(
            angle_between(&Vec2::new(1.0, 0.0), &Vec2::new(0.0, 2.0)),
            PI / 2.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_tau_matches_two_pi() {
        assert_relative_eq!(TAU, 2.0 * PI);
    }
}
