//! Angular sector extraction
//!
//! Narrows a planet's boundary ring down to the contiguous run of vertices
//! whose fan triangles (planet center, `v_i`, `v_i+1`) could contain a
//! bullet. The bullet's angular footprint as seen from the planet center is
//! approximated by a single tangent offset `q = p + r * perp(p)/|p|`, so the
//! half-angle is `atan(r/|p|)` rather than the true `asin(r/|p|)`.

use crate::foundation::math::{
    constants::{SNAP_SCALE, TAU},
    utils::{angle_between, cross2, is_finite, perp},
    Point2,
};
use super::polygon::PlanetPolygon;
use super::primitives::{Circle, PlanetPose, Triangle};

/// Result of narrowing a planet down to candidate triangles
#[derive(Debug, Clone, PartialEq)]
pub enum SectorQuery {
    /// The bullet already covers the planet center
    CoreHit,
    /// Candidate wedge triangles around the bullet
    Triangles(Sector),
    /// No usable geometry could be resolved (non-finite input)
    Empty,
}

/// Contiguous run of boundary vertices that may overlap a bullet
///
/// `points[0]` is the planet center in world space, followed by the
/// world-space vertices `lower..=upper`.
#[derive(Debug, Clone, PartialEq)]
pub struct Sector {
    lower_index: i64,
    upper_index: i64,
    ring_size: usize,
    theta: f32,
    alpha: f32,
    interval: (f32, f32),
    points: Vec<Point2>,
}

impl Sector {
    /// First vertex index of the run, wrapped into `0..N`
    pub fn lower_index(&self) -> usize {
        self.lower_index.rem_euclid(self.ring_size as i64) as usize
    }

    /// Last vertex index of the run, wrapped into `0..N`
    pub fn upper_index(&self) -> usize {
        self.upper_index.rem_euclid(self.ring_size as i64) as usize
    }

    /// Unwrapped index range; `lower <= upper`, either may fall outside `0..N`
    pub fn raw_range(&self) -> (i64, i64) {
        (self.lower_index, self.upper_index)
    }

    /// Angle of the bullet direction relative to the planet's local +x axis
    pub fn theta(&self) -> f32 {
        self.theta
    }

    /// Half-angle of the bullet's approximate angular footprint
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Footprint interval `[theta - alpha, theta + alpha]` after normalization
    pub fn interval(&self) -> (f32, f32) {
        self.interval
    }

    /// Planet center followed by the run's world-space vertices
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Number of boundary vertices in the run
    pub fn vertex_count(&self) -> usize {
        self.points.len() - 1
    }

    /// Number of fan triangles in the run
    pub fn triangle_count(&self) -> usize {
        self.points.len().saturating_sub(2)
    }

    /// Fan triangles `(center, v_i, v_i+1)` in ring order
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        let center = self.points[0];
        self.points[1..]
            .windows(2)
            .map(move |pair| Triangle::new(center, pair[0], pair[1]))
    }
}

/// Find the candidate triangles of `polygon` (placed at `pose`) for `circle`
pub fn extract_sector<const N: usize>(
    polygon: &PlanetPolygon<N>,
    pose: &PlanetPose,
    circle: &Circle,
) -> SectorQuery {
    if !circle.is_finite() || circle.radius < 0.0 || !pose.orientation.is_finite() {
        return SectorQuery::Empty;
    }

    let p = circle.center - pose.position;
    let distance = p.norm();
    if !distance.is_finite() {
        return SectorQuery::Empty;
    }
    if circle.radius >= distance {
        return SectorQuery::CoreHit;
    }

    // One-sided tangent offset
    let q = p + circle.radius * perp(&p).normalize();
    if !is_finite(&q) {
        return SectorQuery::Empty;
    }

    let x_axis = pose.x_axis();
    let mut theta = angle_between(&p, &x_axis);
    if cross2(&p, &x_axis) > 0.0 {
        theta = TAU - theta;
    }
    let alpha = angle_between(&p, &q);

    let mut lower = theta - alpha;
    let mut upper = theta + alpha;
    if lower > upper {
        std::mem::swap(&mut lower, &mut upper);
    }
    if lower < 0.0 {
        lower += TAU;
        upper += TAU;
    }

    let increment = polygon.angular_increment();
    let snapped_lower = lower - snap_remainder(lower, increment);
    let snapped_upper = upper - snap_remainder(upper, increment) + increment;

    let mut lower_index = (snapped_lower / increment).round() as i64;
    let mut upper_index = (snapped_upper / increment).round() as i64;
    // The upper bound is padded by one increment, so this only guards the
    // two-vertex minimum if the snapping above ever changes
    if lower_index == upper_index {
        lower_index -= 1;
        upper_index += 1;
    }

    let vertex_count = if lower_index <= upper_index {
        upper_index - lower_index + 1
    } else {
        upper_index + N as i64 - lower_index + 1
    }
    .min(N as i64 + 1);

    log::debug!(
        "Sector: increment={increment} theta={theta} alpha={alpha} orientation={} \
         lower={lower_index} upper={upper_index} vertices={vertex_count}",
        pose.orientation
    );

    let mut points = Vec::with_capacity(vertex_count as usize + 1);
    points.push(pose.position);
    points.extend((0..vertex_count).map(|k| polygon.world_vertex(lower_index + k, pose)));

    if points.len() < 3 {
        return SectorQuery::Empty;
    }

    SectorQuery::Triangles(Sector {
        lower_index,
        upper_index: lower_index + vertex_count - 1,
        ring_size: N,
        theta,
        alpha,
        interval: (lower, upper),
        points,
    })
}

/// Remainder of `angle` modulo `increment`, computed on a fixed-point grid
///
/// Scaling both values to integers keeps repeated snapping free of
/// accumulated floating-point drift.
fn snap_remainder(angle: f32, increment: f32) -> f32 {
    let scale = f64::from(SNAP_SCALE);
    let scaled_increment = (f64::from(increment) * scale) as i64;
    if scaled_increment <= 0 {
        return 0.0;
    }
    let scaled_angle = (f64::from(angle) * scale) as i64;
    ((scaled_angle % scaled_increment) as f64 / scale) as f32
}
