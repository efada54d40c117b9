//! Planet boundary polygons
//!
//! A planet's shape is a closed ring of `N` vertices in the planet's local
//! frame, centered on the local origin. Vertex `i` is expected to sit at
//! local angle `i * 2π / N`; sector extraction maps angles to indices with
//! that spacing. Shapes are stored in model space and transformed to world
//! space on demand.

use crate::foundation::math::{constants::TAU, Point2};
use super::primitives::PlanetPose;
use rand::Rng;
use thiserror::Error;

/// Default number of boundary vertices on a planet (center excluded)
pub const NUM_PLANET_VERTS: usize = 18;

/// Smallest radius factor the fractal generator lets a vertex shrink to
const MIN_RADIUS_FACTOR: f32 = 0.2;

/// Runs of the displacement map at most this wide are filled, not split
const FRACTAL_LEAF_SPAN: usize = 5;

/// Polygon construction errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A ring needs at least a triangle's worth of vertices
    #[error("Polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    /// Supplied vertex list does not match the ring size
    #[error("Expected {expected} vertices, got {actual}")]
    VertexCount {
        /// Ring size
        expected: usize,
        /// Supplied count
        actual: usize,
    },

    /// A vertex coordinate is NaN or infinite
    #[error("Vertex {index} is not finite")]
    NonFiniteVertex {
        /// Offending vertex index
        index: usize,
    },

    /// Generated shapes need a positive, finite radius
    #[error("Invalid polygon radius: {0}")]
    InvalidRadius(f32),
}

/// Closed ring of `N` boundary vertices in a planet's local frame
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetPolygon<const N: usize> {
    vertices: [Point2; N],
    max_radius: f32,
}

impl<const N: usize> PlanetPolygon<N> {
    /// Build a ring from local-frame vertices
    pub fn new(vertices: [Point2; N]) -> Result<Self, GeometryError> {
        if N < 3 {
            return Err(GeometryError::TooFewVertices(N));
        }
        if let Some(index) = vertices
            .iter()
            .position(|v| !(v.x.is_finite() && v.y.is_finite()))
        {
            return Err(GeometryError::NonFiniteVertex { index });
        }

        let max_radius = vertices
            .iter()
            .map(|v| v.coords.norm())
            .fold(0.0f32, f32::max);

        Ok(Self { vertices, max_radius })
    }

    /// Build a ring from a slice, checking its length
    pub fn from_slice(vertices: &[Point2]) -> Result<Self, GeometryError> {
        let array: [Point2; N] = vertices.try_into().map_err(|_| GeometryError::VertexCount {
            expected: N,
            actual: vertices.len(),
        })?;
        Self::new(array)
    }

    /// Number of boundary vertices
    pub const fn len(&self) -> usize {
        N
    }

    /// Always false: a valid ring has at least 3 vertices
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Angle between consecutive vertices
    pub fn angular_increment(&self) -> f32 {
        TAU / N as f32
    }

    /// Distance from the center to the farthest vertex
    pub fn max_radius(&self) -> f32 {
        self.max_radius
    }

    /// All vertices in local space
    pub fn vertices(&self) -> &[Point2; N] {
        &self.vertices
    }

    /// Local-space vertex; the index wraps around the ring in both directions
    pub fn vertex(&self, index: i64) -> Point2 {
        self.vertices[index.rem_euclid(N as i64) as usize]
    }

    /// World-space vertex for a given pose
    pub fn world_vertex(&self, index: i64, pose: &PlanetPose) -> Point2 {
        pose.transform_point(&self.vertex(index))
    }
}

/// A planet as seen by the collision engine: a pose and a boundary ring
#[derive(Debug, Clone, PartialEq)]
pub struct Planet<const N: usize = NUM_PLANET_VERTS> {
    /// World placement
    pub pose: PlanetPose,
    /// Boundary ring in the local frame
    pub polygon: PlanetPolygon<N>,
}

impl<const N: usize> Planet<N> {
    /// Creates a planet from a pose and a ring
    pub fn new(pose: PlanetPose, polygon: PlanetPolygon<N>) -> Self {
        Self { pose, polygon }
    }

    /// Radius of the circle around the center that encloses the ring
    pub fn bounding_radius(&self) -> f32 {
        self.polygon.max_radius()
    }

    /// World-space boundary vertex
    pub fn world_vertex(&self, index: i64) -> Point2 {
        self.polygon.world_vertex(index, &self.pose)
    }
}

/// Source of planet boundary rings
pub trait PolygonProvider {
    /// Produce a ring of `N` vertices
    fn generate<const N: usize, R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<PlanetPolygon<N>, GeometryError>;
}

/// Regular polygon with every vertex at the same radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegularPolygon {
    /// Circumradius
    pub radius: f32,
}

impl PolygonProvider for RegularPolygon {
    fn generate<const N: usize, R: Rng + ?Sized>(
        &self,
        _rng: &mut R,
    ) -> Result<PlanetPolygon<N>, GeometryError> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(GeometryError::InvalidRadius(self.radius));
        }
        let increment = TAU / N as f32;
        PlanetPolygon::new(std::array::from_fn(|i| {
            let theta = i as f32 * increment;
            Point2::new(self.radius * theta.cos(), self.radius * theta.sin())
        }))
    }
}

/// Rough, rocky ring produced by random midpoint displacement
///
/// The farthest vertex lands exactly on `max_radius`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractalPolygon {
    /// Radius of the farthest vertex
    pub max_radius: f32,
    /// Displacement range at the top level; halves at each level below
    pub roughness: f32,
}

impl FractalPolygon {
    /// Fractal ring with the default roughness of 1.0
    pub fn new(max_radius: f32) -> Self {
        Self { max_radius, roughness: 1.0 }
    }
}

impl PolygonProvider for FractalPolygon {
    fn generate<const N: usize, R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<PlanetPolygon<N>, GeometryError> {
        if !(self.max_radius.is_finite() && self.max_radius > 0.0) {
            return Err(GeometryError::InvalidRadius(self.max_radius));
        }
        if N < 3 {
            return Err(GeometryError::TooFewVertices(N));
        }

        let mut map = [0.0f32; N];
        midpoint_displacement(rng, self.roughness, 0, N - 1, &mut map);

        let increment = TAU / N as f32;
        let mut vertices: [Point2; N] = std::array::from_fn(|i| {
            let theta = i as f32 * increment;
            let factor = (1.0 + map[i]).max(MIN_RADIUS_FACTOR);
            Point2::new(theta.cos() * factor, theta.sin() * factor)
        });

        let longest = vertices
            .iter()
            .map(|v| v.coords.norm())
            .fold(0.0f32, f32::max);
        let scale = self.max_radius / longest;
        for vertex in &mut vertices {
            vertex.coords *= scale;
        }

        PlanetPolygon::new(vertices)
    }
}

/// Fill `map[x0..=xn]` with a 1D fractal profile
fn midpoint_displacement<R: Rng + ?Sized>(
    rng: &mut R,
    range: f32,
    x0: usize,
    xn: usize,
    map: &mut [f32],
) {
    let offset = range * (rng.gen::<f32>() - 0.5);

    if xn - x0 <= FRACTAL_LEAF_SPAN {
        let mean = (map[x0] + map[xn]) / 2.0;
        for value in &mut map[x0..xn] {
            *value = mean;
        }
    } else {
        let xm = (x0 + xn) / 2;
        map[xm] += offset + (map[x0] + map[xn]) / 2.0;
        midpoint_displacement(rng, range * 0.5, x0, xm, map);
        midpoint_displacement(rng, range * 0.5, xm, xn, map);
    }
}
