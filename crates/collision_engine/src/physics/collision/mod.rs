//! Planet/bullet collision detection
//!
//! # Architecture
//!
//! - **Model Space Storage**: Planet rings stored in local coordinates
//! - **On-Demand Transformation**: Only the vertices of the candidate sector
//!   are transformed to world space, once per query
//! - **Query-Scoped Data**: Sectors, axes and intervals live for one query
//!
//! # Module Organization
//!
//! - [`primitives`] - Circle, triangle and pose types
//! - [`polygon`] - Planet boundary rings and shape providers
//! - [`support`] - Extreme points of a point set along an axis
//! - [`axes`] - Deduplicated separating-axis candidates
//! - [`sector`] - Angular sector extraction around a bullet
//! - [`sat`] - Triangle/circle separating axis test

pub mod primitives;
pub mod polygon;
pub mod support;
pub mod axes;
pub mod sector;
pub mod sat;

// Re-export commonly used types
pub use primitives::{Circle, PlanetPose, Triangle};
pub use polygon::{
    FractalPolygon, GeometryError, Planet, PlanetPolygon, PolygonProvider, RegularPolygon,
    NUM_PLANET_VERTS,
};
pub use support::{extremes, Extremes, Support};
pub use axes::AxisSet;
pub use sector::{extract_sector, Sector, SectorQuery};
pub use sat::{test_triangle_circle, triangle_intersects_circle, SatOptions, SatOutcome};
