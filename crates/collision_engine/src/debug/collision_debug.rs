//! Collision-specific debug visualization
//!
//! Based on Game Engine Architecture 3rd Edition, Section 10.2:
//! "Debug drawing for collision detection typically includes visualizations
//! of bounding volumes, collision shapes, and query results."

use crate::debug::draw::Renderer;
use crate::foundation::math::Vec4;
use crate::physics::collision::Triangle;
use serde::{Deserialize, Serialize};

/// Color scheme for collision visualization
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionDebugColors {
    /// Fill color for triangles hit by a bullet
    pub hit_fill: Vec4,

    /// Layer the hit fill is drawn on
    pub fill_layer: u32,

    /// Outline color for the edges of hit triangles
    pub hit_outline: Vec4,

    /// Layer the outline is drawn on (above the fill)
    pub outline_layer: u32,
}

impl Default for CollisionDebugColors {
    fn default() -> Self {
        Self {
            hit_fill: Vec4::new(1.0, 0.0, 0.0, 1.0),    // Red
            fill_layer: 1,
            hit_outline: Vec4::new(1.0, 1.0, 1.0, 1.0), // White
            outline_layer: 2,
        }
    }
}

/// Collision-specific debug visualizer
///
/// Stateless apart from its color scheme; the renderer it draws into is
/// supplied per call.
#[derive(Clone, Debug, Default)]
pub struct CollisionDebugVisualizer {
    colors: CollisionDebugColors,
}

impl CollisionDebugVisualizer {
    /// Create a new collision debug visualizer
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom color scheme
    pub fn with_colors(mut self, colors: CollisionDebugColors) -> Self {
        self.colors = colors;
        self
    }

    /// Active color scheme
    pub fn colors(&self) -> &CollisionDebugColors {
        &self.colors
    }

    /// Draw a triangle a bullet intersected: filled, then outlined
    pub fn draw_hit_triangle(&self, renderer: &mut dyn Renderer, triangle: &Triangle) {
        renderer.set_layer(self.colors.fill_layer);
        renderer.set_color(self.colors.hit_fill);
        renderer.draw_filled_triangle(triangle.vertices());

        renderer.set_layer(self.colors.outline_layer);
        renderer.set_color(self.colors.hit_outline);
        for (start, end) in triangle.edges() {
            renderer.draw_line_segment(start, end);
        }
    }
}
