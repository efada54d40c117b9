//! Debug drawing primitives and system
//!
//! Based on Game Engine Architecture 3rd Edition, Section 10.2:
//! "Debug drawing facilities allow programmers to render simple shapes like
//! lines, points, spheres and boxes for debugging and visualization purposes."
//!
//! Render state (layer and color) lives in the renderer value itself and is
//! handed to the collision engine by reference, never kept in globals.

use crate::foundation::math::{Point2, Vec4};
use std::sync::mpsc::{self, Receiver, Sender};

/// Drawing surface the collision engine reports hit triangles to
pub trait Renderer {
    /// Select the draw layer for subsequent shapes
    fn set_layer(&mut self, layer: u32);

    /// Select the RGBA color for subsequent shapes
    fn set_color(&mut self, color: Vec4);

    /// Draw a solid triangle
    fn draw_filled_triangle(&mut self, vertices: [Point2; 3]);

    /// Draw a line segment
    fn draw_line_segment(&mut self, start: Point2, end: Point2);
}

/// Debug shape primitives that can be rendered for visualization
#[derive(Clone, Debug, PartialEq)]
pub enum DebugShape {
    /// Line segment from start to end
    Line {
        start: Point2,
        end: Point2,
        layer: u32,
        color: Vec4,
        duration: f32,
    },

    /// Filled triangle
    Triangle {
        vertices: [Point2; 3],
        layer: u32,
        color: Vec4,
        duration: f32,
    },
}

impl DebugShape {
    /// Get remaining duration
    pub fn duration(&self) -> f32 {
        match self {
            DebugShape::Line { duration, .. } | DebugShape::Triangle { duration, .. } => *duration,
        }
    }

    /// Draw layer of the shape
    pub fn layer(&self) -> u32 {
        match self {
            DebugShape::Line { layer, .. } | DebugShape::Triangle { layer, .. } => *layer,
        }
    }

    /// Decrease duration by delta_time, returns true if expired
    pub fn tick(&mut self, delta_time: f32) -> bool {
        match self {
            DebugShape::Line { duration, .. } | DebugShape::Triangle { duration, .. } => {
                *duration -= delta_time;
                *duration <= 0.0
            }
        }
    }
}

/// Debug drawing system for rendering debug shapes
///
/// Records every draw call as a temporary [`DebugShape`] that expires after
/// `shape_duration` seconds of [`update`](Self::update) time.
pub struct DebugDrawSystem {
    /// Temporary shapes that expire after their duration
    shapes: Vec<DebugShape>,

    /// Current draw layer
    layer: u32,

    /// Current draw color
    color: Vec4,

    /// Lifetime given to newly recorded shapes
    pub shape_duration: f32,

    /// Master enable/disable flag
    pub enabled: bool,
}

impl DebugDrawSystem {
    /// Create a new debug draw system
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            layer: 0,
            color: Vec4::new(1.0, 1.0, 1.0, 1.0),
            shape_duration: 1.0 / 60.0,
            enabled: true,
        }
    }

    /// Set the lifetime of newly recorded shapes
    pub fn with_shape_duration(mut self, duration: f32) -> Self {
        self.shape_duration = duration;
        self
    }

    /// Current draw layer
    pub fn layer(&self) -> u32 {
        self.layer
    }

    /// Current draw color
    pub fn color(&self) -> Vec4 {
        self.color
    }

    /// Update shape lifetimes and remove expired temporary shapes
    pub fn update(&mut self, delta_time: f32) {
        if !self.enabled {
            return;
        }

        self.shapes.retain_mut(|shape| !shape.tick(delta_time));
    }

    /// Get all shapes for rendering, lowest layer first
    pub fn get_shapes(&self) -> Vec<&DebugShape> {
        if !self.enabled {
            return Vec::new();
        }

        let mut shapes: Vec<&DebugShape> = self.shapes.iter().collect();
        shapes.sort_by_key(|shape| shape.layer());
        shapes
    }

    /// Get the number of active shapes
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Clear all shapes
    pub fn clear(&mut self) {
        self.shapes.clear();
    }
}

impl Default for DebugDrawSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for DebugDrawSystem {
    fn set_layer(&mut self, layer: u32) {
        self.layer = layer;
    }

    fn set_color(&mut self, color: Vec4) {
        self.color = color;
    }

    fn draw_filled_triangle(&mut self, vertices: [Point2; 3]) {
        if !self.enabled {
            return;
        }

        self.shapes.push(DebugShape::Triangle {
            vertices,
            layer: self.layer,
            color: self.color,
            duration: self.shape_duration,
        });
    }

    fn draw_line_segment(&mut self, start: Point2, end: Point2) {
        if !self.enabled {
            return;
        }

        self.shapes.push(DebugShape::Line {
            start,
            end,
            layer: self.layer,
            color: self.color,
            duration: self.shape_duration,
        });
    }
}

/// A single recorded renderer call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// `Renderer::set_layer`
    SetLayer(u32),
    /// `Renderer::set_color`
    SetColor(Vec4),
    /// `Renderer::draw_filled_triangle`
    FilledTriangle([Point2; 3]),
    /// `Renderer::draw_line_segment`
    LineSegment(Point2, Point2),
}

impl DrawCommand {
    /// Replay this command on a renderer
    pub fn apply(&self, renderer: &mut dyn Renderer) {
        match *self {
            DrawCommand::SetLayer(layer) => renderer.set_layer(layer),
            DrawCommand::SetColor(color) => renderer.set_color(color),
            DrawCommand::FilledTriangle(vertices) => renderer.draw_filled_triangle(vertices),
            DrawCommand::LineSegment(start, end) => renderer.draw_line_segment(start, end),
        }
    }
}

/// Renderer that forwards draw calls over a channel to a single consumer
///
/// Each producer thread owns a clone of the queue. Commands recorded between
/// two flushes are sent as one batch so layer/color changes from another
/// thread cannot interleave with them. Flush after each `check` call, or let
/// the clone drop at the end of the thread.
#[derive(Clone)]
pub struct DrawQueue {
    sender: Sender<Vec<DrawCommand>>,
    pending: Vec<DrawCommand>,
}

impl DrawQueue {
    /// Create a queue and the receiving end the render thread drains
    pub fn new() -> (Self, Receiver<Vec<DrawCommand>>) {
        let (sender, receiver) = mpsc::channel();
        (Self { sender, pending: Vec::new() }, receiver)
    }

    /// Send the commands recorded so far as one batch
    ///
    /// Returns false when the consumer has hung up; the batch is dropped.
    pub fn flush(&mut self) -> bool {
        if self.pending.is_empty() {
            return true;
        }
        let batch = std::mem::take(&mut self.pending);
        self.sender.send(batch).is_ok()
    }

    /// Replay every batch currently queued into `renderer`
    ///
    /// Returns the number of commands applied.
    pub fn drain_into(receiver: &Receiver<Vec<DrawCommand>>, renderer: &mut dyn Renderer) -> usize {
        let mut applied = 0;
        for batch in receiver.try_iter() {
            for command in &batch {
                command.apply(renderer);
            }
            applied += batch.len();
        }
        applied
    }
}

impl Drop for DrawQueue {
    fn drop(&mut self) {
        if !self.flush() {
            log::warn!("Draw queue consumer gone, dropped pending debug draw commands");
        }
    }
}

impl Renderer for DrawQueue {
    fn set_layer(&mut self, layer: u32) {
        self.pending.push(DrawCommand::SetLayer(layer));
    }

    fn set_color(&mut self, color: Vec4) {
        self.pending.push(DrawCommand::SetColor(color));
    }

    fn draw_filled_triangle(&mut self, vertices: [Point2; 3]) {
        self.pending.push(DrawCommand::FilledTriangle(vertices));
    }

    fn draw_line_segment(&mut self, start: Point2, end: Point2) {
        self.pending.push(DrawCommand::LineSegment(start, end));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> Vec4 {
        Vec4::new(1.0, 0.0, 0.0, 1.0)
    }

    #[test]
    fn test_temporary_shape_expiration() {
        let mut system = DebugDrawSystem::new().with_shape_duration(1.0);

        system.draw_line_segment(Point2::origin(), Point2::new(1.0, 0.0));
        assert_eq!(system.shape_count(), 1);

        // Update for 0.5 seconds
        system.update(0.5);
        assert_eq!(system.shape_count(), 1);

        // Update for another 0.6 seconds (total 1.1 seconds)
        system.update(0.6);
        assert_eq!(system.shape_count(), 0);
    }

    #[test]
    fn test_shapes_capture_current_context() {
        let mut system = DebugDrawSystem::new();
        system.set_layer(3);
        system.set_color(red());
        system.draw_filled_triangle([Point2::origin(), Point2::new(1.0, 0.0), Point2::new(0.0, 1.0)]);
        system.set_layer(1);
        system.draw_line_segment(Point2::origin(), Point2::new(1.0, 1.0));

        let shapes = system.get_shapes();
        assert_eq!(shapes.len(), 2);
        // Sorted by layer
        assert_eq!(shapes[0].layer(), 1);
        assert!(matches!(shapes[1], DebugShape::Triangle { layer: 3, color, .. } if *color == red()));
    }

    #[test]
    fn test_disabled_system_records_nothing() {
        let mut system = DebugDrawSystem::new();
        system.enabled = false;
        system.draw_line_segment(Point2::origin(), Point2::new(1.0, 0.0));
        assert_eq!(system.shape_count(), 0);
        assert!(system.get_shapes().is_empty());
    }

    #[test]
    fn test_draw_queue_replays_batches() {
        let (mut queue, receiver) = DrawQueue::new();
        queue.set_layer(2);
        queue.set_color(red());
        queue.draw_line_segment(Point2::origin(), Point2::new(0.0, 5.0));

        // Nothing is visible before the batch is flushed
        let mut system = DebugDrawSystem::new();
        assert_eq!(DrawQueue::drain_into(&receiver, &mut system), 0);

        assert!(queue.flush());
        assert_eq!(DrawQueue::drain_into(&receiver, &mut system), 3);
        assert_eq!(system.layer(), 2);
        assert_eq!(system.color(), red());
        assert_eq!(system.shape_count(), 1);
    }

    #[test]
    fn test_draw_queue_flushes_on_drop() {
        let (queue, receiver) = DrawQueue::new();
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let mut producer = queue.clone();
                std::thread::spawn(move || {
                    producer.set_layer(i);
                    producer.draw_line_segment(Point2::origin(), Point2::new(i as f32, 0.0));
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        drop(queue);

        let mut system = DebugDrawSystem::new();
        assert_eq!(DrawQueue::drain_into(&receiver, &mut system), 8);
        assert_eq!(system.shape_count(), 4);
    }
}
