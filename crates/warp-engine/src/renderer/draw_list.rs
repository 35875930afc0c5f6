use glam::Vec2;

use super::surface::{BlendMode, Color, Surface};
use super::viewport::Viewport;

/// One stroked segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineInstance {
    pub from: Vec2,
    pub to: Vec2,
    pub width: f32,
    pub color: Color,
}

/// A recorded drawing operation, in submission order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawOp {
    Blend(BlendMode),
    Fade(Color),
    Clear(Color),
    Line(LineInstance),
}

/// Recording surface. Captures every call so frames can be inspected.
pub struct DrawList {
    size: Vec2,
    ops: Vec<DrawOp>,
}

impl DrawList {
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_capacity(width, height, 256)
    }

    /// Pre-size for roughly one frame of `capacity` lines.
    pub fn with_capacity(width: f32, height: f32, capacity: usize) -> Self {
        Self {
            size: Vec2::new(width, height),
            ops: Vec::with_capacity(capacity + 2),
        }
    }

    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn lines(&self) -> impl Iterator<Item = &LineInstance> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn line_count(&self) -> usize {
        self.lines().count()
    }
}

impl Surface for DrawList {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn resize(&mut self, viewport: Viewport) {
        self.size = Vec2::new(viewport.width, viewport.height);
        self.ops.clear();
    }

    fn set_blend(&mut self, mode: BlendMode) {
        self.ops.push(DrawOp::Blend(mode));
    }

    fn fade(&mut self, color: Color) {
        self.ops.push(DrawOp::Fade(color));
    }

    fn clear(&mut self, color: Color) {
        self.ops.push(DrawOp::Clear(color));
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.ops.push(DrawOp::Line(LineInstance { from, to, width, color }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order() {
        let mut list = DrawList::new(100.0, 50.0);
        list.set_blend(BlendMode::Multiply);
        list.fade(Color::BLACK.with_alpha(0.2));
        list.stroke_line(Vec2::ZERO, Vec2::ONE, 2.0, Color::WHITE);

        assert_eq!(list.ops().len(), 3);
        assert_eq!(list.ops()[0], DrawOp::Blend(BlendMode::Multiply));
        assert!(matches!(list.ops()[1], DrawOp::Fade(c) if (c.a - 0.2).abs() < 1e-6));
        assert_eq!(list.line_count(), 1);
        assert_eq!(list.size(), Vec2::new(100.0, 50.0));
    }

    #[test]
    fn clear_ops_keeps_size() {
        let mut list = DrawList::new(10.0, 10.0);
        list.clear(Color::BLACK);
        list.stroke_line(Vec2::ZERO, Vec2::X, 1.0, Color::WHITE);
        assert_eq!(list.ops().len(), 2);

        list.clear_ops();
        assert!(list.ops().is_empty());
        assert_eq!(list.size(), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn resize_drops_recorded_ops() {
        let mut list = DrawList::new(10.0, 10.0);
        list.clear(Color::BLACK);
        list.resize(Viewport::new(40.0, 30.0));
        assert_eq!(list.size(), Vec2::new(40.0, 30.0));
        assert!(list.ops().is_empty());
    }
}
