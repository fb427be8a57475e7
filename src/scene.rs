//! Renderer-agnostic draw command stream
//!
//! The demos emit their whole frame into a [`Scene`]; a backend either walks
//! the commands directly or hands the non-text ones to
//! [`render::tessellate`](crate::render::tessellate).
//!
//! Extending the scene means adding a variant here and a matching generator
//! in `render::shapes`.

use glam::Vec2;

/// One draw command. Coordinates are in window pixels, colors linear RGBA.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Line {
        a: Vec2,
        b: Vec2,
        color: [f32; 4],
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: [f32; 4],
    },
    Ring {
        center: Vec2,
        inner_radius: f32,
        outer_radius: f32,
        color: [f32; 4],
    },
    Rect {
        pos: Vec2,
        size: Vec2,
        color: [f32; 4],
    },
    RectOutline {
        pos: Vec2,
        size: Vec2,
        thickness: f32,
        color: [f32; 4],
    },
    /// Text is passed through untessellated; glyph layout is the backend's job
    Text {
        pos: Vec2,
        text: String,
        size: f32,
        color: [f32; 4],
    },
}

/// Recorded draw stream for one frame.
///
/// `push_*` is O(1); commands are kept in insertion order (painter's
/// algorithm). `clear` keeps allocated capacity for reuse across frames.
#[derive(Debug, Default)]
pub struct Scene {
    cmds: Vec<DrawCmd>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    #[inline]
    pub fn cmds(&self) -> &[DrawCmd] {
        &self.cmds
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.cmds.push(cmd);
    }

    pub fn push_line(&mut self, a: Vec2, b: Vec2, color: [f32; 4]) {
        self.cmds.push(DrawCmd::Line { a, b, color });
    }

    pub fn push_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]) {
        self.cmds.push(DrawCmd::Circle {
            center,
            radius,
            color,
        });
    }

    pub fn push_ring(
        &mut self,
        center: Vec2,
        inner_radius: f32,
        outer_radius: f32,
        color: [f32; 4],
    ) {
        self.cmds.push(DrawCmd::Ring {
            center,
            inner_radius,
            outer_radius,
            color,
        });
    }

    pub fn push_rect(&mut self, pos: Vec2, size: Vec2, color: [f32; 4]) {
        self.cmds.push(DrawCmd::Rect { pos, size, color });
    }

    pub fn push_rect_outline(&mut self, pos: Vec2, size: Vec2, thickness: f32, color: [f32; 4]) {
        self.cmds.push(DrawCmd::RectOutline {
            pos,
            size,
            thickness,
            color,
        });
    }

    pub fn push_text(&mut self, pos: Vec2, text: impl Into<String>, size: f32, color: [f32; 4]) {
        self.cmds.push(DrawCmd::Text {
            pos,
            text: text.into(),
            size,
            color,
        });
    }
}
