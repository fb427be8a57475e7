//! Vertex type for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Colors for demo elements (linear RGBA)
pub mod colors {
    /// Light segments: pale yellow (255, 255, 102)
    pub const LIGHT_RAY: [f32; 4] = [1.0, 1.0, 0.4, 1.0];
    /// Shadow segments: dark gray (70, 70, 70)
    pub const SHADOW_RAY: [f32; 4] = [0.275, 0.275, 0.275, 1.0];
    /// Window clear color (105, 105, 105)
    pub const BACKGROUND: [f32; 4] = [0.412, 0.412, 0.412, 1.0];
    pub const OCCLUDER: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    /// Occluder rim stroke, same gray as shadow segments
    pub const OCCLUDER_RIM: [f32; 4] = [0.275, 0.275, 0.275, 1.0];
    pub const LIGHT_SOURCE: [f32; 4] = [1.0, 1.0, 0.4, 1.0];

    pub const TEXT_WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const TEXT_BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

    /// Sudoku cell fills
    pub const CELL_CLEAR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    /// Selected cell: orange (255, 131, 0)
    pub const CELL_SELECTED: [f32; 4] = [1.0, 0.514, 0.0, 1.0];
    pub const CELL_INVALID: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const CELL_VALID: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    pub const GRID_LINE: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
}
