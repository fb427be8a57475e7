//! rayplay - interactive 2D ray/circle demos
//!
//! Core modules:
//! - `geom`: Ray/circle intersection math and the sweep driver
//! - `sim`: Per-frame demo state and tick
//! - `sudoku`: Sudoku board state and validator
//! - `scene`: Renderer-agnostic draw command list
//! - `render`: Tessellation of scene commands into vertex buffers
//! - `hud`: On-screen overlay text model
//!
//! Windowing, event polling, and font rasterization are deliberately absent:
//! a hosting backend feeds [`sim::FrameInput`] commands in and presents the
//! [`scene::Scene`] (or the tessellated vertices) out.

pub mod geom;
pub mod hud;
pub mod render;
pub mod scene;
pub mod settings;
pub mod sim;
pub mod sudoku;
pub mod time;

pub use settings::{FpsCap, Settings};
pub use sim::{FrameInput, RayScene};
pub use sudoku::Board;

use glam::Vec2;

/// Demo configuration constants
pub mod consts {
    /// Default window size the demos lay themselves out for
    pub const WINDOW_WIDTH: f32 = 1000.0;
    pub const WINDOW_HEIGHT: f32 = 750.0;

    /// Shadow segments extend past the far hit by `t_far * SHADOW_EXTENT_SCALE`
    /// so they always reach well off-screen
    pub const SHADOW_EXTENT_SCALE: f32 = 10_000.0;

    /// Samples per half-sweep of the light fan
    pub const SWEEP_SAMPLES: usize = 4450;
    /// Base sweep direction (unnormalized, pointing right)
    pub const SWEEP_DIR_X: f32 = 1000.0;
    /// Per-sample direction step applied as `dir.y += STEP; dir.x -= STEP`
    pub const SWEEP_STEP: f32 = 0.228;

    /// Occluder circle defaults
    pub const CIRCLE_RADIUS: f32 = 100.0;
    pub const CIRCLE_MIN_RADIUS: f32 = 1.0;

    /// Light source disc radius (visual only, rays originate at its center)
    pub const LIGHT_SOURCE_RADIUS: f32 = 20.0;

    /// Default frame-rate cap
    pub const DEFAULT_FPS_CAP: u32 = 60;

    /// Sudoku board layout: one 3x3 field spans FIELD_SIZE, one cell a third of it
    pub const FIELD_SIZE: f32 = 300.0;
    pub const CELL_SIZE: f32 = FIELD_SIZE / 3.0;
    /// Every row, column, and field of a solved board sums to this
    pub const BOARD_LINE_SUM: u32 = 45;
}

/// Squared distance between two points
#[inline]
pub fn distance_squared(a: Vec2, b: Vec2) -> f32 {
    (a - b).length_squared()
}
