//! Ray demo simulation
//!
//! All demo logic lives here and is pure and deterministic:
//! - One tick per frame, input applied first, geometry recomputed after
//! - No rendering or platform dependencies
//! - Segments are rebuilt from scratch every tick; nothing is cached

pub mod state;
pub mod tick;

pub use state::{LightSource, RayScene};
pub use tick::{FrameInput, tick};
