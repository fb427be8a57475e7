//! Ray/circle geometry
//!
//! Pure math, no platform or rendering dependencies. Everything here is
//! recomputed from scratch each frame by the sim layer.

pub mod circle;
pub mod intersect;
pub mod ray;
pub mod sweep;

pub use circle::Circle;
pub use intersect::{Intersection, farther_hit, intersect_ray_circle, nearer_hit, split_rays};
pub use ray::{Ray, RayClass, Segment};
pub use sweep::{SweepConfig, SweepResult, sweep};
