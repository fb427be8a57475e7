//! Rays and classified ray segments
//!
//! A ray is an origin plus an unnormalized direction, parameterized by a
//! scalar `t`. The visualizer never draws rays directly; it draws [`Segment`]s
//! cut out of them by the intersection solver.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A directed line: origin plus direction, extended by scalar `t`.
///
/// The direction is not required to be normalized. A zero-length direction is
/// tolerated by constructors but yields [`Intersection::Miss`] from the
/// solver rather than a well-formed quadratic.
///
/// [`Intersection::Miss`]: super::Intersection::Miss
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    pub origin: Vec2,
    pub dir: Vec2,
}

impl Ray {
    pub fn new(origin: Vec2, dir: Vec2) -> Self {
        Self { origin, dir }
    }

    /// Point along the ray at parameter `t`. Negative `t` lies behind the
    /// origin.
    #[inline]
    pub fn point_at(&self, t: f32) -> Vec2 {
        self.origin + self.dir * t
    }
}

/// Draw classification for a computed segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RayClass {
    /// Origin to nearest hit
    Light,
    /// Far hit extended away from the light
    Shadow,
    /// Not drawable (no intersection this sample)
    #[default]
    None,
}

/// A classified line segment ready for drawing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub a: Vec2,
    pub b: Vec2,
    pub class: RayClass,
}

impl Segment {
    pub fn light(a: Vec2, b: Vec2) -> Self {
        Self {
            a,
            b,
            class: RayClass::Light,
        }
    }

    pub fn shadow(a: Vec2, b: Vec2) -> Self {
        Self {
            a,
            b,
            class: RayClass::Shadow,
        }
    }
}
