//! The occluder circle

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::CIRCLE_MIN_RADIUS;

/// A circle with a strictly positive radius.
///
/// The radius is mutable through [`grow`]/[`shrink`] only, which keep the
/// invariant `radius >= CIRCLE_MIN_RADIUS`.
///
/// [`grow`]: Circle::grow
/// [`shrink`]: Circle::shrink
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    #[serde(deserialize_with = "clamp_radius")]
    radius: f32,
}

/// Keep the minimum-radius invariant across deserialization too
fn clamp_radius<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let radius = f32::deserialize(deserializer)?;
    Ok(radius.max(CIRCLE_MIN_RADIUS))
}

impl Circle {
    /// Creates a circle, clamping the radius to the minimum.
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self {
            center,
            radius: radius.max(CIRCLE_MIN_RADIUS),
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Increase the radius by one unit.
    pub fn grow(&mut self) {
        self.radius += 1.0;
    }

    /// Decrease the radius by one unit, stopping at the minimum.
    pub fn shrink(&mut self) {
        if self.radius > CIRCLE_MIN_RADIUS {
            self.radius -= 1.0;
        }
    }

    /// Check if a point lies inside the circle (mouse hit test).
    pub fn contains_point(&self, point: Vec2) -> bool {
        (point - self.center).length_squared() <= self.radius * self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_clamps_at_minimum() {
        let mut c = Circle::new(Vec2::ZERO, 2.0);
        c.shrink();
        assert_eq!(c.radius(), 1.0);
        c.shrink();
        assert_eq!(c.radius(), 1.0);
        c.grow();
        assert_eq!(c.radius(), 2.0);
    }

    #[test]
    fn test_new_rejects_nonpositive_radius() {
        let c = Circle::new(Vec2::ZERO, -5.0);
        assert_eq!(c.radius(), CIRCLE_MIN_RADIUS);
    }

    #[test]
    fn test_deserialize_clamps_radius() {
        let c: Circle = serde_json::from_str(r#"{"center":[0.0,0.0],"radius":0.0}"#).unwrap();
        assert_eq!(c.radius(), CIRCLE_MIN_RADIUS);

        let c: Circle = serde_json::from_str(r#"{"center":[1.0,2.0],"radius":50.0}"#).unwrap();
        assert_eq!(c.radius(), 50.0);
    }

    #[test]
    fn test_contains_point() {
        let c = Circle::new(Vec2::new(10.0, 10.0), 5.0);
        assert!(c.contains_point(Vec2::new(12.0, 12.0)));
        assert!(c.contains_point(Vec2::new(15.0, 10.0))); // on the rim
        assert!(!c.contains_point(Vec2::new(16.0, 10.0)));
    }
}
