//! Ray/circle intersection solver
//!
//! Solves `a*t^2 + b*t + c = 0` with `a = D.D`, `b = 2(O-C).D`,
//! `c = (O-C).(O-C) - r^2`; the discriminant sign gives the hit count.
//! The near/far selector compares squared distances from the ray origin,
//! not raw `t` values, matching the reference visualizer.

use glam::Vec2;

use super::circle::Circle;
use super::ray::{Ray, Segment};
use crate::consts::SHADOW_EXTENT_SCALE;
use crate::distance_squared;

/// Directions shorter than this produce a degenerate quadratic and are
/// reported as a miss instead of dividing by zero.
const MIN_DIR_LENGTH_SQ: f32 = 1e-12;

/// Outcome of intersecting one ray with one circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intersection {
    /// Discriminant < 0, or degenerate direction
    Miss,
    /// Discriminant == 0: single tangent point
    Tangent { t: f32 },
    /// Discriminant > 0: `t1 = (-b + sqrt(disc)) / 2a`, `t2` with the minus
    Pair { t1: f32, t2: f32 },
}

impl Intersection {
    /// Whether the ray touched the circle at all
    #[inline]
    pub fn is_hit(&self) -> bool {
        !matches!(self, Intersection::Miss)
    }
}

/// Solve the ray/circle quadratic.
pub fn intersect_ray_circle(ray: &Ray, circle: &Circle) -> Intersection {
    let oc = ray.origin - circle.center;

    let a = ray.dir.dot(ray.dir);
    if a < MIN_DIR_LENGTH_SQ {
        // Zero-length direction: the quadratic degenerates
        return Intersection::Miss;
    }

    let b = 2.0 * oc.dot(ray.dir);
    let c = oc.dot(oc) - circle.radius() * circle.radius();

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return Intersection::Miss;
    }

    let denominator = 2.0 * a;
    if discriminant > 0.0 {
        let root = discriminant.sqrt();
        Intersection::Pair {
            t1: (-b + root) / denominator,
            t2: (-b - root) / denominator,
        }
    } else {
        Intersection::Tangent {
            t: -b / denominator,
        }
    }
}

/// Of two hit parameters, return the one whose point lies closer to the ray
/// origin. Exact ties go to `t2`, the branch the reference comparison lands in.
pub fn nearer_hit(ray: &Ray, t1: f32, t2: f32) -> f32 {
    let d1 = distance_squared(ray.point_at(t1), ray.origin);
    let d2 = distance_squared(ray.point_at(t2), ray.origin);
    if d1 < d2 { t1 } else { t2 }
}

/// Of two hit parameters, return the one whose point lies farther from the
/// ray origin. Exact ties go to `t1`.
pub fn farther_hit(ray: &Ray, t1: f32, t2: f32) -> f32 {
    let d1 = distance_squared(ray.point_at(t1), ray.origin);
    let d2 = distance_squared(ray.point_at(t2), ray.origin);
    if d1 < d2 { t2 } else { t1 }
}

/// Split an intersection into a light segment (origin to near hit) and a
/// shadow segment (far hit, extended off-screen along the ray).
///
/// Returns `None` on a miss. In the tangent case light and shadow share the
/// single hit point.
pub fn split_rays(ray: &Ray, hit: Intersection) -> Option<(Segment, Segment)> {
    match hit {
        Intersection::Miss => None,
        Intersection::Tangent { t } => {
            let point = ray.point_at(t);
            let shadow_end = point + ray.dir * (t * SHADOW_EXTENT_SCALE);
            Some((
                Segment::light(ray.origin, point),
                Segment::shadow(point, shadow_end),
            ))
        }
        Intersection::Pair { t1, t2 } => {
            let t_near = nearer_hit(ray, t1, t2);
            let t_far = farther_hit(ray, t1, t2);
            let near = ray.point_at(t_near);
            let far = ray.point_at(t_far);
            let shadow_end = far + ray.dir * (t_far * SHADOW_EXTENT_SCALE);
            Some((
                Segment::light(ray.origin, near),
                Segment::shadow(far, shadow_end),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn head_on(d: f32, r: f32) -> (Ray, Circle) {
        // Origin at distance d left of a circle of radius r, aimed at center
        let ray = Ray::new(Vec2::ZERO, Vec2::new(1.0, 0.0));
        let circle = Circle::new(Vec2::new(d, 0.0), r);
        (ray, circle)
    }

    #[test]
    fn test_head_on_hits_at_d_minus_r_and_d_plus_r() {
        let (ray, circle) = head_on(300.0, 100.0);
        match intersect_ray_circle(&ray, &circle) {
            Intersection::Pair { t1, t2 } => {
                let near = nearer_hit(&ray, t1, t2);
                let far = farther_hit(&ray, t1, t2);
                assert!((near - 200.0).abs() < 1e-3);
                assert!((far - 400.0).abs() < 1e-3);
            }
            other => panic!("expected two hits, got {:?}", other),
        }
    }

    #[test]
    fn test_tangent_single_hit() {
        // Ray along x axis, circle center r units above it
        let ray = Ray::new(Vec2::ZERO, Vec2::new(1.0, 0.0));
        let circle = Circle::new(Vec2::new(50.0, 100.0), 100.0);
        match intersect_ray_circle(&ray, &circle) {
            Intersection::Tangent { t } => assert!((t - 50.0).abs() < 1e-2),
            other => panic!("expected tangent, got {:?}", other),
        }
    }

    #[test]
    fn test_miss_when_offset_exceeds_radius() {
        let ray = Ray::new(Vec2::ZERO, Vec2::new(1.0, 0.0));
        let circle = Circle::new(Vec2::new(50.0, 101.0), 100.0);
        assert_eq!(intersect_ray_circle(&ray, &circle), Intersection::Miss);
    }

    #[test]
    fn test_degenerate_direction_is_miss() {
        let ray = Ray::new(Vec2::ZERO, Vec2::ZERO);
        let circle = Circle::new(Vec2::ZERO, 10.0);
        assert_eq!(intersect_ray_circle(&ray, &circle), Intersection::Miss);
    }

    #[test]
    fn test_origin_inside_circle_has_two_roots() {
        let ray = Ray::new(Vec2::ZERO, Vec2::new(0.0, 1.0));
        let circle = Circle::new(Vec2::ZERO, 10.0);
        match intersect_ray_circle(&ray, &circle) {
            Intersection::Pair { t1, t2 } => {
                // One hit ahead, one behind the origin
                assert!((t1 - 10.0).abs() < 1e-3);
                assert!((t2 + 10.0).abs() < 1e-3);
            }
            other => panic!("expected two hits, got {:?}", other),
        }
    }

    #[test]
    fn test_selector_on_unit_ray() {
        let ray = Ray::new(Vec2::ZERO, Vec2::new(1.0, 0.0));
        assert_eq!(nearer_hit(&ray, 2.0, 5.0), 2.0);
        assert_eq!(farther_hit(&ray, 2.0, 5.0), 5.0);
        // Order of arguments must not matter
        assert_eq!(nearer_hit(&ray, 5.0, 2.0), 2.0);
        assert_eq!(farther_hit(&ray, 5.0, 2.0), 5.0);
    }

    #[test]
    fn test_selector_tie_goes_to_t2() {
        let ray = Ray::new(Vec2::ZERO, Vec2::new(1.0, 0.0));
        assert_eq!(nearer_hit(&ray, 3.0, 3.0), 3.0);
        // Opposite-sign parameters at equal distance: t2 wins the near slot
        assert_eq!(nearer_hit(&ray, -4.0, 4.0), 4.0);
        assert_eq!(farther_hit(&ray, -4.0, 4.0), -4.0);
    }

    #[test]
    fn test_split_rays_light_and_shadow() {
        let (ray, circle) = head_on(300.0, 100.0);
        let hit = intersect_ray_circle(&ray, &circle);
        let (light, shadow) = split_rays(&ray, hit).unwrap();

        assert_eq!(light.a, ray.origin);
        assert!((light.b.x - 200.0).abs() < 1e-3);
        assert!((shadow.a.x - 400.0).abs() < 1e-3);
        // Shadow reaches far past the circle
        assert!(shadow.b.x > 100_000.0);
    }

    #[test]
    fn test_split_rays_miss_is_none() {
        let ray = Ray::new(Vec2::ZERO, Vec2::new(1.0, 0.0));
        assert!(split_rays(&ray, Intersection::Miss).is_none());
    }

    proptest! {
        #[test]
        fn prop_head_on_roots(d in 10.0f32..5000.0, r in 1.0f32..1000.0) {
            prop_assume!(d > r + 1.0);
            let (ray, circle) = head_on(d, r);
            let hit = intersect_ray_circle(&ray, &circle);
            if let Intersection::Pair { t1, t2 } = hit {
                let near = nearer_hit(&ray, t1, t2);
                let far = farther_hit(&ray, t1, t2);
                let tol = d.max(r) * 1e-4;
                prop_assert!((near - (d - r)).abs() < tol);
                prop_assert!((far - (d + r)).abs() < tol);
            } else {
                prop_assert!(false, "head-on ray must hit twice, got {:?}", hit);
            }
        }

        #[test]
        fn prop_hit_points_lie_on_circle(
            ox in -500.0f32..500.0, oy in -500.0f32..500.0,
            dx in -10.0f32..10.0, dy in -10.0f32..10.0,
            r in 1.0f32..300.0,
        ) {
            prop_assume!(dx * dx + dy * dy > 1e-6);
            let ray = Ray::new(Vec2::new(ox, oy), Vec2::new(dx, dy));
            let circle = Circle::new(Vec2::ZERO, r);
            if let Intersection::Pair { t1, t2 } = intersect_ray_circle(&ray, &circle) {
                // Skip near-tangent grazes, where root error is amplified
                let chord = (ray.point_at(t1) - ray.point_at(t2)).length();
                prop_assume!(chord > r * 0.05);
                for t in [t1, t2] {
                    let p = ray.point_at(t);
                    let err = (p.length() - r).abs();
                    prop_assert!(err < r.max(1.0) * 0.05, "point off circle by {}", err);
                }
            }
        }
    }
}
