//! The sweep (scan) driver
//!
//! Fans ray directions out from the light source across two half-sweeps,
//! solving the quadratic per sample and accumulating light/shadow segment
//! pairs for every hit. Misses are skipped; once a contiguous run of hits
//! ends the half-sweep stops, since the circle can only cover one angular
//! window of the fan.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::circle::Circle;
use super::intersect::{intersect_ray_circle, split_rays};
use super::ray::{Ray, Segment};
use crate::consts::{SWEEP_DIR_X, SWEEP_SAMPLES, SWEEP_STEP, WINDOW_HEIGHT};

/// Sweep parameters. Defaults match the reference fan: 4450 samples per
/// half-sweep, base direction (1000, 0), step 0.228 applied as
/// `dir.y += step; dir.x -= step` (mirrored in y for the second half).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SweepConfig {
    pub samples: usize,
    pub base_dir: Vec2,
    pub step: f32,
    /// Abort a half-sweep once the direction points left and its y component
    /// leaves `0..=abort_y`, i.e. the fan has left the visible wedge.
    pub abort_y: f32,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            samples: SWEEP_SAMPLES,
            base_dir: Vec2::new(SWEEP_DIR_X, 0.0),
            step: SWEEP_STEP,
            abort_y: WINDOW_HEIGHT,
        }
    }
}

/// Segments and hit count produced by one sweep
#[derive(Debug, Clone, Default)]
pub struct SweepResult {
    /// Light/shadow pairs, interleaved in sample order
    pub segments: Vec<Segment>,
    /// Number of samples that hit the circle
    pub hits: usize,
}

/// Run a full sweep of `config.samples` directions per half, origin at
/// `origin`, against `circle`.
pub fn sweep(origin: Vec2, circle: &Circle, config: &SweepConfig) -> SweepResult {
    let mut result = SweepResult {
        segments: Vec::with_capacity(config.samples * 2),
        hits: 0,
    };

    // First half fans downward (+y step), second half mirrors upward. If the
    // first half found the circle strictly inside its fan, the whole covered
    // window was seen and the second half is skipped.
    let mut found_inside_fan = false;
    for y_step in [config.step, -config.step] {
        let mut found = false;
        let mut found_index = 0usize;
        let mut dir = config.base_dir;

        for i in 0..config.samples {
            if dir.x < 0.0 && (dir.y > config.abort_y || dir.y < 0.0) {
                break;
            }

            let ray = Ray::new(origin, dir);
            if let Some((light, shadow)) = split_rays(&ray, intersect_ray_circle(&ray, circle)) {
                if !found {
                    found_index = i;
                }
                found = true;
                result.segments.push(light);
                result.segments.push(shadow);
                result.hits += 1;
            } else if found {
                // Contiguous hit run ended
                if found_index != 0 {
                    found_inside_fan = true;
                }
                break;
            }

            dir.y += y_step;
            dir.x -= config.step;
        }

        if found_inside_fan {
            break;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> SweepConfig {
        SweepConfig {
            samples: 500,
            base_dir: Vec2::new(1000.0, 0.0),
            step: 2.0,
            abort_y: 750.0,
        }
    }

    #[test]
    fn test_sweep_hits_circle_on_axis() {
        let circle = Circle::new(Vec2::new(500.0, 0.0), 100.0);
        let result = sweep(Vec2::ZERO, &circle, &small_config());
        assert!(result.hits > 0);
        // Every hit contributes one light and one shadow segment
        assert_eq!(result.segments.len(), result.hits * 2);
    }

    #[test]
    fn test_sweep_misses_circle_behind_origin() {
        let circle = Circle::new(Vec2::new(-500.0, 0.0), 50.0);
        let result = sweep(Vec2::ZERO, &circle, &small_config());
        assert_eq!(result.hits, 0);
        assert!(result.segments.is_empty());
    }

    #[test]
    fn test_sweep_second_half_covers_circle_above_axis() {
        // Fan origin below-right of the circle: only the -y half can see it
        let circle = Circle::new(Vec2::new(500.0, -300.0), 100.0);
        let result = sweep(Vec2::ZERO, &circle, &small_config());
        assert!(result.hits > 0);
    }

    #[test]
    fn test_sweep_segments_are_classified_pairs() {
        use crate::geom::RayClass;

        let circle = Circle::new(Vec2::new(500.0, 100.0), 80.0);
        let result = sweep(Vec2::ZERO, &circle, &small_config());
        assert!(result.hits > 0);
        for pair in result.segments.chunks(2) {
            assert_eq!(pair[0].class, RayClass::Light);
            assert_eq!(pair[1].class, RayClass::Shadow);
            // Light starts at the fan origin
            assert_eq!(pair[0].a, Vec2::ZERO);
        }
    }

    #[test]
    fn test_sweep_light_ends_on_near_side() {
        let circle = Circle::new(Vec2::new(500.0, 0.0), 100.0);
        let result = sweep(Vec2::ZERO, &circle, &small_config());
        for pair in result.segments.chunks(2) {
            let light_end = pair[0].b;
            let shadow_start = pair[1].a;
            assert!(
                light_end.distance(Vec2::ZERO) <= shadow_start.distance(Vec2::ZERO) + 1e-3
            );
        }
    }
}
