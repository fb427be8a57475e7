//! Ray demo state

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::geom::{Circle, RayClass, Segment, SweepConfig};
use crate::render::colors;
use crate::scene::Scene;
use crate::settings::Settings;

/// Stroke width of the rim drawn around the occluder
const OCCLUDER_RIM_WIDTH: f32 = 2.0;

/// The light source: a visual disc whose center is the fan origin.
///
/// Plain data, not a shape subtype; drawing goes through the scene layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightSource {
    pub center: Vec2,
    pub radius: f32,
}

impl LightSource {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Ray origin for the sweep
    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.center
    }
}

/// Complete ray demo state
#[derive(Debug, Clone)]
pub struct RayScene {
    pub light: LightSource,
    pub circle: Circle,
    pub sweep: SweepConfig,
    /// Light/shadow pairs from the latest tick
    pub segments: Vec<Segment>,
    /// Hits drawn as light rays this frame (0 when hidden)
    pub light_rays: usize,
    /// Hits drawn as shadow rays this frame (0 when hidden)
    pub shadow_rays: usize,
}

impl RayScene {
    /// Light source in the top-left corner, occluder at window center.
    pub fn new() -> Self {
        Self {
            light: LightSource::new(
                Vec2::new(LIGHT_SOURCE_RADIUS, LIGHT_SOURCE_RADIUS),
                LIGHT_SOURCE_RADIUS,
            ),
            circle: Circle::new(
                Vec2::new(WINDOW_WIDTH / 2.0, WINDOW_HEIGHT / 2.0),
                CIRCLE_RADIUS,
            ),
            sweep: SweepConfig::default(),
            segments: Vec::new(),
            light_rays: 0,
            shadow_rays: 0,
        }
    }

    /// Total rays drawn this frame
    #[inline]
    pub fn total_rays(&self) -> usize {
        self.light_rays + self.shadow_rays
    }

    /// Emit the frame: background shapes, then visible segments.
    /// HUD text is layered on top by the caller.
    pub fn emit(&self, settings: &Settings, scene: &mut Scene) {
        scene.push_circle(self.light.center, self.light.radius, colors::LIGHT_SOURCE);
        scene.push_circle(self.circle.center, self.circle.radius(), colors::OCCLUDER);
        scene.push_ring(
            self.circle.center,
            self.circle.radius(),
            self.circle.radius() + OCCLUDER_RIM_WIDTH,
            colors::OCCLUDER_RIM,
        );

        for segment in &self.segments {
            match segment.class {
                RayClass::Light if settings.show_light_rays => {
                    scene.push_line(segment.a, segment.b, colors::LIGHT_RAY);
                }
                RayClass::Shadow if settings.show_shadow_rays => {
                    scene.push_line(segment.a, segment.b, colors::SHADOW_RAY);
                }
                _ => {}
            }
        }
    }
}

impl Default for RayScene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::DrawCmd;

    #[test]
    fn test_new_scene_layout() {
        let scene = RayScene::new();
        assert_eq!(scene.circle.center, Vec2::new(500.0, 375.0));
        assert_eq!(scene.circle.radius(), 100.0);
        assert_eq!(scene.light.origin(), Vec2::new(20.0, 20.0));
        assert!(scene.segments.is_empty());
    }

    #[test]
    fn test_emit_rims_the_occluder() {
        let state = RayScene::new();
        let mut out = Scene::new();
        state.emit(&Settings::default(), &mut out);

        let rim = out
            .cmds()
            .iter()
            .find(|c| matches!(c, DrawCmd::Ring { .. }))
            .unwrap();
        match rim {
            DrawCmd::Ring {
                center,
                inner_radius,
                outer_radius,
                ..
            } => {
                assert_eq!(*center, state.circle.center);
                assert_eq!(*inner_radius, state.circle.radius());
                assert!(*outer_radius > state.circle.radius());
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_emit_respects_visibility_toggles() {
        let mut state = RayScene::new();
        state.segments = vec![
            Segment::light(Vec2::ZERO, Vec2::ONE),
            Segment::shadow(Vec2::ONE, Vec2::new(2.0, 2.0)),
        ];

        let mut settings = Settings::default();
        settings.show_shadow_rays = false;

        let mut out = Scene::new();
        state.emit(&settings, &mut out);

        let lines: Vec<_> = out
            .cmds()
            .iter()
            .filter(|c| matches!(c, DrawCmd::Line { .. }))
            .collect();
        assert_eq!(lines.len(), 1);
    }
}
