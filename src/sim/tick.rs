//! Per-frame demo tick
//!
//! Applies one frame's worth of input commands to the scene and settings,
//! then recomputes every segment from scratch through the sweep driver.

use glam::Vec2;

use super::state::RayScene;
use crate::geom::sweep;
use crate::settings::Settings;

/// Input commands for a single frame.
///
/// The host maps raw keyboard/mouse events onto these; the sim never sees
/// key codes. All fields are one-shot and default to "no change".
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Reposition the occluder circle center (left click drag)
    pub move_circle: Option<Vec2>,
    /// Reposition the light source center (right click drag)
    pub move_light: Option<Vec2>,
    /// Grow the circle radius by one
    pub grow_radius: bool,
    /// Shrink the circle radius by one (floors at the minimum)
    pub shrink_radius: bool,
    /// Toggle light ray visibility
    pub toggle_light: bool,
    /// Toggle shadow ray visibility
    pub toggle_shadow: bool,
    /// Toggle HUD text white/black
    pub toggle_text_color: bool,
    /// Raise the frame-rate cap by one
    pub raise_fps_cap: bool,
    /// Lower the frame-rate cap by one
    pub lower_fps_cap: bool,
    /// Toggle the cap between limited and uncapped
    pub toggle_fps_cap: bool,
}

/// Advance the ray demo by one frame.
pub fn tick(scene: &mut RayScene, settings: &mut Settings, input: &FrameInput) {
    if input.toggle_light {
        settings.show_light_rays = !settings.show_light_rays;
        log::debug!("light rays: {}", settings.show_light_rays);
    }
    if input.toggle_shadow {
        settings.show_shadow_rays = !settings.show_shadow_rays;
        log::debug!("shadow rays: {}", settings.show_shadow_rays);
    }
    if input.toggle_text_color {
        settings.white_text = !settings.white_text;
    }
    if input.raise_fps_cap {
        settings.fps_cap.raise();
    }
    if input.lower_fps_cap {
        settings.fps_cap.lower();
    }
    if input.toggle_fps_cap {
        settings.fps_cap.toggle();
        log::debug!("fps cap: {}", settings.fps_cap.label());
    }

    if let Some(pos) = input.move_circle {
        scene.circle.center = pos;
    }
    if let Some(pos) = input.move_light {
        scene.light.center = pos;
    }
    if input.grow_radius {
        scene.circle.grow();
    }
    if input.shrink_radius {
        scene.circle.shrink();
    }

    // Full recompute every frame, no dirty tracking
    if settings.show_light_rays || settings.show_shadow_rays {
        let result = sweep(scene.light.origin(), &scene.circle, &scene.sweep);
        scene.light_rays = if settings.show_light_rays {
            result.hits
        } else {
            0
        };
        scene.shadow_rays = if settings.show_shadow_rays {
            result.hits
        } else {
            0
        };
        scene.segments = result.segments;
    } else {
        scene.segments.clear();
        scene.light_rays = 0;
        scene.shadow_rays = 0;
    }
}
