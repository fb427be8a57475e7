//! On-screen overlay text
//!
//! Builds the per-frame stack of status lines (FPS, ray counts, radius,
//! toggle states) the reference demo shows in the top-right corner. Only the
//! strings and anchor positions are computed here; glyph metrics belong to
//! the backend, which right-aligns each line at its anchor.

use glam::Vec2;

use crate::render::colors;
use crate::scene::Scene;
use crate::settings::Settings;
use crate::sim::RayScene;

/// Distance of the text anchor from the right window edge
const RIGHT_MARGIN: f32 = 20.0;
/// Vertical stride between lines
const LINE_STRIDE: f32 = 30.0;
/// HUD character size
const TEXT_SIZE: f32 = 20.0;

/// One HUD line: static label plus formatted value
#[derive(Debug, Clone, PartialEq)]
pub struct HudLine {
    pub label: &'static str,
    pub value: String,
}

impl HudLine {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }

    pub fn text(&self) -> String {
        format!("{}{}", self.label, self.value)
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag { "On" } else { "Off" }
}

/// Build the HUD lines for one frame, top to bottom.
pub fn lines(scene: &RayScene, settings: &Settings, fps: u32) -> Vec<HudLine> {
    vec![
        HudLine::new("FPS: ", fps.to_string()),
        HudLine::new("Rays: ", scene.total_rays().to_string()),
        HudLine::new("Light rays: ", scene.light_rays.to_string()),
        HudLine::new("Shadow rays: ", scene.shadow_rays.to_string()),
        HudLine::new(
            "Radius(Up,Down,->,<-): ",
            (scene.circle.radius() as u32).to_string(),
        ),
        HudLine::new("Light(a): ", on_off(settings.show_light_rays)),
        HudLine::new("Shadow(d): ", on_off(settings.show_shadow_rays)),
        HudLine::new(
            "Text color(e): ",
            if settings.white_text { "White" } else { "Black" },
        ),
        HudLine::new("FPS limit(w/s/f): ", settings.fps_cap.label()),
    ]
}

/// Emit the HUD into the scene. Anchors run down the right edge; the text
/// color follows the white/black toggle.
pub fn emit(
    scene_state: &RayScene,
    settings: &Settings,
    fps: u32,
    window_width: f32,
    scene: &mut Scene,
) {
    let color = if settings.white_text {
        colors::TEXT_WHITE
    } else {
        colors::TEXT_BLACK
    };

    for (i, line) in lines(scene_state, settings, fps).into_iter().enumerate() {
        let anchor = Vec2::new(window_width - RIGHT_MARGIN, i as f32 * LINE_STRIDE);
        scene.push_text(anchor, line.text(), TEXT_SIZE, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::DrawCmd;

    #[test]
    fn test_line_contents() {
        let mut state = RayScene::new();
        state.light_rays = 120;
        state.shadow_rays = 80;
        let settings = Settings::default();

        let lines = lines(&state, &settings, 59);
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0].text(), "FPS: 59");
        assert_eq!(lines[1].text(), "Rays: 200");
        assert_eq!(lines[2].text(), "Light rays: 120");
        assert_eq!(lines[3].text(), "Shadow rays: 80");
        assert_eq!(lines[4].text(), "Radius(Up,Down,->,<-): 100");
        assert_eq!(lines[5].text(), "Light(a): On");
        assert_eq!(lines[8].text(), "FPS limit(w/s/f): 60");
    }

    #[test]
    fn test_toggle_labels() {
        let state = RayScene::new();
        let mut settings = Settings::default();
        settings.show_shadow_rays = false;
        settings.white_text = false;
        settings.fps_cap.toggle();

        let lines = lines(&state, &settings, 0);
        assert_eq!(lines[6].text(), "Shadow(d): Off");
        assert_eq!(lines[7].text(), "Text color(e): Black");
        assert_eq!(lines[8].text(), "FPS limit(w/s/f): Off");
    }

    #[test]
    fn test_emit_stacks_lines_down_right_edge() {
        let state = RayScene::new();
        let settings = Settings::default();
        let mut scene = Scene::new();
        emit(&state, &settings, 60, 1000.0, &mut scene);

        assert_eq!(scene.cmds().len(), 9);
        for (i, cmd) in scene.cmds().iter().enumerate() {
            match cmd {
                DrawCmd::Text { pos, .. } => {
                    assert_eq!(pos.x, 980.0);
                    assert_eq!(pos.y, i as f32 * 30.0);
                }
                other => panic!("expected text, got {:?}", other),
            }
        }
    }
}
