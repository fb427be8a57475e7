//! View settings
//!
//! The per-frame configuration the render step reads: ray visibility
//! toggles, HUD text color, and the frame-rate cap. All of it is explicit
//! state threaded by reference, never globals.

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_FPS_CAP;

/// Frame-rate cap. Remembers its numeric limit while disabled so toggling
/// off and back on restores the previous value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FpsCap {
    limit: u32,
    enabled: bool,
}

impl Default for FpsCap {
    fn default() -> Self {
        Self {
            limit: DEFAULT_FPS_CAP,
            enabled: true,
        }
    }
}

impl FpsCap {
    pub fn new(limit: u32) -> Self {
        Self {
            limit: limit.max(1),
            enabled: true,
        }
    }

    /// Active limit, or `None` when uncapped
    #[inline]
    pub fn current(&self) -> Option<u32> {
        self.enabled.then_some(self.limit)
    }

    /// Raise the limit by one (enables the cap if it was off)
    pub fn raise(&mut self) {
        self.limit = self.limit.saturating_add(1);
        self.enabled = true;
    }

    /// Lower the limit by one, stopping at 1
    pub fn lower(&mut self) {
        self.limit = self.limit.saturating_sub(1).max(1);
        self.enabled = true;
    }

    /// Flip between capped and uncapped
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    /// HUD label: the limit as a number, or "Off"
    pub fn label(&self) -> String {
        if self.enabled {
            self.limit.to_string()
        } else {
            "Off".to_string()
        }
    }
}

/// View settings for the ray demo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Draw light segments (origin to near hit)
    pub show_light_rays: bool,
    /// Draw shadow segments (far hit, extended)
    pub show_shadow_rays: bool,
    /// HUD text color: white when true, black when false
    pub white_text: bool,
    /// Frame-rate cap
    pub fps_cap: FpsCap,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_light_rays: true,
            show_shadow_rays: true,
            white_text: true,
            fps_cap: FpsCap::default(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON (for embedding hosts); falls back to defaults
    /// on malformed input with a logged warning.
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Malformed settings JSON, using defaults: {}", e);
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> String {
        // Serialization of a plain struct with no maps cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Native stub: nothing is persisted, start from defaults
    pub fn load() -> Self {
        Self::default()
    }

    /// Native stub: nothing is persisted
    pub fn save(&self) {}
}
