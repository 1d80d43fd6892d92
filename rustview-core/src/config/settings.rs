//! Persisted window settings

use serde::{Deserialize, Serialize};

use super::keybindings::KeybindingSettings;
use crate::window::{NORMAL_ZOOM_LEVEL, clamp_zoom_level};

/// Settings applied to a viewer window at construction.
///
/// Serialized as `settings.toml`; missing fields fall back to defaults so
/// files written by older versions keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    /// Initial zoom level in percent.
    pub zoom_level: i32,
    /// Start in fullscreen mode.
    pub fullscreen: bool,
    /// Start in kiosk mode.
    pub kiosk: bool,
    /// Keybinding overrides.
    pub keybindings: KeybindingSettings,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            zoom_level: NORMAL_ZOOM_LEVEL,
            fullscreen: false,
            kiosk: false,
            keybindings: KeybindingSettings::default(),
        }
    }
}

impl WindowSettings {
    /// Returns a copy with the zoom level clamped into the accepted range.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        self.zoom_level = clamp_zoom_level(self.zoom_level);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_windowed_at_normal_zoom() {
        let settings = WindowSettings::default();
        assert_eq!(settings.zoom_level, NORMAL_ZOOM_LEVEL);
        assert!(!settings.fullscreen);
        assert!(!settings.kiosk);
    }

    #[test]
    fn sanitize_clamps_zoom() {
        let settings = WindowSettings {
            zoom_level: 100_000,
            ..WindowSettings::default()
        };
        assert_eq!(settings.sanitized().zoom_level, 400);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let settings: WindowSettings = toml::from_str("zoom_level = 150").expect("parse");
        assert_eq!(settings.zoom_level, 150);
        assert!(!settings.kiosk);
    }
}
