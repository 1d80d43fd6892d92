//! Custom keybinding configuration
//!
//! Provides [`KeybindingSettings`] for user-customizable shortcuts and
//! [`KeybindingDef`] for the default binding registry. Accelerators use
//! the conventional angle-bracket notation (e.g. `"<Control><Shift>s"`);
//! [`accel_label`] renders them for display, which is how the
//! release-cursor binding ends up in the window title's grab hint.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Action name of the binding that releases a grabbed pointer.
pub const RELEASE_CURSOR_ACTION: &str = "win.release-cursor";

/// Custom keybinding overrides stored in user settings.
///
/// Each entry maps an action name (e.g. `"win.zoom-in"`) to an accelerator
/// string. Actions not present in `overrides` use their built-in defaults;
/// an empty override unbinds the action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeybindingSettings {
    /// Action name → accelerator string mapping.
    ///
    /// Only overridden bindings are stored; defaults are implicit.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub overrides: HashMap<String, String>,
}

/// A single keybinding definition with its default accelerator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeybindingDef {
    /// Action name (e.g. `"win.screenshot"`)
    pub action: String,
    /// Default accelerator
    pub default_accel: String,
    /// Human-readable label
    pub label: String,
}

impl KeybindingDef {
    /// Creates a new keybinding definition.
    #[must_use]
    pub fn new(
        action: impl Into<String>,
        default_accel: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            action: action.into(),
            default_accel: default_accel.into(),
            label: label.into(),
        }
    }
}

impl KeybindingSettings {
    /// Returns the accelerator bound to an action.
    ///
    /// An override wins over the registry default; an empty override means
    /// the action is unbound.
    #[must_use]
    pub fn accel_for(&self, action: &str) -> Option<String> {
        if let Some(accel) = self.overrides.get(action) {
            return (!accel.is_empty()).then(|| accel.clone());
        }
        default_keybindings()
            .into_iter()
            .find(|def| def.action == action)
            .map(|def| def.default_accel)
    }

    /// Display label of the release-cursor binding, if one is bound.
    #[must_use]
    pub fn release_cursor_label(&self) -> Option<String> {
        self.accel_for(RELEASE_CURSOR_ACTION)
            .map(|accel| accel_label(&accel))
    }

    /// Returns `true` if the user has overridden any keybindings.
    #[must_use]
    pub fn has_overrides(&self) -> bool {
        !self.overrides.is_empty()
    }

    /// Resets a single action to its default binding.
    pub fn reset(&mut self, action: &str) {
        self.overrides.remove(action);
    }
}

/// Returns the complete list of default keybinding definitions.
///
/// This is the single source of truth for the window's shortcuts.
#[must_use]
pub fn default_keybindings() -> Vec<KeybindingDef> {
    vec![
        KeybindingDef::new(RELEASE_CURSOR_ACTION, "<Control><Alt>", "Release Cursor"),
        KeybindingDef::new("win.toggle-fullscreen", "F11", "Toggle Fullscreen"),
        KeybindingDef::new("win.zoom-in", "<Control>plus", "Zoom In"),
        KeybindingDef::new("win.zoom-out", "<Control>minus", "Zoom Out"),
        KeybindingDef::new("win.zoom-reset", "<Control>0", "Reset Zoom"),
        KeybindingDef::new("win.screenshot", "<Control><Shift>s", "Save Screenshot"),
        KeybindingDef::new("win.close-window", "<Control>w", "Close Window"),
    ]
}

/// Splits an accelerator into its modifier tokens and optional key.
fn split_accel(accel: &str) -> Option<(Vec<&str>, Option<&str>)> {
    let mut rest = accel.trim();
    let mut modifiers = Vec::new();
    while let Some(stripped) = rest.strip_prefix('<') {
        let end = stripped.find('>')?;
        modifiers.push(&stripped[..end]);
        rest = &stripped[end + 1..];
    }
    if rest.contains('<') || rest.contains('>') {
        return None;
    }
    let key = (!rest.is_empty()).then_some(rest);
    Some((modifiers, key))
}

/// Validates an accelerator string.
///
/// A valid accelerator is a sequence of known `<Modifier>` tokens followed
/// by an optional key name; at least one of the two must be present.
/// Modifier-only chords (e.g. `"<Control><Alt>"`) are valid — that is the
/// shape of a release-cursor binding.
#[must_use]
pub fn is_valid_accelerator(accel: &str) -> bool {
    let Some((modifiers, key)) = split_accel(accel) else {
        return false;
    };
    if modifiers.is_empty() && key.is_none() {
        return false;
    }
    modifiers.iter().all(|m| {
        matches!(
            *m,
            "Control" | "Primary" | "Shift" | "Alt" | "Meta" | "Super" | "Hyper"
        )
    })
}

/// Renders an accelerator for display (e.g. `"<Control><Alt>t"` →
/// `"Ctrl+Alt+T"`).
///
/// Unknown input is returned unchanged.
#[must_use]
pub fn accel_label(accel: &str) -> String {
    let Some((modifiers, key)) = split_accel(accel) else {
        return accel.to_string();
    };
    let mut parts: Vec<String> = modifiers
        .iter()
        .map(|m| match *m {
            "Control" | "Primary" => "Ctrl".to_string(),
            other => other.to_string(),
        })
        .collect();
    if let Some(key) = key {
        parts.push(key_label(key));
    }
    if parts.is_empty() {
        accel.to_string()
    } else {
        parts.join("+")
    }
}

fn key_label(key: &str) -> String {
    match key {
        "plus" => "+".to_string(),
        "minus" => "-".to_string(),
        "comma" => ",".to_string(),
        "period" => ".".to_string(),
        "grave" => "`".to_string(),
        "space" => "Space".to_string(),
        other if other.len() == 1 => other.to_uppercase(),
        other => other.to_string(),
    }
}
