//! Property tests for keybinding configuration

use proptest::prelude::*;
use rustview_core::config::{
    KeybindingSettings, accel_label, default_keybindings, is_valid_accelerator,
};

/// Strategy for generating valid accelerator strings
fn accel_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "<Control>a".to_owned(),
        "<Control><Shift>b".to_owned(),
        "<Alt>F2".to_owned(),
        "<Control><Alt>Delete".to_owned(),
        "<Control><Alt>".to_owned(),
        "F1".to_owned(),
        "F11".to_owned(),
        "<Control>comma".to_owned(),
        "<Control>grave".to_owned(),
        "<Control>Tab".to_owned(),
    ])
}

/// Strategy for generating action names from the default registry
fn action_strategy() -> impl Strategy<Value = String> {
    let actions: Vec<String> = default_keybindings()
        .iter()
        .map(|d| d.action.clone())
        .collect();
    prop::sample::select(actions)
}

proptest! {
    /// Overriding a keybinding and then resetting it returns to default
    #[test]
    fn override_then_reset_returns_default(
        action in action_strategy(),
        accel in accel_strategy(),
    ) {
        let mut settings = KeybindingSettings::default();
        let original = settings.accel_for(&action);

        settings.overrides.insert(action.clone(), accel.clone());
        prop_assert_eq!(settings.accel_for(&action), Some(accel));

        settings.reset(&action);
        prop_assert_eq!(settings.accel_for(&action), original);
    }

    /// Serialization round-trip preserves overrides
    #[test]
    fn serde_roundtrip_preserves_overrides(
        action in action_strategy(),
        accel in accel_strategy(),
    ) {
        let mut settings = KeybindingSettings::default();
        settings.overrides.insert(action, accel);

        let raw = toml::to_string(&settings).expect("serialize");
        let reloaded: KeybindingSettings = toml::from_str(&raw).expect("deserialize");
        prop_assert_eq!(reloaded, settings);
    }

    /// Every generated accelerator validates and renders a non-empty label
    #[test]
    fn valid_accels_render_labels(accel in accel_strategy()) {
        prop_assert!(is_valid_accelerator(&accel));
        prop_assert!(!accel_label(&accel).is_empty());
    }
}
