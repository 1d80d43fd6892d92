//! Configuration management
//!
//! Window settings are persisted as TOML under the user configuration
//! directory and loaded by the application controller at startup.

pub mod keybindings;
mod manager;
pub mod settings;

pub use keybindings::{
    KeybindingDef, KeybindingSettings, RELEASE_CURSOR_ACTION, accel_label, default_keybindings,
    is_valid_accelerator,
};
pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::WindowSettings;
