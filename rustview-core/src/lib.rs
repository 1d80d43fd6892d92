//! `RustView` Core Library
//!
//! This crate provides the window controller logic for the `RustView`
//! remote-desktop viewer: zoom management, fullscreen transitions, keyboard
//! grab handling and screenshot export, all behind toolkit-agnostic port
//! traits so the GUI crate stays a thin adapter.
//!
//! # Crate Structure
//!
//! - [`window`] - The [`ViewerWindow`] controller and its state machines
//! - [`display`] - The display surface port and its event types
//! - [`toolkit`] - The toolkit window and settings ports
//! - [`app`] - The application controller port
//! - [`screenshot`] - Frame export with extension-matched encoders
//! - [`config`] - Persisted window settings and keybindings
//! - [`tracing`] - Structured logging setup
//! - [`testing`] - Recording doubles for every port

// Enable missing_docs warning for public API documentation
#![warn(missing_docs)]

pub mod app;
pub mod config;
pub mod display;
pub mod screenshot;
pub mod testing;
pub mod toolkit;
pub mod tracing;
pub mod window;

pub use app::{AppController, AppHandle};
pub use config::{
    ConfigError, ConfigManager, ConfigResult, KeybindingDef, KeybindingSettings,
    RELEASE_CURSOR_ACTION, WindowSettings, accel_label, default_keybindings, is_valid_accelerator,
};
pub use display::{DisplayEvent, DisplaySurface, Frame, ShowHint, SurfaceBinding};
pub use screenshot::{ScreenshotError, ScreenshotResult, save_screenshot};
pub use toolkit::{AccelGroupId, Rect, SettingsPort, ToolkitWindow, WindowAction};
pub use tracing::{
    TracingConfig, TracingError, TracingLevel, TracingOutput, TracingResult, init_tracing,
    is_tracing_initialized,
};
pub use window::{
    DEFAULT_RELEASE_ACCEL_LABEL, FullscreenState, MAX_ZOOM_LEVEL, MIN_DISPLAY_HEIGHT,
    MIN_DISPLAY_WIDTH, MIN_ZOOM_LEVEL, NORMAL_ZOOM_LEVEL, ViewerWindow, ZOOM_STEP,
    clamp_zoom_level, compose_title, minimal_zoom_level, real_zoom_level, release_pointer_hint,
};
