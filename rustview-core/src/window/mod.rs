//! Main viewer window controller
//!
//! [`ViewerWindow`] owns the toolkit window port, the toolkit settings
//! port, a shared handle to the application controller, and at most one
//! display surface. It reacts to display events (grabs, desktop resizes,
//! show-hint changes) and to action invocations from the GUI layer by
//! mutating window geometry, zoom and title.
//!
//! All methods run on the UI event-loop thread; there is no interior
//! sharing. The display surface is exclusively owned and replaced, never
//! shared — see [`ViewerWindow::set_display`].

mod fullscreen;
mod modifiers;
mod title;
mod zoom;

pub use fullscreen::FullscreenState;
pub use title::{DEFAULT_RELEASE_ACCEL_LABEL, compose_title, release_pointer_hint};
pub use zoom::{
    MAX_ZOOM_LEVEL, MIN_DISPLAY_HEIGHT, MIN_DISPLAY_WIDTH, MIN_ZOOM_LEVEL, NORMAL_ZOOM_LEVEL,
    ZOOM_STEP, clamp_zoom_level, minimal_zoom_level, real_zoom_level,
};

use std::path::{Path, PathBuf};

use crate::app::AppHandle;
use crate::config::{KeybindingSettings, WindowSettings};
use crate::display::{DisplayEvent, DisplaySurface, ShowHint, SurfaceBinding};
use crate::screenshot::{self, ScreenshotError, ScreenshotResult};
use crate::toolkit::{AccelGroupId, SettingsPort, ToolkitWindow, WindowAction};

use modifiers::ModifierState;

/// Controller for one viewer window.
///
/// Created by the application controller for each guest display it wants
/// to show. The GUI layer forwards toolkit callbacks (map notifications,
/// action activations) and display events into the methods here.
pub struct ViewerWindow {
    toolkit: Box<dyn ToolkitWindow>,
    settings: Box<dyn SettingsPort>,
    app: AppHandle,
    keybindings: KeybindingSettings,

    display: Option<Box<dyn DisplaySurface>>,
    binding_seq: u64,
    binding: Option<SurfaceBinding>,

    zoom_level: i32,
    fullscreen: FullscreenState,
    modifiers: ModifierState,
    accel_groups: Vec<AccelGroupId>,
    send_keys_group: Option<AccelGroupId>,

    grabbed: bool,
    kiosk: bool,
    desktop_resize_pending: bool,
    initial_zoom_set: bool,
    subtitle: Option<String>,
}

impl ViewerWindow {
    /// Creates a controller over the given ports with default settings.
    #[must_use]
    pub fn new(
        toolkit: Box<dyn ToolkitWindow>,
        settings: Box<dyn SettingsPort>,
        app: AppHandle,
    ) -> Self {
        Self::with_settings(toolkit, settings, app, &WindowSettings::default())
    }

    /// Creates a controller and applies persisted window settings.
    ///
    /// The initial zoom is stored but not pushed anywhere until a display
    /// surface reports itself ready. A persisted fullscreen flag defers via
    /// the pending-map path since the window is not shown yet.
    #[must_use]
    pub fn with_settings(
        toolkit: Box<dyn ToolkitWindow>,
        settings: Box<dyn SettingsPort>,
        app: AppHandle,
        window_settings: &WindowSettings,
    ) -> Self {
        let accel_groups = toolkit.accel_groups();
        let send_keys_group = toolkit.send_keys_accel_group();
        let mut window = Self {
            toolkit,
            settings,
            app,
            keybindings: window_settings.keybindings.clone(),
            display: None,
            binding_seq: 0,
            binding: None,
            zoom_level: zoom::clamp_zoom_level(window_settings.zoom_level),
            fullscreen: FullscreenState::Windowed,
            modifiers: ModifierState::Enabled,
            accel_groups,
            send_keys_group,
            grabbed: false,
            kiosk: false,
            desktop_resize_pending: false,
            initial_zoom_set: false,
            subtitle: None,
        };
        window.update_title();
        if window_settings.fullscreen {
            window.enter_fullscreen(None);
        }
        if window_settings.kiosk {
            window.set_kiosk(true);
        }
        window
    }

    /// Attaches a display surface, or detaches the current one.
    ///
    /// The previous surface and its event binding are dropped first, so no
    /// event delivered for the old surface can reach this controller
    /// afterwards. A newly attached surface is told about the current
    /// fullscreen monitor and flag, gets the initial zoom applied once it
    /// is ready, and triggers the deferred-resize bookkeeping of a desktop
    /// resize if it is already enabled.
    ///
    /// Returns the binding the event pump must present to [`dispatch`]
    /// (`None` when detaching).
    ///
    /// [`dispatch`]: ViewerWindow::dispatch
    pub fn set_display(
        &mut self,
        display: Option<Box<dyn DisplaySurface>>,
    ) -> Option<SurfaceBinding> {
        self.display = None;
        self.binding = None;

        let mut surface = display?;
        surface.set_monitor(self.fullscreen.monitor());
        surface.set_fullscreen(self.fullscreen.is_requested());
        self.display = Some(surface);

        self.binding_seq += 1;
        let binding = SurfaceBinding::new(self.binding_seq);
        self.binding = Some(binding);

        self.handle_show_hint();
        if self
            .display
            .as_deref()
            .is_some_and(DisplaySurface::is_enabled)
        {
            self.handle_desktop_resize();
        }
        Some(binding)
    }

    /// Whether a display surface is currently attached.
    #[must_use]
    pub fn has_display(&self) -> bool {
        self.display.is_some()
    }

    /// Delivers a display event for the attachment identified by `binding`.
    ///
    /// Events for a stale binding (the surface was replaced or detached
    /// since it was minted) are dropped.
    pub fn dispatch(&mut self, binding: SurfaceBinding, event: DisplayEvent) {
        if self.binding != Some(binding) {
            tracing::debug!(?event, "dropping event from detached display surface");
            return;
        }
        match event {
            DisplayEvent::PointerGrab => {
                self.grabbed = true;
                self.update_title();
            }
            DisplayEvent::PointerUngrab => {
                self.grabbed = false;
                self.update_title();
            }
            DisplayEvent::KeyboardGrab => self.disable_modifiers(),
            DisplayEvent::KeyboardUngrab => self.enable_modifiers(),
            DisplayEvent::DesktopResize => self.handle_desktop_resize(),
            DisplayEvent::ShowHintChanged => self.handle_show_hint(),
        }
    }

    /// Whether the pointer is currently grabbed by the remote display.
    #[must_use]
    pub fn is_grabbed(&self) -> bool {
        self.grabbed
    }

    /// Shows the window.
    ///
    /// Re-enables a disabled display surface, flushes a pending desktop
    /// resize, applies kiosk restrictions and re-positions a fullscreen
    /// window onto its monitor.
    pub fn show(&mut self) {
        if let Some(display) = self.display.as_deref_mut() {
            if !display.is_enabled() {
                display.enable();
            }
        }
        if self.desktop_resize_pending {
            self.queue_resize();
            self.desktop_resize_pending = false;
        }
        self.toolkit.show();
        if self.kiosk {
            self.enable_kiosk();
        }
        if self.fullscreen.is_requested() {
            self.move_to_monitor();
        }
    }

    /// Hides the window and disables its display surface.
    ///
    /// Refused in kiosk mode.
    pub fn hide(&mut self) {
        if self.kiosk {
            tracing::warn!("cannot hide windows in kiosk mode");
            return;
        }
        self.toolkit.hide();
        if let Some(display) = self.display.as_deref_mut() {
            display.disable();
        }
    }

    /// Handles the window-manager close request.
    pub fn request_close(&mut self) {
        tracing::debug!("window close requested");
        self.app.maybe_quit();
    }

    /// Enables kiosk mode.
    ///
    /// Kiosk mode is sticky: it suppresses modifiers and pins the overlay
    /// hidden, and disabling it afterwards is unsupported — reported as a
    /// warning and ignored.
    pub fn set_kiosk(&mut self, enabled: bool) {
        if self.kiosk == enabled {
            return;
        }
        if enabled {
            self.kiosk = true;
            self.enable_kiosk();
        } else {
            tracing::warn!("disabling kiosk mode is not supported");
        }
    }

    /// Whether kiosk mode is active.
    #[must_use]
    pub fn kiosk(&self) -> bool {
        self.kiosk
    }

    /// Enables or disables the display-dependent menu actions.
    pub fn set_menus_sensitive(&mut self, sensitive: bool) {
        for &action in WindowAction::MENU_ACTIONS {
            self.toolkit.set_action_enabled(action, sensitive);
        }
    }

    /// Enables or disables USB device selection.
    pub fn set_usb_options_sensitive(&mut self, sensitive: bool) {
        self.toolkit
            .set_action_enabled(WindowAction::UsbDeviceSelection, sensitive);
        self.toolkit.set_usb_button_visible(sensitive);
    }

    /// Sets the window subtitle and refreshes the title.
    pub fn set_subtitle(&mut self, subtitle: Option<String>) {
        self.subtitle = subtitle;
        self.update_title();
    }

    /// The current window subtitle, if any.
    #[must_use]
    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    /// Recomputes and applies the window title from the current state.
    pub fn update_title(&mut self) {
        let hint = if self.grabbed {
            let label = if self.app.accelerators_enabled() {
                self.keybindings.release_cursor_label()
            } else {
                None
            };
            Some(release_pointer_hint(label.as_deref()))
        } else {
            None
        };
        let title = compose_title(
            hint.as_deref(),
            self.subtitle.as_deref(),
            &self.app.application_name(),
        );
        self.toolkit.set_title(&title);
    }

    /// Captures the current frame and writes it to `path`.
    ///
    /// The encoder is picked from the filename extension; see
    /// [`crate::screenshot::save_screenshot`]. Returns the path actually
    /// written.
    pub fn save_screenshot(&self, path: &Path) -> ScreenshotResult<PathBuf> {
        let display = self.display.as_deref().ok_or(ScreenshotError::NoDisplay)?;
        let frame = display.capture().ok_or(ScreenshotError::NoFrame)?;
        screenshot::save_screenshot(&frame, path)
    }

    fn handle_desktop_resize(&mut self) {
        if !self.toolkit.is_visible() {
            self.desktop_resize_pending = true;
            return;
        }
        self.queue_resize();
    }

    fn handle_show_hint(&mut self) {
        let Some(display) = self.display.as_deref() else {
            return;
        };
        let ready = display.show_hint().contains(ShowHint::READY);
        if !self.initial_zoom_set && ready && display.is_enabled() {
            self.initial_zoom_set = true;
            self.set_zoom_level(self.zoom_level);
        }
    }

    fn enable_kiosk(&mut self) {
        self.toolkit.force_reveal_overlay(false);
        self.disable_modifiers();
    }

    /// Kick the toolkit window to adjust to the new widget sizes.
    fn queue_resize(&mut self) {
        self.toolkit.resize_to_natural();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockDisplay, MockSettings, MockToolkit, mock_app, test_window};

    #[test]
    fn events_from_replaced_surface_are_dropped() {
        let (mut window, toolkit, _settings, _app) = test_window();
        toolkit.borrow_mut().visible = true;

        let first = MockDisplay::new(800, 600);
        let stale = window
            .set_display(Some(Box::new(first)))
            .expect("binding for first surface");

        let second = MockDisplay::new(1024, 768);
        let current = window
            .set_display(Some(Box::new(second)))
            .expect("binding for second surface");

        window.dispatch(stale, DisplayEvent::PointerGrab);
        assert!(!window.is_grabbed());

        window.dispatch(current, DisplayEvent::PointerGrab);
        assert!(window.is_grabbed());
    }

    #[test]
    fn detaching_invalidates_binding() {
        let (mut window, _toolkit, _settings, _app) = test_window();
        let binding = window
            .set_display(Some(Box::new(MockDisplay::new(800, 600))))
            .expect("binding");
        assert!(window.set_display(None).is_none());
        assert!(!window.has_display());

        window.dispatch(binding, DisplayEvent::PointerGrab);
        assert!(!window.is_grabbed());
    }

    #[test]
    fn pointer_grab_updates_title_with_release_hint() {
        let (mut window, toolkit, _settings, _app) = test_window();
        let binding = window
            .set_display(Some(Box::new(MockDisplay::new(800, 600))))
            .expect("binding");

        window.dispatch(binding, DisplayEvent::PointerGrab);
        let title = toolkit.borrow().title.clone();
        assert!(title.contains("release pointer"), "title: {title}");

        window.dispatch(binding, DisplayEvent::PointerUngrab);
        let title = toolkit.borrow().title.clone();
        assert!(!title.contains("release pointer"), "title: {title}");
    }

    #[test]
    fn desktop_resize_on_hidden_window_is_deferred() {
        let (mut window, toolkit, _settings, _app) = test_window();
        toolkit.borrow_mut().visible = false;
        let binding = window
            .set_display(Some(Box::new(MockDisplay::new(800, 600))))
            .expect("binding");
        let resizes_before = toolkit.borrow().natural_resizes;

        window.dispatch(binding, DisplayEvent::DesktopResize);
        assert_eq!(toolkit.borrow().natural_resizes, resizes_before);

        window.show();
        assert_eq!(toolkit.borrow().natural_resizes, resizes_before + 1);
    }

    #[test]
    fn hide_is_refused_in_kiosk_mode() {
        let (mut window, toolkit, _settings, _app) = test_window();
        window.show();
        window.set_kiosk(true);
        window.hide();
        assert!(toolkit.borrow().visible);
    }

    #[test]
    fn kiosk_mode_is_sticky() {
        let (mut window, _toolkit, settings, _app) = test_window();
        window.set_kiosk(true);
        assert!(window.kiosk());
        // Kiosk suppresses modifiers.
        assert!(settings.borrow().menu_bar_accel.is_none());

        window.set_kiosk(false);
        assert!(window.kiosk());
        assert!(settings.borrow().menu_bar_accel.is_none());
    }

    #[test]
    fn menus_sensitivity_covers_all_menu_actions() {
        let (mut window, toolkit, _settings, _app) = test_window();
        window.set_menus_sensitive(false);
        let state = toolkit.borrow();
        for action in WindowAction::MENU_ACTIONS {
            assert_eq!(state.action_enabled.get(action), Some(&false));
        }
    }

    #[test]
    fn usb_sensitivity_toggles_action_and_button() {
        let (mut window, toolkit, _settings, _app) = test_window();
        window.set_usb_options_sensitive(false);
        {
            let state = toolkit.borrow();
            assert_eq!(
                state.action_enabled.get(&WindowAction::UsbDeviceSelection),
                Some(&false)
            );
            assert!(!state.usb_button_visible);
        }
        window.set_usb_options_sensitive(true);
        assert!(toolkit.borrow().usb_button_visible);
    }

    #[test]
    fn close_request_forwards_to_app() {
        let (mut window, _toolkit, _settings, app) = test_window();
        window.request_close();
        assert_eq!(app.quit_requests.get(), 1);
    }

    #[test]
    fn initial_zoom_applies_once_surface_is_ready() {
        let app = mock_app();
        let toolkit = MockToolkit::new();
        let toolkit_state = toolkit.handle();
        let settings = WindowSettings {
            zoom_level: 200,
            ..WindowSettings::default()
        };
        let mut window = ViewerWindow::with_settings(
            Box::new(toolkit),
            Box::new(MockSettings::new()),
            app,
            &settings,
        );

        let display = MockDisplay::new(800, 600);
        let display_state = display.handle();
        display_state.borrow_mut().show_hint = ShowHint::NONE;
        let binding = window.set_display(Some(Box::new(display))).expect("binding");
        assert_eq!(display_state.borrow().zoom_level, NORMAL_ZOOM_LEVEL);

        toolkit_state.borrow_mut().display_allocation_width = 800;
        display_state.borrow_mut().show_hint = ShowHint::READY;
        window.dispatch(binding, DisplayEvent::ShowHintChanged);
        assert_eq!(display_state.borrow().zoom_level, 200);
    }

    #[test]
    fn subtitle_appears_in_title() {
        let (mut window, toolkit, _settings, _app) = test_window();
        window.set_subtitle(Some("guest-01".into()));
        let title = toolkit.borrow().title.clone();
        assert!(title.contains("guest-01"), "title: {title}");
        assert_eq!(window.subtitle(), Some("guest-01"));
    }
}
