//! Fullscreen state machine
//!
//! Entering fullscreen before the window has been mapped is deferred: the
//! window is placed on the target monitor early (window managers race when
//! a window is positioned after allocation) and the transition completes
//! when the map notification arrives. Switching monitors while fullscreen
//! always leaves first and re-enters on the new monitor.

use super::ViewerWindow;

/// Fullscreen lifecycle of a viewer window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenState {
    /// Normal windowed mode.
    Windowed,
    /// Fullscreen was requested before the window was mapped; completes on
    /// the map notification.
    PendingMap {
        /// Target monitor, `None` for the current one.
        monitor: Option<u32>,
    },
    /// The window is fullscreen.
    Fullscreen {
        /// Occupied monitor, `None` for the current one.
        monitor: Option<u32>,
    },
}

impl FullscreenState {
    /// The target or occupied monitor, if one was requested.
    #[must_use]
    pub fn monitor(self) -> Option<u32> {
        match self {
            Self::Windowed => None,
            Self::PendingMap { monitor } | Self::Fullscreen { monitor } => monitor,
        }
    }

    /// Whether fullscreen has been requested (pending or active).
    #[must_use]
    pub fn is_requested(self) -> bool {
        !matches!(self, Self::Windowed)
    }

    /// Whether the window is actually fullscreen.
    #[must_use]
    pub fn is_fullscreen(self) -> bool {
        matches!(self, Self::Fullscreen { .. })
    }
}

impl ViewerWindow {
    /// Puts this window into fullscreen on the given monitor.
    ///
    /// `None` targets the current monitor without explicit placement.
    /// While already fullscreen on a different monitor, the window fully
    /// leaves fullscreen first and re-enters on the new target. On an
    /// unmapped window the transition is recorded and deferred until
    /// [`Self::notify_mapped`].
    pub fn enter_fullscreen(&mut self, monitor: Option<u32>) {
        if self.fullscreen.is_requested() && self.fullscreen.monitor() != monitor {
            self.leave_fullscreen();
        }
        if self.fullscreen.is_requested() {
            return;
        }

        if !self.toolkit.is_mapped() {
            // Place the window before it is allocated and mapped; position
            // and size must not be queried yet.
            self.fullscreen = FullscreenState::PendingMap { monitor };
            self.move_to_monitor();
            return;
        }

        self.fullscreen = FullscreenState::Fullscreen { monitor };
        self.toolkit.set_overlay_visible(true);
        self.toolkit.force_reveal_overlay(true);
        if let Some(display) = self.display.as_deref_mut() {
            display.set_monitor(monitor);
            display.set_fullscreen(true);
        }
        self.move_to_monitor();
        self.toolkit.fullscreen();
    }

    /// Leaves fullscreen, cancelling a pending map-deferred transition.
    ///
    /// No-op in windowed mode.
    pub fn leave_fullscreen(&mut self) {
        if !self.fullscreen.is_requested() {
            return;
        }
        self.fullscreen = FullscreenState::Windowed;
        if let Some(display) = self.display.as_deref_mut() {
            display.set_monitor(None);
            display.set_fullscreen(false);
        }
        self.toolkit.force_reveal_overlay(false);
        self.toolkit.set_overlay_visible(false);
        self.toolkit.clear_size_request();
        self.toolkit.unfullscreen();
    }

    /// Sets this window's fullscreen state, coordinating with the
    /// application.
    ///
    /// Leaving fullscreen while the application is in all-windows
    /// fullscreen mode leaves it application-wide; otherwise only this
    /// window leaves.
    pub fn set_fullscreen(&mut self, fullscreen: bool) {
        if fullscreen {
            self.enter_fullscreen(None);
        } else if self.app.fullscreen() {
            self.app.set_fullscreen(false);
        } else {
            self.leave_fullscreen();
        }
    }

    /// Toggles fullscreen (the View → Fullscreen action).
    pub fn toggle_fullscreen(&mut self) {
        self.set_fullscreen(!self.fullscreen.is_requested());
    }

    /// Must be called when the toolkit maps the window.
    ///
    /// Completes a deferred fullscreen transition; a no-op otherwise.
    pub fn notify_mapped(&mut self) {
        if let FullscreenState::PendingMap { monitor } = self.fullscreen {
            self.fullscreen = FullscreenState::Windowed;
            self.enter_fullscreen(monitor);
        }
    }

    /// The current fullscreen state.
    #[must_use]
    pub fn fullscreen_state(&self) -> FullscreenState {
        self.fullscreen
    }

    /// Whether the window is actually fullscreen.
    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen.is_fullscreen()
    }

    /// Moves and sizes the window onto its fullscreen monitor.
    ///
    /// Skipped when no explicit monitor was requested or the monitor is
    /// unknown to the toolkit.
    pub(super) fn move_to_monitor(&mut self) {
        let Some(monitor) = self.fullscreen.monitor() else {
            return;
        };
        let Some(geometry) = self.toolkit.monitor_geometry(monitor) else {
            tracing::warn!(monitor, "monitor geometry unavailable");
            return;
        };
        self.toolkit.move_to(geometry.x, geometry.y);
        self.toolkit.set_size_request(geometry.width, geometry.height);
    }
}
