//! Zoom level management
//!
//! Zoom levels are integer percentages (100 = native guest resolution).
//! The interesting part is the lower bound: a window must never be zoomed
//! below the level at which it would shrink under its minimum chrome
//! dimensions, so the effective level is raised to
//! [`minimal_zoom_level`] whenever a display is attached.
//!
//! The *real* zoom level is derived from the allocated widget width and
//! may drift from the nominal level through toolkit layout rounding;
//! relative zooming steps from the real level so repeated zoom-in/out
//! tracks what is actually on screen.

use super::ViewerWindow;

/// Granularity of zoom adjustments, in percent.
pub const ZOOM_STEP: i32 = 10;

/// Nominal 1:1 zoom level.
pub const NORMAL_ZOOM_LEVEL: i32 = 100;

/// Smallest accepted zoom level.
pub const MIN_ZOOM_LEVEL: i32 = 10;

/// Largest accepted zoom level.
pub const MAX_ZOOM_LEVEL: i32 = 400;

/// Minimum usable width of the display area, in pixels.
pub const MIN_DISPLAY_WIDTH: u32 = 320;

/// Minimum usable height of the display area, in pixels.
pub const MIN_DISPLAY_HEIGHT: u32 = 200;

/// Clamps a requested zoom level into `[MIN_ZOOM_LEVEL, MAX_ZOOM_LEVEL]`.
#[must_use]
pub fn clamp_zoom_level(level: i32) -> i32 {
    level.clamp(MIN_ZOOM_LEVEL, MAX_ZOOM_LEVEL)
}

/// The smallest zoom level keeping a window no smaller than its minimum
/// chrome dimensions, as a multiple of [`ZOOM_STEP`].
///
/// E.g. minimal width 200 against desktop width 550 gives a width ratio of
/// 0.36, so the minimal zoom level is 40 (4 × `ZOOM_STEP`).
#[must_use]
pub fn minimal_zoom_level(
    min_width: u32,
    min_height: u32,
    desktop_width: u32,
    desktop_height: u32,
) -> i32 {
    if desktop_width == 0 || desktop_height == 0 {
        return NORMAL_ZOOM_LEVEL;
    }
    let width_ratio = f64::from(min_width) / f64::from(desktop_width);
    let height_ratio = f64::from(min_height) / f64::from(desktop_height);
    // Clamp the step count while still in f64; an extreme ratio would
    // overflow the i32 multiplication below.
    let steps = (10.0 * width_ratio.max(height_ratio)).ceil().clamp(
        f64::from(MIN_ZOOM_LEVEL / ZOOM_STEP),
        f64::from(NORMAL_ZOOM_LEVEL / ZOOM_STEP),
    ) as i32;
    steps * ZOOM_STEP
}

/// The zoom ratio actually realized on screen, from the allocated widget
/// width against the guest desktop width.
#[must_use]
pub fn real_zoom_level(allocated_width: u32, desktop_width: u32) -> i32 {
    if desktop_width == 0 {
        return NORMAL_ZOOM_LEVEL;
    }
    (f64::from(NORMAL_ZOOM_LEVEL) * f64::from(allocated_width) / f64::from(desktop_width)).round()
        as i32
}

impl ViewerWindow {
    /// Sets the zoom level.
    ///
    /// The request is clamped into `[MIN_ZOOM_LEVEL, MAX_ZOOM_LEVEL]` and,
    /// when a display is attached, raised to [`Self::minimal_zoom_level`].
    /// The display and window geometry are only touched when the effective
    /// level differs from the display's stored zoom level or from the
    /// realized ratio; both comparisons are needed, since either side can
    /// drift independently.
    pub fn set_zoom_level(&mut self, requested: i32) {
        self.zoom_level = clamp_zoom_level(requested);

        if self.display.is_none() {
            return;
        }

        let min_zoom = self.minimal_zoom_level();
        if min_zoom > self.zoom_level {
            tracing::debug!(
                requested = self.zoom_level,
                effective = min_zoom,
                "cannot set zoom level below minimum"
            );
            self.zoom_level = min_zoom;
        }

        let real = self.real_zoom_level();
        if let Some(display) = self.display.as_deref_mut() {
            if self.zoom_level == display.zoom_level() && self.zoom_level == real {
                tracing::debug!(zoom = self.zoom_level, "zoom level not changed");
                return;
            }
            display.set_zoom_level(self.zoom_level);
        }
        self.queue_resize();
    }

    /// The stored (nominal) zoom level.
    #[must_use]
    pub fn zoom_level(&self) -> i32 {
        self.zoom_level
    }

    /// Zooms in one step from the realized level.
    pub fn zoom_in(&mut self) {
        self.set_zoom_level(self.real_zoom_level() + ZOOM_STEP);
    }

    /// Zooms out one step from the realized level.
    pub fn zoom_out(&mut self) {
        self.set_zoom_level(self.real_zoom_level() - ZOOM_STEP);
    }

    /// Resets the zoom to [`NORMAL_ZOOM_LEVEL`].
    pub fn zoom_reset(&mut self) {
        self.set_zoom_level(NORMAL_ZOOM_LEVEL);
    }

    /// The zoom ratio actually realized on screen.
    ///
    /// [`NORMAL_ZOOM_LEVEL`] when no display is attached.
    #[must_use]
    pub fn real_zoom_level(&self) -> i32 {
        let Some(display) = self.display.as_deref() else {
            return NORMAL_ZOOM_LEVEL;
        };
        let (desktop_width, _) = display.desktop_size();
        real_zoom_level(self.toolkit.display_allocation_width(), desktop_width)
    }

    /// The smallest zoom level the attached display allows.
    ///
    /// [`MIN_ZOOM_LEVEL`] when no display is attached.
    #[must_use]
    pub fn minimal_zoom_level(&self) -> i32 {
        let Some(display) = self.display.as_deref() else {
            return MIN_ZOOM_LEVEL;
        };
        let (min_width, min_height) = self.minimal_dimensions();
        let (desktop_width, desktop_height) = display.desktop_size();
        minimal_zoom_level(min_width, min_height, desktop_width, desktop_height)
    }

    /// Minimal window dimensions: the larger of the toolbar's natural width
    /// and the minimum display width, by the minimum display height.
    fn minimal_dimensions(&self) -> (u32, u32) {
        (
            MIN_DISPLAY_WIDTH.max(self.toolkit.toolbar_natural_width()),
            MIN_DISPLAY_HEIGHT,
        )
    }
}
