//! Display surface abstraction
//!
//! The window controller renders exactly one remote display at a time. The
//! [`DisplaySurface`] trait is the controller's view of that display: the
//! guest's desktop geometry, the applied zoom, enable state, and monitor /
//! fullscreen placement. Concrete implementations wrap a protocol widget
//! (SPICE, VNC, ...); tests use the doubles in [`crate::testing`].
//!
//! Events flow the other way through [`DisplayEvent`] and are delivered to
//! [`ViewerWindow::dispatch`](crate::window::ViewerWindow::dispatch)
//! together with the [`SurfaceBinding`] returned when the surface was
//! attached. A binding is invalidated as soon as another surface (or none)
//! replaces the one it was minted for, so callbacks left over from a
//! previous surface can never reach the controller.

/// A rendered frame grabbed from the display surface.
///
/// Pixels are tightly packed RGBA8, row-major, `width * height * 4` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 pixel data.
    pub data: Vec<u8>,
}

impl Frame {
    /// Creates a frame, checking that `data` matches the dimensions.
    #[must_use]
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        if data.len() as u64 == u64::from(width) * u64::from(height) * 4 {
            Some(Self {
                width,
                height,
                data,
            })
        } else {
            None
        }
    }
}

/// Readiness bitmask reported by a display surface.
///
/// Mirrors the wire-level show-hint flags: the surface sets
/// [`ShowHint::READY`] once it has something to render and
/// [`ShowHint::DISABLED`] when the guest output is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShowHint(u32);

impl ShowHint {
    /// No hint bits set.
    pub const NONE: Self = Self(0);
    /// The guest output backing this surface is disabled.
    pub const DISABLED: Self = Self(1);
    /// The surface is ready to render.
    pub const READY: Self = Self(1 << 1);

    /// Creates a hint from raw bits.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Returns the raw bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns `true` if every bit of `other` is set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl std::ops::BitOr for ShowHint {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Notifications emitted by a display surface.
///
/// The embedding event loop forwards these to
/// [`ViewerWindow::dispatch`](crate::window::ViewerWindow::dispatch).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayEvent {
    /// The remote display grabbed the pointer.
    PointerGrab,
    /// The remote display released the pointer.
    PointerUngrab,
    /// The remote display grabbed the keyboard.
    KeyboardGrab,
    /// The remote display released the keyboard.
    KeyboardUngrab,
    /// The guest changed its desktop resolution.
    DesktopResize,
    /// The surface's [`ShowHint`] changed.
    ShowHintChanged,
}

/// Token identifying one display attachment.
///
/// Returned by
/// [`ViewerWindow::set_display`](crate::window::ViewerWindow::set_display);
/// events delivered with a stale binding are dropped. This replaces
/// per-signal disconnection: dropping the old surface and forgetting its
/// binding detaches every subscription at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceBinding(u64);

impl SurfaceBinding {
    pub(crate) const fn new(seq: u64) -> Self {
        Self(seq)
    }
}

/// The controller's view of the attached remote display.
///
/// All methods are called from the UI event-loop thread; the controller
/// owns the surface exclusively, replacing it rather than sharing it.
pub trait DisplaySurface {
    /// The guest desktop resolution in pixels, `(width, height)`.
    fn desktop_size(&self) -> (u32, u32);

    /// The zoom level currently applied to the surface, in percent.
    fn zoom_level(&self) -> i32;

    /// Applies a zoom level to the surface, in percent.
    fn set_zoom_level(&mut self, level: i32);

    /// Whether the guest output backing this surface is enabled.
    fn is_enabled(&self) -> bool;

    /// Enables the guest output.
    fn enable(&mut self);

    /// Disables the guest output.
    fn disable(&mut self);

    /// Assigns the surface to a local monitor, or to none.
    fn set_monitor(&mut self, monitor: Option<u32>);

    /// Tells the surface whether its window is fullscreen.
    fn set_fullscreen(&mut self, fullscreen: bool);

    /// Current readiness hint.
    fn show_hint(&self) -> ShowHint;

    /// Grabs the current frame for screenshot export.
    ///
    /// Returns `None` when the surface has nothing to render yet.
    fn capture(&self) -> Option<Frame>;
}
