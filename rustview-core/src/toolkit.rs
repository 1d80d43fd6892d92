//! Toolkit window and settings ports
//!
//! Every toolkit touchpoint of the window controller goes through one of
//! the traits here, so the controller never links against a widget
//! library. The GUI crate implements them over its real window; tests use
//! the recording doubles in [`crate::testing`].

/// A monitor rectangle in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Opaque handle to one of the window's accelerator groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccelGroupId(pub u32);

/// Window actions whose sensitivity the controller manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowAction {
    /// Save a screenshot of the current frame.
    Screenshot,
    /// Toggle fullscreen.
    Fullscreen,
    /// Zoom in one step.
    ZoomIn,
    /// Zoom out one step.
    ZoomOut,
    /// Reset zoom to 100%.
    ZoomReset,
    /// Show guest details.
    GuestDetails,
    /// Open the USB device selection dialog.
    UsbDeviceSelection,
}

impl WindowAction {
    /// Actions toggled together by
    /// [`ViewerWindow::set_menus_sensitive`](crate::window::ViewerWindow::set_menus_sensitive).
    pub const MENU_ACTIONS: &'static [Self] = &[
        Self::Screenshot,
        Self::ZoomIn,
        Self::ZoomOut,
        Self::ZoomReset,
        Self::GuestDetails,
    ];
}

/// The controller's view of its toplevel toolkit window.
///
/// Geometry setters mirror the toolkit calls the controller needs for
/// fullscreen placement and zoom-driven resizing; nothing here constructs
/// widgets.
pub trait ToolkitWindow {
    /// Whether the window has been mapped by the windowing system.
    fn is_mapped(&self) -> bool;

    /// Whether the window is currently visible.
    fn is_visible(&self) -> bool;

    /// Shows the window.
    fn show(&mut self);

    /// Hides the window.
    fn hide(&mut self);

    /// Sets the displayed window title.
    fn set_title(&mut self, title: &str);

    /// Puts the window into toolkit fullscreen.
    fn fullscreen(&mut self);

    /// Takes the window out of toolkit fullscreen.
    fn unfullscreen(&mut self);

    /// Moves the window to screen coordinates.
    fn move_to(&mut self, x: i32, y: i32);

    /// Forces a minimum window size.
    fn set_size_request(&mut self, width: u32, height: u32);

    /// Clears any forced window size.
    fn clear_size_request(&mut self);

    /// Resizes the window to the natural size of its contents.
    ///
    /// The toolkit equivalent of clearing the default size and resizing to
    /// the preferred requisition.
    fn resize_to_natural(&mut self);

    /// Geometry of the given monitor, if it exists.
    fn monitor_geometry(&self, monitor: u32) -> Option<Rect>;

    /// Natural width of the window's toolbar, for minimal-size math.
    fn toolbar_natural_width(&self) -> u32;

    /// Current allocated width of the display widget, in pixels.
    fn display_allocation_width(&self) -> u32;

    /// Shows or hides the fullscreen overlay chrome.
    fn set_overlay_visible(&mut self, visible: bool);

    /// Forces the auto-hide overlay to stay revealed (or releases it).
    fn force_reveal_overlay(&mut self, reveal: bool);

    /// All accelerator groups attached to the window.
    fn accel_groups(&self) -> Vec<AccelGroupId>;

    /// The accelerator group carrying the send-keys shortcuts, if any.
    fn send_keys_accel_group(&self) -> Option<AccelGroupId>;

    /// Attaches an accelerator group to the window.
    fn add_accel_group(&mut self, group: AccelGroupId);

    /// Detaches an accelerator group from the window.
    fn remove_accel_group(&mut self, group: AccelGroupId);

    /// Enables or disables a window action.
    fn set_action_enabled(&mut self, action: WindowAction, enabled: bool);

    /// Shows or hides the USB device button in the overlay toolbar.
    fn set_usb_button_visible(&mut self, visible: bool);
}

/// Injected access to the toolkit's global settings.
///
/// Modeled as a port rather than a process-wide singleton so the modifier
/// save/restore logic is testable without a real toolkit.
pub trait SettingsPort {
    /// The accelerator that activates the menu bar (e.g. `F10`), if any.
    fn menu_bar_accel(&self) -> Option<String>;

    /// Sets or clears the menu-bar activation accelerator.
    fn set_menu_bar_accel(&mut self, accel: Option<String>);

    /// Whether mnemonic-underline activation is enabled.
    fn mnemonics_enabled(&self) -> bool;

    /// Enables or disables mnemonic-underline activation.
    fn set_mnemonics_enabled(&mut self, enabled: bool);
}
