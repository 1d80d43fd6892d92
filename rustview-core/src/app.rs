//! Application controller port
//!
//! A viewer process owns one application controller and any number of
//! windows. The window controller consults it for the accelerator policy,
//! for application-wide fullscreen coordination, and when the user asks to
//! close the window.

use std::rc::Rc;

/// The owning application, as seen from a single window.
///
/// Shared between windows on the UI thread via [`Rc`].
pub trait AppController {
    /// Whether application accelerators stay active while the keyboard is
    /// grabbed.
    fn accelerators_enabled(&self) -> bool;

    /// Whether the application is in all-windows fullscreen mode.
    fn fullscreen(&self) -> bool;

    /// Enters or leaves all-windows fullscreen mode.
    fn set_fullscreen(&self, fullscreen: bool);

    /// Asks the application to quit if this was the last relevant window.
    fn maybe_quit(&self);

    /// Human-readable application name, appended to window titles.
    fn application_name(&self) -> String;
}

/// Shared handle to the application controller.
pub type AppHandle = Rc<dyn AppController>;
