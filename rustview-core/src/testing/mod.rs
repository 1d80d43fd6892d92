//! Recording doubles for the port traits
//!
//! Each double pairs a port implementation with a shared state handle
//! (`Rc<RefCell<..>>` / `Cell`s) that tests inspect and mutate after the
//! controller has taken ownership of the port. [`test_window`] wires up a
//! complete [`ViewerWindow`] over fresh doubles.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::app::AppController;
use crate::display::{DisplaySurface, Frame, ShowHint};
use crate::toolkit::{AccelGroupId, Rect, SettingsPort, ToolkitWindow, WindowAction};
use crate::window::ViewerWindow;

/// Observable state behind a [`MockDisplay`].
#[derive(Debug, Clone)]
pub struct MockDisplayState {
    /// Guest desktop resolution.
    pub desktop_size: (u32, u32),
    /// Zoom level the controller last applied.
    pub zoom_level: i32,
    /// Guest output enable state.
    pub enabled: bool,
    /// Monitor assignment the controller last applied.
    pub monitor: Option<u32>,
    /// Fullscreen flag the controller last applied.
    pub fullscreen: bool,
    /// Readiness hint reported to the controller.
    pub show_hint: ShowHint,
    /// Frame returned by `capture`.
    pub frame: Option<Frame>,
}

/// In-memory [`DisplaySurface`] double.
#[derive(Debug)]
pub struct MockDisplay {
    state: Rc<RefCell<MockDisplayState>>,
}

impl MockDisplay {
    /// Creates a ready, enabled surface with the given desktop size.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            state: Rc::new(RefCell::new(MockDisplayState {
                desktop_size: (width, height),
                zoom_level: 100,
                enabled: true,
                monitor: None,
                fullscreen: false,
                show_hint: ShowHint::READY,
                frame: None,
            })),
        }
    }

    /// A handle onto the surface's state, valid after the controller took
    /// ownership of the surface itself.
    #[must_use]
    pub fn handle(&self) -> Rc<RefCell<MockDisplayState>> {
        Rc::clone(&self.state)
    }
}

impl DisplaySurface for MockDisplay {
    fn desktop_size(&self) -> (u32, u32) {
        self.state.borrow().desktop_size
    }

    fn zoom_level(&self) -> i32 {
        self.state.borrow().zoom_level
    }

    fn set_zoom_level(&mut self, level: i32) {
        self.state.borrow_mut().zoom_level = level;
    }

    fn is_enabled(&self) -> bool {
        self.state.borrow().enabled
    }

    fn enable(&mut self) {
        self.state.borrow_mut().enabled = true;
    }

    fn disable(&mut self) {
        self.state.borrow_mut().enabled = false;
    }

    fn set_monitor(&mut self, monitor: Option<u32>) {
        self.state.borrow_mut().monitor = monitor;
    }

    fn set_fullscreen(&mut self, fullscreen: bool) {
        self.state.borrow_mut().fullscreen = fullscreen;
    }

    fn show_hint(&self) -> ShowHint {
        self.state.borrow().show_hint
    }

    fn capture(&self) -> Option<Frame> {
        self.state.borrow().frame.clone()
    }
}

/// Observable state behind a [`MockToolkit`].
#[derive(Debug, Clone)]
pub struct MockToolkitState {
    /// Whether the window is mapped.
    pub mapped: bool,
    /// Whether the window is visible.
    pub visible: bool,
    /// Last applied title.
    pub title: String,
    /// Number of `fullscreen` calls.
    pub fullscreen_calls: u32,
    /// Number of `unfullscreen` calls.
    pub unfullscreen_calls: u32,
    /// Last applied window position.
    pub position: Option<(i32, i32)>,
    /// Current forced size, if any.
    pub size_request: Option<(u32, u32)>,
    /// Number of natural-size resizes requested.
    pub natural_resizes: u32,
    /// Monitor geometries by index.
    pub monitors: Vec<Rect>,
    /// Natural toolbar width.
    pub toolbar_width: u32,
    /// Allocated display-widget width.
    pub display_allocation_width: u32,
    /// Overlay visibility flag.
    pub overlay_visible: bool,
    /// Overlay forced-reveal flag.
    pub overlay_revealed: bool,
    /// Groups the window knows about.
    pub accel_groups: Vec<AccelGroupId>,
    /// Groups currently attached.
    pub attached_groups: Vec<AccelGroupId>,
    /// The send-keys group.
    pub send_keys_group: Option<AccelGroupId>,
    /// Last applied per-action sensitivity.
    pub action_enabled: HashMap<WindowAction, bool>,
    /// USB button visibility.
    pub usb_button_visible: bool,
}

/// In-memory [`ToolkitWindow`] double.
///
/// Starts with three accelerator groups attached, the first of them being
/// the send-keys group, and three monitors of 1920x1080 each.
#[derive(Debug)]
pub struct MockToolkit {
    state: Rc<RefCell<MockToolkitState>>,
}

impl MockToolkit {
    /// Creates a mapped, visible window double.
    #[must_use]
    pub fn new() -> Self {
        let groups = vec![AccelGroupId(1), AccelGroupId(2), AccelGroupId(3)];
        let monitors = (0..3)
            .map(|i| Rect {
                x: 1920 * i,
                y: 0,
                width: 1920,
                height: 1080,
            })
            .collect();
        Self {
            state: Rc::new(RefCell::new(MockToolkitState {
                mapped: true,
                visible: true,
                title: String::new(),
                fullscreen_calls: 0,
                unfullscreen_calls: 0,
                position: None,
                size_request: None,
                natural_resizes: 0,
                monitors,
                toolbar_width: 0,
                display_allocation_width: 0,
                overlay_visible: false,
                overlay_revealed: false,
                accel_groups: groups.clone(),
                attached_groups: groups,
                send_keys_group: Some(AccelGroupId(1)),
                action_enabled: HashMap::new(),
                usb_button_visible: true,
            })),
        }
    }

    /// Creates a window double that has not been mapped yet.
    #[must_use]
    pub fn unmapped() -> Self {
        let toolkit = Self::new();
        {
            let mut state = toolkit.state.borrow_mut();
            state.mapped = false;
            state.visible = false;
        }
        toolkit
    }

    /// A handle onto the window's state, valid after the controller took
    /// ownership of the window itself.
    #[must_use]
    pub fn handle(&self) -> Rc<RefCell<MockToolkitState>> {
        Rc::clone(&self.state)
    }
}

impl Default for MockToolkit {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolkitWindow for MockToolkit {
    fn is_mapped(&self) -> bool {
        self.state.borrow().mapped
    }

    fn is_visible(&self) -> bool {
        self.state.borrow().visible
    }

    fn show(&mut self) {
        let mut state = self.state.borrow_mut();
        state.visible = true;
        state.mapped = true;
    }

    fn hide(&mut self) {
        self.state.borrow_mut().visible = false;
    }

    fn set_title(&mut self, title: &str) {
        self.state.borrow_mut().title = title.to_string();
    }

    fn fullscreen(&mut self) {
        self.state.borrow_mut().fullscreen_calls += 1;
    }

    fn unfullscreen(&mut self) {
        self.state.borrow_mut().unfullscreen_calls += 1;
    }

    fn move_to(&mut self, x: i32, y: i32) {
        self.state.borrow_mut().position = Some((x, y));
    }

    fn set_size_request(&mut self, width: u32, height: u32) {
        self.state.borrow_mut().size_request = Some((width, height));
    }

    fn clear_size_request(&mut self) {
        self.state.borrow_mut().size_request = None;
    }

    fn resize_to_natural(&mut self) {
        self.state.borrow_mut().natural_resizes += 1;
    }

    fn monitor_geometry(&self, monitor: u32) -> Option<Rect> {
        self.state.borrow().monitors.get(monitor as usize).copied()
    }

    fn toolbar_natural_width(&self) -> u32 {
        self.state.borrow().toolbar_width
    }

    fn display_allocation_width(&self) -> u32 {
        self.state.borrow().display_allocation_width
    }

    fn set_overlay_visible(&mut self, visible: bool) {
        self.state.borrow_mut().overlay_visible = visible;
    }

    fn force_reveal_overlay(&mut self, reveal: bool) {
        self.state.borrow_mut().overlay_revealed = reveal;
    }

    fn accel_groups(&self) -> Vec<AccelGroupId> {
        self.state.borrow().accel_groups.clone()
    }

    fn send_keys_accel_group(&self) -> Option<AccelGroupId> {
        self.state.borrow().send_keys_group
    }

    fn add_accel_group(&mut self, group: AccelGroupId) {
        let mut state = self.state.borrow_mut();
        if !state.attached_groups.contains(&group) {
            state.attached_groups.push(group);
        }
    }

    fn remove_accel_group(&mut self, group: AccelGroupId) {
        self.state.borrow_mut().attached_groups.retain(|g| *g != group);
    }

    fn set_action_enabled(&mut self, action: WindowAction, enabled: bool) {
        self.state.borrow_mut().action_enabled.insert(action, enabled);
    }

    fn set_usb_button_visible(&mut self, visible: bool) {
        self.state.borrow_mut().usb_button_visible = visible;
    }
}

/// Observable state behind a [`MockSettings`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockSettingsState {
    /// Menu-bar activation accelerator.
    pub menu_bar_accel: Option<String>,
    /// Mnemonic activation flag.
    pub mnemonics_enabled: bool,
}

/// In-memory [`SettingsPort`] double with GTK-like defaults (`F10`,
/// mnemonics on).
#[derive(Debug)]
pub struct MockSettings {
    state: Rc<RefCell<MockSettingsState>>,
}

impl MockSettings {
    /// Creates a settings double.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(MockSettingsState {
                menu_bar_accel: Some("F10".into()),
                mnemonics_enabled: true,
            })),
        }
    }

    /// A handle onto the settings state.
    #[must_use]
    pub fn handle(&self) -> Rc<RefCell<MockSettingsState>> {
        Rc::clone(&self.state)
    }
}

impl Default for MockSettings {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsPort for MockSettings {
    fn menu_bar_accel(&self) -> Option<String> {
        self.state.borrow().menu_bar_accel.clone()
    }

    fn set_menu_bar_accel(&mut self, accel: Option<String>) {
        self.state.borrow_mut().menu_bar_accel = accel;
    }

    fn mnemonics_enabled(&self) -> bool {
        self.state.borrow().mnemonics_enabled
    }

    fn set_mnemonics_enabled(&mut self, enabled: bool) {
        self.state.borrow_mut().mnemonics_enabled = enabled;
    }
}

/// [`AppController`] double; all state is directly readable and writable.
#[derive(Debug)]
pub struct MockApp {
    /// Accelerator policy reported to windows.
    pub accelerators_enabled: Cell<bool>,
    /// All-windows fullscreen flag.
    pub fullscreen: Cell<bool>,
    /// Number of quit requests received.
    pub quit_requests: Cell<u32>,
}

impl Default for MockApp {
    fn default() -> Self {
        Self {
            accelerators_enabled: Cell::new(true),
            fullscreen: Cell::new(false),
            quit_requests: Cell::new(0),
        }
    }
}

impl AppController for MockApp {
    fn accelerators_enabled(&self) -> bool {
        self.accelerators_enabled.get()
    }

    fn fullscreen(&self) -> bool {
        self.fullscreen.get()
    }

    fn set_fullscreen(&self, fullscreen: bool) {
        self.fullscreen.set(fullscreen);
    }

    fn maybe_quit(&self) {
        self.quit_requests.set(self.quit_requests.get() + 1);
    }

    fn application_name(&self) -> String {
        "Remote Viewer".to_string()
    }
}

/// A fresh application double behind an [`Rc`].
#[must_use]
pub fn mock_app() -> Rc<MockApp> {
    Rc::new(MockApp::default())
}

/// A [`ViewerWindow`] over fresh doubles, with the state handles tests
/// inspect.
#[must_use]
pub fn test_window() -> (
    ViewerWindow,
    Rc<RefCell<MockToolkitState>>,
    Rc<RefCell<MockSettingsState>>,
    Rc<MockApp>,
) {
    let toolkit = MockToolkit::new();
    let toolkit_state = toolkit.handle();
    let settings = MockSettings::new();
    let settings_state = settings.handle();
    let app = mock_app();
    let window = ViewerWindow::new(Box::new(toolkit), Box::new(settings), app.clone());
    (window, toolkit_state, settings_state, app)
}
