//! Modifier and accelerator suppression
//!
//! While the remote display holds the keyboard grab, local chrome must not
//! steal keystrokes: the menu-bar activation accelerator, the window's
//! accelerator groups and mnemonic-underline activation are all switched
//! off, and restored exactly when the grab is released.
//!
//! The save/restore is an explicit two-state machine: the saved settings
//! only exist inside the `Disabled` variant, so a second disable (or a
//! second enable) has nothing to clobber and is structurally a no-op.
//! There is no reference count; only one grab source is assumed active at
//! a time.

use super::ViewerWindow;

/// Accelerator suppression state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum ModifierState {
    /// Local accelerators are active.
    Enabled,
    /// Local accelerators are suppressed; holds the settings to restore.
    Disabled(SavedModifiers),
}

/// Toolkit settings captured when suppression began.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct SavedModifiers {
    menu_bar_accel: Option<String>,
    mnemonics_enabled: bool,
}

impl ViewerWindow {
    /// Suppresses local modifiers and accelerators.
    ///
    /// Idempotent: a no-op while already disabled.
    pub(super) fn disable_modifiers(&mut self) {
        if matches!(self.modifiers, ModifierState::Disabled(_)) {
            return;
        }

        let saved = SavedModifiers {
            menu_bar_accel: self.settings.menu_bar_accel(),
            mnemonics_enabled: self.settings.mnemonics_enabled(),
        };

        // Stops the menu-bar activation key (typically F10) from opening
        // the menu while the guest owns the keyboard.
        self.settings.set_menu_bar_accel(None);

        // Stops global accelerators like Ctrl+Q. The send-keys group stays
        // attached when the application keeps its accelerators enabled.
        for &group in &self.accel_groups {
            if self.app.accelerators_enabled() && Some(group) == self.send_keys_group {
                continue;
            }
            self.toolkit.remove_accel_group(group);
        }

        // Stops mnemonic shortcuts like Alt+F.
        self.settings.set_mnemonics_enabled(false);

        self.modifiers = ModifierState::Disabled(saved);
    }

    /// Restores the settings captured by [`Self::disable_modifiers`].
    ///
    /// Idempotent: a no-op while already enabled.
    pub(super) fn enable_modifiers(&mut self) {
        let previous = std::mem::replace(&mut self.modifiers, ModifierState::Enabled);
        let ModifierState::Disabled(saved) = previous else {
            return;
        };

        self.settings.set_menu_bar_accel(saved.menu_bar_accel);

        for &group in &self.accel_groups {
            if self.app.accelerators_enabled() && Some(group) == self.send_keys_group {
                continue;
            }
            self.toolkit.add_accel_group(group);
        }

        self.settings.set_mnemonics_enabled(saved.mnemonics_enabled);
    }

    /// Whether local accelerators are currently suppressed.
    #[must_use]
    pub fn modifiers_disabled(&self) -> bool {
        matches!(self.modifiers, ModifierState::Disabled(_))
    }
}
