//! Window title composition
//!
//! The title is a pure function of window state: an optional pointer-grab
//! hint, an optional subtitle, and the application name.

/// Shown in the grab hint when no release binding is configured.
pub const DEFAULT_RELEASE_ACCEL_LABEL: &str = "Ctrl+Alt";

/// The hint shown while the pointer is grabbed.
///
/// `accel_label` is the display label of the release-cursor binding;
/// [`DEFAULT_RELEASE_ACCEL_LABEL`] is used when none is configured.
#[must_use]
pub fn release_pointer_hint(accel_label: Option<&str>) -> String {
    format!(
        "(Press {} to release pointer)",
        accel_label.unwrap_or(DEFAULT_RELEASE_ACCEL_LABEL)
    )
}

/// Composes the window title.
///
/// The shape is `"<hint> <subtitle> - <app>"`; the separating space only
/// appears when both hint and subtitle are present, and a window with
/// neither shows the bare application name.
#[must_use]
pub fn compose_title(hint: Option<&str>, subtitle: Option<&str>, app_name: &str) -> String {
    if hint.is_none() && subtitle.is_none() {
        return app_name.to_string();
    }
    format!(
        "{}{}{} - {}",
        hint.unwrap_or(""),
        if hint.is_some() && subtitle.is_some() {
            " "
        } else {
            ""
        },
        subtitle.unwrap_or(""),
        app_name
    )
}
