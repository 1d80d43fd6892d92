//! Property tests for zoom level math and the controller's clamping

use proptest::prelude::*;
use rustview_core::testing::{MockDisplay, test_window};
use rustview_core::window::{
    MAX_ZOOM_LEVEL, MIN_ZOOM_LEVEL, NORMAL_ZOOM_LEVEL, ZOOM_STEP, clamp_zoom_level,
    minimal_zoom_level, real_zoom_level,
};

proptest! {
    /// Clamping always lands inside the accepted range and is idempotent
    #[test]
    fn clamp_stays_within_bounds(level in any::<i32>()) {
        let clamped = clamp_zoom_level(level);
        prop_assert!((MIN_ZOOM_LEVEL..=MAX_ZOOM_LEVEL).contains(&clamped));
        prop_assert_eq!(clamp_zoom_level(clamped), clamped);
    }

    /// The minimal zoom level is a step multiple between the minimum and
    /// the nominal level
    #[test]
    fn minimal_zoom_is_a_step_multiple_in_range(
        min_width in 1u32..,
        min_height in 1u32..,
        desktop_width in 1u32..,
        desktop_height in 1u32..,
    ) {
        let level = minimal_zoom_level(min_width, min_height, desktop_width, desktop_height);
        prop_assert!((MIN_ZOOM_LEVEL..=NORMAL_ZOOM_LEVEL).contains(&level));
        prop_assert_eq!(level % ZOOM_STEP, 0);
    }

    /// A larger minimum size never lowers the minimal zoom level
    #[test]
    fn minimal_zoom_grows_with_minimum_size(
        min_width in 1u32..=u32::MAX / 2,
        width_growth in 0u32..=u32::MAX / 2,
        min_height in 1u32..,
        desktop_width in 1u32..,
        desktop_height in 1u32..,
    ) {
        let smaller = minimal_zoom_level(min_width, min_height, desktop_width, desktop_height);
        let larger = minimal_zoom_level(
            min_width + width_growth,
            min_height,
            desktop_width,
            desktop_height,
        );
        prop_assert!(larger >= smaller);
    }

    /// A larger desktop never raises the minimal zoom level
    #[test]
    fn minimal_zoom_shrinks_with_desktop_size(
        min_width in 1u32..,
        min_height in 1u32..,
        desktop_width in 1u32..=u32::MAX / 2,
        width_growth in 0u32..=u32::MAX / 2,
        desktop_height in 1u32..,
    ) {
        let smaller_desktop =
            minimal_zoom_level(min_width, min_height, desktop_width, desktop_height);
        let larger_desktop = minimal_zoom_level(
            min_width,
            min_height,
            desktop_width + width_growth,
            desktop_height,
        );
        prop_assert!(larger_desktop <= smaller_desktop);
    }

    /// The realized level scales linearly with the allocation
    #[test]
    fn real_zoom_is_nonnegative_and_exact_at_native(
        desktop_width in 1u32..,
        allocated in any::<u32>(),
    ) {
        prop_assert!(real_zoom_level(allocated, desktop_width) >= 0);
        prop_assert_eq!(real_zoom_level(desktop_width, desktop_width), NORMAL_ZOOM_LEVEL);
    }

    /// Whatever level is requested, the controller's stored level honours
    /// both the global bounds and the attached display's minimum
    #[test]
    fn controller_zoom_honours_bounds_and_minimum(
        requested in any::<i32>(),
        desktop_width in 1u32..,
        desktop_height in 1u32..,
    ) {
        let (mut window, _toolkit, _settings, _app) = test_window();
        window.set_display(Some(Box::new(MockDisplay::new(
            desktop_width,
            desktop_height,
        ))));

        window.set_zoom_level(requested);
        let level = window.zoom_level();
        prop_assert!((MIN_ZOOM_LEVEL..=MAX_ZOOM_LEVEL).contains(&level));
        prop_assert!(level >= window.minimal_zoom_level());
    }
}
