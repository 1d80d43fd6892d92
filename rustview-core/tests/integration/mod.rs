mod config_tests;
mod screenshot_tests;
