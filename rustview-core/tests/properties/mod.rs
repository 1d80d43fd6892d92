mod keybinding_tests;
mod zoom_tests;
