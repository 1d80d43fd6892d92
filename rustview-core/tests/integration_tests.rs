//! Integration tests for `RustView` core library
//!
//! This module contains integration tests that exercise screenshot export
//! and settings persistence against the real filesystem.

// Allow common test patterns that Clippy warns about
#![allow(clippy::redundant_clone)]
#![allow(clippy::similar_names)]
#![allow(clippy::too_many_lines)]

mod integration;
