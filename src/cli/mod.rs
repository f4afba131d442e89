//! Command-line wiring for the carousel binary.

pub mod carousel_tui;
