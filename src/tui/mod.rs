//! Terminal user interface hosting the review carousel.
//!
//! The TUI follows the Model-View-Update (MVU) pattern of bubbletea-rs:
//!
//! - **Model**: application state in [`app::CarouselApp`]
//! - **View**: string rendering in each component's `view()` method
//! - **Update**: message-driven state transitions in `update()`
//!
//! # Modules
//!
//! - [`app`]: main application model and entry point
//! - [`messages`]: message types for the update loop
//! - [`components`]: card and carousel rendering
//! - [`input`]: key-to-message mapping
//!
//! # Startup context
//!
//! bubbletea-rs's `Model::init()` is a static function, so the gateway and
//! avatar service are stored at module level. Call [`set_fetch_context`]
//! before starting the program and `CarouselApp::init()` will pick them up
//! and issue the mount-time fetch.

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
mod storage;

pub use app::CarouselApp;
pub use storage::{set_fetch_context, set_initial_terminal_size, set_telemetry_sink};
