//! Windowed front end.
//!
//! winit owns the window and the event loop, `pixels` provides the wgpu
//! surface the shader draws into.

mod app;
pub mod commands;
mod events;

pub use commands::run_viewer::{RunViewerCommand, RunViewerError};
