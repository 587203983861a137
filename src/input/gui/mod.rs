//! GUI input adapter for the windowed renderer.
//!
//! This module provides a windowed interface using winit for window
//! management and pixels for framebuffer rendering.

mod app;
pub mod events;

pub use app::run_gui;
