//! Input adapters for the renderer.
//!
//! This module contains adapters that receive input from the outside
//! world, currently just the GUI window.

#[cfg(feature = "gui")]
pub mod gui;
