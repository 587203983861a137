//! Render session lifecycle for interactive surfaces.
//!
//! A session owns the threads that render, present and watch for exit
//! requests, and tells the surface's event loop when everything has
//! settled enough to close.

mod controller;

pub use controller::RenderSession;
