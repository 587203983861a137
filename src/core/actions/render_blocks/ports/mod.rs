//! Port definitions for the block renderer.
//!
//! The renderer draws through these traits and never touches a concrete
//! display backend.

pub mod framebuffer;
