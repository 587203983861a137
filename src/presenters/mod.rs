//! Output surfaces the block renderer can draw to.
//!
//! Each presenter implements the renderer's framebuffer port for one
//! concrete destination: an in-memory canvas or a window.

pub mod offscreen;
#[cfg(feature = "gui")]
pub mod window;
