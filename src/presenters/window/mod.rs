pub mod framebuffer;

pub use framebuffer::WindowFramebuffer;
