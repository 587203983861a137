pub mod block_queue;
pub mod ports;
#[allow(clippy::module_inception)]
pub mod render_blocks;

pub use block_queue::BlockQueue;
pub use ports::framebuffer::Framebuffer;
pub use render_blocks::{RenderBlocksError, RenderStats, render_blocks};
