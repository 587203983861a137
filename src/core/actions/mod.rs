pub mod cancellation;
pub mod render_blocks;

pub use cancellation::{CancelToken, NeverCancel};
