pub mod cli_args;
pub mod headless;
pub mod session;

pub use cli_args::{RenderConfig, RenderConfigError, parse_or_exit};
pub use headless::run_headless;
pub use session::RenderSession;

pub const IMAGE_WIDTH: usize = 1280;
pub const IMAGE_HEIGHT: usize = 960;
