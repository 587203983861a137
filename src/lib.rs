mod presenters;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod storage;

pub use controllers::cli_args::{RenderConfig, RenderConfigError, parse_or_exit};
pub use controllers::headless::run_headless;
pub use controllers::session::RenderSession;
pub use controllers::{IMAGE_HEIGHT, IMAGE_WIDTH};
pub use crate::core::actions::cancellation::{CancelToken, NeverCancel};
pub use crate::core::actions::render_blocks::ports::framebuffer::Framebuffer;
pub use crate::core::actions::render_blocks::render_blocks::{
    RenderBlocksError, RenderStats, render_blocks,
};
pub use crate::core::data::canvas::{Canvas, CanvasError};
pub use crate::core::data::colour_ramp::{ColourRamp, ColourRampError};
pub use crate::core::data::packed_colour::PackedColour;
pub use crate::core::data::view_params::{ViewParams, ViewParamsError};
pub use crate::core::fractals::mandelbrot::escape_depth;
pub use presenters::offscreen::OffscreenFramebuffer;
pub use storage::write_ppm::write_ppm;

#[cfg(feature = "gui")]
pub use input::gui::run_gui;
