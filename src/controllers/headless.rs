use crate::controllers::cli_args::RenderConfig;
use crate::controllers::{IMAGE_HEIGHT, IMAGE_WIDTH};
use crate::core::actions::cancellation::NeverCancel;
use crate::core::actions::render_blocks::render_blocks;
use crate::core::data::colour_ramp::ColourRamp;
use crate::core::data::view_params::ViewParams;
use crate::presenters::offscreen::OffscreenFramebuffer;
use crate::storage::write_ppm::write_ppm;
use std::path::Path;
use std::time::Instant;

/// Renders the default view at full size and saves it next to the binary.
pub fn run_headless(config: RenderConfig) -> Result<(), Box<dyn std::error::Error>> {
    render_and_save(config, IMAGE_WIDTH, IMAGE_HEIGHT, "mandelbrot.ppm")
}

fn render_and_save(
    config: RenderConfig,
    width: usize,
    height: usize,
    filepath: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let framebuffer = OffscreenFramebuffer::new(width, height)?;
    let view = ViewParams::default();
    let ramp = ColourRamp::default();

    println!("Rendering Mandelbrot set...");
    println!("Image size: {}x{}", width, height);
    println!("Max iterations: {}", view.max_iterations());
    println!("Workers: {}", config.workers());
    println!("Blocks: {}", config.blocks());

    let start = Instant::now();
    let stats = render_blocks(
        &framebuffer,
        &view,
        &ramp,
        config.workers(),
        config.blocks(),
        &NeverCancel,
    )?;
    let duration = start.elapsed();

    println!("Duration:   {:?}", duration);
    println!(
        "Blocks:     {}/{}",
        stats.blocks_rendered, stats.blocks_total
    );

    write_ppm(framebuffer.canvas(), filepath.as_ref())?;
    println!("Saved to {}", filepath.as_ref().display());

    Ok(())
}
