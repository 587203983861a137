use crate::core::actions::render_blocks::ports::framebuffer::Framebuffer;
use crate::core::data::canvas::{Canvas, CanvasError};
use crate::core::data::packed_colour::PackedColour;

/// Framebuffer with no display surface behind it.
///
/// Rendered pixels land in an in-memory canvas, presents are no-ops and
/// nobody ever asks it to close. Backs the headless controller, which
/// snapshots the canvas once the render is done.
#[derive(Debug)]
pub struct OffscreenFramebuffer {
    canvas: Canvas,
}

impl OffscreenFramebuffer {
    pub fn new(width: usize, height: usize) -> Result<Self, CanvasError> {
        Ok(Self {
            canvas: Canvas::new(width, height)?,
        })
    }

    #[must_use]
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }
}

impl Framebuffer for OffscreenFramebuffer {
    fn width(&self) -> usize {
        self.canvas.width()
    }

    fn height(&self) -> usize {
        self.canvas.height()
    }

    fn set_pixel(&self, x: usize, y: usize, colour: PackedColour) {
        self.canvas.set_pixel(x, y, colour);
    }

    fn present(&self) {}

    fn poll_exit_requested(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_through_the_port_land_in_the_canvas() {
        let framebuffer = OffscreenFramebuffer::new(4, 4).unwrap();
        let colour = PackedColour::from_rgb(10, 20, 30);

        framebuffer.set_pixel(1, 2, colour);

        assert_eq!(framebuffer.canvas().pixel(1, 2), Some(colour));
    }

    #[test]
    fn test_never_reports_an_exit_request() {
        let framebuffer = OffscreenFramebuffer::new(2, 2).unwrap();

        framebuffer.present();

        assert!(!framebuffer.poll_exit_requested());
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        assert!(matches!(
            OffscreenFramebuffer::new(0, 2),
            Err(CanvasError::ZeroSized { .. })
        ));
    }
}
