use crate::core::actions::render_blocks::ports::framebuffer::Framebuffer;
use crate::core::data::canvas::Canvas;
use crate::core::data::packed_colour::PackedColour;
use crate::input::gui::events::GuiEvent;
use std::sync::atomic::{AtomicBool, Ordering};
use winit::event_loop::EventLoopProxy;

/// Framebuffer backed by a winit window.
///
/// Workers write into the shared canvas from their own threads; `present`
/// only wakes the event loop, which copies the canvas into the window's
/// surface on its own thread. The exit flag latches once the user closes
/// the window and is polled by the render session's watcher.
pub struct WindowFramebuffer {
    canvas: Canvas,
    exit_requested: AtomicBool,
    event_loop_proxy: EventLoopProxy<GuiEvent>,
}

impl WindowFramebuffer {
    #[must_use]
    pub fn new(canvas: Canvas, event_loop_proxy: EventLoopProxy<GuiEvent>) -> Self {
        Self {
            canvas,
            exit_requested: AtomicBool::new(false),
            event_loop_proxy,
        }
    }

    #[must_use]
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Latches the exit flag. Called by the event loop on close requests.
    pub fn request_exit(&self) {
        self.exit_requested.store(true, Ordering::Relaxed);
    }
}

impl Framebuffer for WindowFramebuffer {
    fn width(&self) -> usize {
        self.canvas.width()
    }

    fn height(&self) -> usize {
        self.canvas.height()
    }

    fn set_pixel(&self, x: usize, y: usize, colour: PackedColour) {
        self.canvas.set_pixel(x, y, colour);
    }

    fn present(&self) {
        // Send only fails once the event loop is gone, at which point
        // there is nothing left to draw on
        let _ = self.event_loop_proxy.send_event(GuiEvent::Wake);
    }

    fn poll_exit_requested(&self) -> bool {
        self.exit_requested.load(Ordering::Relaxed)
    }
}
