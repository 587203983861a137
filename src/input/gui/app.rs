//! Main GUI application loop.

use crate::controllers::cli_args::RenderConfig;
use crate::controllers::session::RenderSession;
use crate::controllers::{IMAGE_HEIGHT, IMAGE_WIDTH};
use crate::core::actions::render_blocks::ports::framebuffer::Framebuffer;
use crate::core::data::canvas::Canvas;
use crate::core::data::colour_ramp::ColourRamp;
use crate::core::data::view_params::ViewParams;
use crate::input::gui::events::GuiEvent;
use crate::presenters::window::WindowFramebuffer;
use pixels::{Pixels, SurfaceTexture};
use std::sync::Arc;
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, WindowEvent},
    event_loop::EventLoopBuilder,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowBuilder},
};

/// Runs the windowed renderer.
///
/// The render session paints into a shared canvas from its own threads
/// and wakes this loop whenever the window is worth refreshing. Closing
/// the window (or pressing Escape) latches an exit request; the loop
/// keeps drawing until the workers have stopped at a block boundary,
/// then shuts the session down and returns.
pub fn run_gui(config: RenderConfig) {
    let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event()
        .build()
        .expect("Failed to create event loop");

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Mandelbrot")
            .with_inner_size(LogicalSize::new(IMAGE_WIDTH as f64, IMAGE_HEIGHT as f64))
            .with_resizable(false)
            .build(&event_loop)
            .expect("Failed to create window"),
    ));

    let size = window.inner_size();
    let surface_texture = SurfaceTexture::new(size.width, size.height, window);
    let mut pixels = Pixels::new(IMAGE_WIDTH as u32, IMAGE_HEIGHT as u32, surface_texture)
        .expect("Failed to create pixels surface");

    let canvas = Canvas::new(IMAGE_WIDTH, IMAGE_HEIGHT).expect("render surface is non-zero sized");
    let framebuffer = Arc::new(WindowFramebuffer::new(canvas, event_loop.create_proxy()));

    let session = match RenderSession::start(
        Arc::clone(&framebuffer) as Arc<dyn Framebuffer>,
        ViewParams::default(),
        ColourRamp::default(),
        config,
    ) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("Failed to start render threads: {err}");
            std::process::exit(1);
        }
    };

    // Track whether we need to redraw
    let mut redraw_pending = true;

    event_loop
        .run(move |event, elwt| {
            match event {
                Event::UserEvent(GuiEvent::Wake) => {
                    redraw_pending = true;
                }
                Event::WindowEvent {
                    ref event,
                    window_id,
                } if window_id == window.id() => match event {
                    WindowEvent::CloseRequested => {
                        framebuffer.request_exit();
                    }
                    WindowEvent::KeyboardInput {
                        event: key_event, ..
                    } => {
                        if key_event.physical_key == PhysicalKey::Code(KeyCode::Escape)
                            && key_event.state == ElementState::Pressed
                        {
                            framebuffer.request_exit();
                        }
                    }
                    WindowEvent::RedrawRequested => {
                        redraw_pending = false;

                        framebuffer.canvas().write_rgba_into(pixels.frame_mut());

                        if let Err(e) = pixels.render() {
                            eprintln!("Render error: {e}");
                            framebuffer.request_exit();
                            elwt.exit();
                        }
                    }
                    WindowEvent::Resized(size) => {
                        if size.width > 0 && size.height > 0 {
                            if let Err(e) = pixels.resize_surface(size.width, size.height) {
                                eprintln!("Render error: {e}");
                                framebuffer.request_exit();
                                elwt.exit();
                            }
                            redraw_pending = true;
                        }
                    }
                    _ => {}
                },
                Event::AboutToWait => {
                    // The render thread has already reported the cause
                    if session.render_failed() {
                        std::process::exit(1);
                    }

                    // The window outlives the render and the render outlives
                    // the window's close request; leave only once both are in
                    if session.ready_to_close() {
                        elwt.exit();
                        return;
                    }

                    // Only request redraw if state changed
                    if redraw_pending {
                        window.request_redraw();
                    }
                }
                _ => {}
            }
        })
        .expect("Event loop error");
}
