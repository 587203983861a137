use crate::controllers::cli_args::RenderConfig;
use crate::core::actions::render_blocks::ports::framebuffer::Framebuffer;
use crate::core::actions::render_blocks::render_blocks;
use crate::core::data::colour_ramp::ColourRamp;
use crate::core::data::view_params::ViewParams;
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

const PRESENT_INTERVAL: Duration = Duration::from_millis(40);
const EXIT_POLL_INTERVAL: Duration = Duration::from_millis(10);

struct SessionShared {
    abort: AtomicBool,
    stop: AtomicBool,
    render_finished: AtomicBool,
    render_failed: AtomicBool,
    exit_observed: AtomicBool,
}

/// Runs one render against a framebuffer and keeps its surface alive.
///
/// Three threads cooperate: a render thread drives the block workers, a
/// presenter pushes the framebuffer to the surface at a steady cadence,
/// and a watcher polls the surface for an exit request. Closing the
/// surface aborts the render at its next block boundary, but the session
/// is only ready to close once the render has settled AND the exit was
/// observed, in either order.
pub struct RenderSession {
    shared: Arc<SessionShared>,
    render: Option<JoinHandle<()>>,
    presenter: Option<JoinHandle<()>>,
    watcher: Option<JoinHandle<()>>,
}

impl RenderSession {
    pub fn start(
        framebuffer: Arc<dyn Framebuffer>,
        view: ViewParams,
        ramp: ColourRamp,
        config: RenderConfig,
    ) -> io::Result<Self> {
        let shared = Arc::new(SessionShared {
            abort: AtomicBool::new(false),
            stop: AtomicBool::new(false),
            render_finished: AtomicBool::new(false),
            render_failed: AtomicBool::new(false),
            exit_observed: AtomicBool::new(false),
        });

        let render = {
            let shared = Arc::clone(&shared);
            let framebuffer = Arc::clone(&framebuffer);
            thread::Builder::new()
                .name("render".into())
                .spawn(move || render_loop(&shared, &*framebuffer, view, &ramp, config))?
        };

        let presenter = {
            let shared_for_thread = Arc::clone(&shared);
            let framebuffer = Arc::clone(&framebuffer);
            let spawned = thread::Builder::new()
                .name("presenter".into())
                .spawn(move || present_loop(&shared_for_thread, &*framebuffer));

            match spawned {
                Ok(handle) => handle,
                Err(err) => {
                    stop_threads(&shared);
                    let _ = render.join();
                    return Err(err);
                }
            }
        };

        let watcher = {
            let shared_for_thread = Arc::clone(&shared);
            let spawned = thread::Builder::new()
                .name("exit-watcher".into())
                .spawn(move || watch_loop(&shared_for_thread, &*framebuffer));

            match spawned {
                Ok(handle) => handle,
                Err(err) => {
                    stop_threads(&shared);
                    let _ = render.join();
                    let _ = presenter.join();
                    return Err(err);
                }
            }
        };

        Ok(Self {
            shared,
            render: Some(render),
            presenter: Some(presenter),
            watcher: Some(watcher),
        })
    }

    #[must_use]
    pub fn render_finished(&self) -> bool {
        self.shared.render_finished.load(Ordering::Acquire)
    }

    /// True if the render thread gave up on an error, such as a failed
    /// worker spawn, rather than finishing or being cancelled.
    #[must_use]
    pub fn render_failed(&self) -> bool {
        if self.shared.render_failed.load(Ordering::Acquire) {
            return true;
        }

        // A render thread that died without reporting completion panicked.
        // Check the handle first: its exit happens after the final store.
        self.render
            .as_ref()
            .is_some_and(|handle| handle.is_finished())
            && !self.shared.render_finished.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn exit_observed(&self) -> bool {
        self.shared.exit_observed.load(Ordering::Acquire)
    }

    /// True once the render has settled and the user has asked to close.
    /// Neither event alone is enough: an early close waits for the workers
    /// to stop, and a finished render keeps the surface up until the user
    /// closes it.
    #[must_use]
    pub fn ready_to_close(&self) -> bool {
        self.shared.render_finished.load(Ordering::Acquire)
            && self.shared.exit_observed.load(Ordering::Acquire)
    }

    /// Stops all session threads and waits for them to finish.
    pub fn shutdown(&mut self) {
        stop_threads(&self.shared);

        for handle in [
            self.render.take(),
            self.presenter.take(),
            self.watcher.take(),
        ]
        .into_iter()
        .flatten()
        {
            let _ = handle.join();
        }
    }
}

impl Drop for RenderSession {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn stop_threads(shared: &SessionShared) {
    shared.abort.store(true, Ordering::Release);
    shared.stop.store(true, Ordering::Release);
}

fn render_loop(
    shared: &SessionShared,
    framebuffer: &dyn Framebuffer,
    view: ViewParams,
    ramp: &ColourRamp,
    config: RenderConfig,
) {
    let cancel =
        || shared.abort.load(Ordering::Relaxed) || shared.stop.load(Ordering::Relaxed);

    let start = Instant::now();
    match render_blocks(
        framebuffer,
        &view,
        ramp,
        config.workers(),
        config.blocks(),
        &cancel,
    ) {
        Ok(stats) if stats.is_complete() => {
            println!(
                "Rendered {}/{} blocks in {:?}",
                stats.blocks_rendered,
                stats.blocks_total,
                start.elapsed()
            );
        }
        Ok(stats) => {
            println!(
                "Render stopped early: {}/{} blocks in {:?}",
                stats.blocks_rendered,
                stats.blocks_total,
                start.elapsed()
            );
        }
        Err(err) => {
            eprintln!("Render failed: {err}");
            shared.render_failed.store(true, Ordering::Release);
        }
    }

    shared.render_finished.store(true, Ordering::Release);
}

fn present_loop(shared: &SessionShared, framebuffer: &dyn Framebuffer) {
    while !shared.stop.load(Ordering::Acquire) {
        framebuffer.present();
        thread::sleep(PRESENT_INTERVAL);
    }

    // One last copy so the surface shows the final pixel state
    framebuffer.present();
}

fn watch_loop(shared: &SessionShared, framebuffer: &dyn Framebuffer) {
    while !shared.stop.load(Ordering::Acquire) {
        if framebuffer.poll_exit_requested() {
            shared.exit_observed.store(true, Ordering::Release);
            shared.abort.store(true, Ordering::Release);
            return;
        }

        thread::sleep(EXIT_POLL_INTERVAL);
    }
}
