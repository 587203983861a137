use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::render_blocks::block_queue::BlockQueue;
use crate::core::actions::render_blocks::ports::framebuffer::Framebuffer;
use crate::core::data::block::Block;
use crate::core::data::block_partition::{BlockPartition, BlockPartitionError};
use crate::core::data::colour_ramp::ColourRamp;
use crate::core::data::view_params::ViewParams;
use crate::core::fractals::mandelbrot::escape_depth;
use crate::core::util::pixel_to_plane::{column_to_re, row_to_im};
use std::error::Error;
use std::fmt;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

#[derive(Debug)]
pub enum RenderBlocksError {
    ZeroWorkers,
    Partition(BlockPartitionError),
    Spawn(io::Error),
}

impl fmt::Display for RenderBlocksError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWorkers => write!(f, "worker count must be at least 1"),
            Self::Partition(err) => write!(f, "block partition error: {err}"),
            Self::Spawn(err) => write!(f, "failed to spawn render worker: {err}"),
        }
    }
}

impl Error for RenderBlocksError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ZeroWorkers => None,
            Self::Partition(err) => Some(err),
            Self::Spawn(err) => Some(err),
        }
    }
}

impl From<BlockPartitionError> for RenderBlocksError {
    fn from(err: BlockPartitionError) -> Self {
        Self::Partition(err)
    }
}

/// What a render run actually painted.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderStats {
    pub blocks_rendered: usize,
    pub blocks_total: usize,
}

impl RenderStats {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.blocks_rendered == self.blocks_total
    }
}

/// Renders the view onto the framebuffer with a pool of block-claiming workers.
///
/// The image is split into `blocks` vertical strips which `workers` scoped
/// threads claim and paint until the queue runs dry or `cancel` fires.
/// Cancellation is not an error; the returned stats say how many blocks got
/// painted. If a worker thread cannot be spawned, the workers already running
/// stop at their next block boundary and the spawn error is returned.
pub fn render_blocks<F, C>(
    framebuffer: &F,
    view: &ViewParams,
    ramp: &ColourRamp,
    workers: usize,
    blocks: usize,
    cancel: &C,
) -> Result<RenderStats, RenderBlocksError>
where
    F: Framebuffer + ?Sized,
    C: CancelToken + ?Sized,
{
    if workers == 0 {
        return Err(RenderBlocksError::ZeroWorkers);
    }

    let partition = BlockPartition::new(framebuffer.width(), blocks)?;
    let queue = BlockQueue::new(partition.blocks().to_vec());
    let spawn_failed = AtomicBool::new(false);
    let guard = || cancel.is_cancelled() || spawn_failed.load(Ordering::Relaxed);

    let blocks_rendered = thread::scope(|scope| -> Result<usize, RenderBlocksError> {
        let mut handles = Vec::with_capacity(workers);

        for worker_id in 0..workers {
            let spawned = thread::Builder::new()
                .name(format!("render-worker-{worker_id}"))
                .spawn_scoped(scope, || worker_loop(&queue, framebuffer, view, ramp, &guard));

            match spawned {
                Ok(handle) => handles.push(handle),
                Err(err) => {
                    spawn_failed.store(true, Ordering::Relaxed);
                    return Err(RenderBlocksError::Spawn(err));
                }
            }
        }

        Ok(handles
            .into_iter()
            .map(|handle| handle.join().expect("render worker panicked"))
            .sum())
    })?;

    Ok(RenderStats {
        blocks_rendered,
        blocks_total: queue.total(),
    })
}

fn worker_loop<F, C>(
    queue: &BlockQueue,
    framebuffer: &F,
    view: &ViewParams,
    ramp: &ColourRamp,
    cancel: &C,
) -> usize
where
    F: Framebuffer + ?Sized,
    C: CancelToken + ?Sized,
{
    let mut rendered = 0;

    while !cancel.is_cancelled() {
        let Some(block) = queue.claim() else {
            break;
        };

        render_block(framebuffer, view, ramp, block);
        rendered += 1;
    }

    rendered
}

fn render_block<F: Framebuffer + ?Sized>(
    framebuffer: &F,
    view: &ViewParams,
    ramp: &ColourRamp,
    block: Block,
) {
    let width = framebuffer.width();
    let height = framebuffer.height();

    for col in block.col_min..block.col_max {
        let re = column_to_re(view, width, col);

        for row in 0..height {
            let im = row_to_im(view, height, row);
            let depth = escape_depth(re, im, view.max_iterations());

            framebuffer.set_pixel(col, row, ramp.colour_for(depth, view.colour_density()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::cancellation::NeverCancel;
    use crate::core::data::canvas::Canvas;
    use crate::core::data::packed_colour::PackedColour;

    struct CanvasFramebuffer {
        canvas: Canvas,
    }

    impl CanvasFramebuffer {
        fn new(width: usize, height: usize) -> Self {
            Self {
                canvas: Canvas::new(width, height).unwrap(),
            }
        }
    }

    impl Framebuffer for CanvasFramebuffer {
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

    /// Flags the moment any pixel lands, so a cancel token can fire
    /// mid-render while a block is being painted.
    struct FirstPixelFramebuffer {
        canvas: Canvas,
        painted: AtomicBool,
    }

    impl Framebuffer for FirstPixelFramebuffer {
        fn width(&self) -> usize {
            self.canvas.width()
        }

        fn height(&self) -> usize {
            self.canvas.height()
        }

        fn set_pixel(&self, x: usize, y: usize, colour: PackedColour) {
            self.painted.store(true, Ordering::Relaxed);
            self.canvas.set_pixel(x, y, colour);
        }

        fn present(&self) {}

        fn poll_exit_requested(&self) -> bool {
            false
        }
    }

    fn whole_set_view() -> ViewParams {
        ViewParams::new(0.0, 0.0, 2.0, 100, 10.0).unwrap()
    }

    fn red_to_blue_ramp() -> ColourRamp {
        ColourRamp::from_anchors(
            &[
                PackedColour::from_rgb(255, 0, 0),
                PackedColour::from_rgb(0, 0, 255),
            ],
            8,
        )
        .unwrap()
    }

    #[test]
    fn test_zero_workers_is_rejected() {
        let framebuffer = CanvasFramebuffer::new(8, 8);

        let result = render_blocks(
            &framebuffer,
            &whole_set_view(),
            &red_to_blue_ramp(),
            0,
            4,
            &NeverCancel,
        );

        assert!(matches!(result, Err(RenderBlocksError::ZeroWorkers)));
    }

    #[test]
    fn test_zero_blocks_is_rejected() {
        let framebuffer = CanvasFramebuffer::new(8, 8);

        let result = render_blocks(
            &framebuffer,
            &whole_set_view(),
            &red_to_blue_ramp(),
            2,
            0,
            &NeverCancel,
        );

        assert!(matches!(
            result,
            Err(RenderBlocksError::Partition(
                BlockPartitionError::ZeroBlockCount
            ))
        ));
    }

    #[test]
    fn test_full_render_reports_complete_stats() {
        let framebuffer = CanvasFramebuffer::new(16, 8);

        let stats = render_blocks(
            &framebuffer,
            &whole_set_view(),
            &red_to_blue_ramp(),
            2,
            5,
            &NeverCancel,
        )
        .unwrap();

        assert_eq!(
            stats,
            RenderStats {
                blocks_rendered: 5,
                blocks_total: 5
            }
        );
        assert!(stats.is_complete());
    }

    #[test]
    fn test_image_centre_stays_black_and_escaping_corner_is_coloured() {
        let framebuffer = CanvasFramebuffer::new(5, 5);

        render_blocks(
            &framebuffer,
            &whole_set_view(),
            &red_to_blue_ramp(),
            2,
            2,
            &NeverCancel,
        )
        .unwrap();

        // Centre pixel samples c = (0, 0), which never escapes
        assert_eq!(framebuffer.canvas.pixel(2, 2), Some(PackedColour::BLACK));
        // Corner pixel samples c = (2, 2), which escapes on step 0
        assert_eq!(
            framebuffer.canvas.pixel(4, 4),
            Some(PackedColour::from_rgb(255, 0, 0))
        );
    }

    #[test]
    fn test_surplus_workers_produce_the_same_image() {
        let reference = CanvasFramebuffer::new(32, 24);
        let crowded = CanvasFramebuffer::new(32, 24);
        let view = whole_set_view();
        let ramp = red_to_blue_ramp();

        render_blocks(&reference, &view, &ramp, 1, 2, &NeverCancel).unwrap();
        render_blocks(&crowded, &view, &ramp, 8, 2, &NeverCancel).unwrap();

        assert_eq!(
            crowded.canvas.snapshot_rgb(),
            reference.canvas.snapshot_rgb()
        );
    }

    #[test]
    fn test_more_blocks_than_columns_produces_the_same_image() {
        let reference = CanvasFramebuffer::new(8, 8);
        let oversplit = CanvasFramebuffer::new(8, 8);
        let view = whole_set_view();
        let ramp = red_to_blue_ramp();

        render_blocks(&reference, &view, &ramp, 1, 1, &NeverCancel).unwrap();
        render_blocks(&oversplit, &view, &ramp, 3, 16, &NeverCancel).unwrap();

        assert_eq!(
            oversplit.canvas.snapshot_rgb(),
            reference.canvas.snapshot_rgb()
        );
    }

    #[test]
    fn test_cancellation_finishes_the_block_in_progress_and_claims_no_more() {
        // A far-off view makes every pixel escape at depth 0, so painted
        // pixels are red and untouched pixels stay black.
        let view = ViewParams::new(10.0, 10.0, 1.0, 50, 10.0).unwrap();
        let framebuffer = FirstPixelFramebuffer {
            canvas: Canvas::new(4, 3).unwrap(),
            painted: AtomicBool::new(false),
        };
        let cancel = || framebuffer.painted.load(Ordering::Relaxed);

        let stats = render_blocks(&framebuffer, &view, &red_to_blue_ramp(), 1, 2, &cancel).unwrap();

        assert_eq!(stats.blocks_rendered, 1);
        assert!(!stats.is_complete());

        let red = PackedColour::from_rgb(255, 0, 0);
        for row in 0..3 {
            // First block fully painted despite the token firing mid-block
            assert_eq!(framebuffer.canvas.pixel(0, row), Some(red));
            assert_eq!(framebuffer.canvas.pixel(1, row), Some(red));
            // Second block never claimed
            assert_eq!(framebuffer.canvas.pixel(2, row), Some(PackedColour::BLACK));
            assert_eq!(framebuffer.canvas.pixel(3, row), Some(PackedColour::BLACK));
        }
    }

    #[test]
    fn test_cancelled_before_start_paints_nothing() {
        let framebuffer = CanvasFramebuffer::new(6, 4);
        let cancel = || true;

        let stats = render_blocks(
            &framebuffer,
            &whole_set_view(),
            &red_to_blue_ramp(),
            2,
            3,
            &cancel,
        )
        .unwrap();

        assert_eq!(stats.blocks_rendered, 0);
        assert_eq!(stats.blocks_total, 3);
        assert_eq!(framebuffer.canvas.snapshot_rgb(), vec![0; 6 * 4 * 3]);
    }
}
