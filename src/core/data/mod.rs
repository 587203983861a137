pub mod block;
pub mod block_partition;
pub mod canvas;
pub mod colour_ramp;
pub mod packed_colour;
pub mod view_params;

pub use block::Block;
pub use block_partition::{BlockPartition, BlockPartitionError};
pub use canvas::{Canvas, CanvasError};
pub use colour_ramp::{ColourRamp, ColourRampError};
pub use packed_colour::PackedColour;
pub use view_params::{ViewParams, ViewParamsError};
