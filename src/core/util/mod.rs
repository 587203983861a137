pub mod pixel_to_plane;

pub use pixel_to_plane::{column_to_re, row_to_im};
