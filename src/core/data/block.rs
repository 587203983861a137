/// A contiguous run of pixel columns claimed and rendered as one unit.
///
/// Columns span `col_min..col_max` (half-open); every row of the image
/// belongs to the block, so a block is a vertical strip of the canvas.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Block {
    pub id: usize,
    pub col_min: usize,
    pub col_max: usize,
}

impl Block {
    #[must_use]
    pub fn width(&self) -> usize {
        self.col_max - self.col_min
    }
}
