use crate::core::data::block::Block;
use std::sync::Mutex;

/// Hands out blocks to workers, each block exactly once, in ascending order.
///
/// A single mutex-guarded cursor is all the coordination the workers need:
/// whoever takes the lock next claims the next unclaimed block.
#[derive(Debug)]
pub struct BlockQueue {
    blocks: Vec<Block>,
    cursor: Mutex<usize>,
}

impl BlockQueue {
    #[must_use]
    pub fn new(blocks: Vec<Block>) -> Self {
        Self {
            blocks,
            cursor: Mutex::new(0),
        }
    }

    /// Claims the next block, or `None` once every block has been handed out.
    pub fn claim(&self) -> Option<Block> {
        let mut cursor = self.cursor.lock().expect("block queue mutex poisoned");
        let block = self.blocks.get(*cursor).copied()?;
        *cursor += 1;

        Some(block)
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.blocks.len()
    }
}
