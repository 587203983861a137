use crate::core::data::block::Block;
use std::{error::Error, fmt};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BlockPartitionError {
    ZeroBlockCount,
}

impl fmt::Display for BlockPartitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroBlockCount => {
                write!(f, "block count must be at least 1")
            }
        }
    }
}

impl Error for BlockPartitionError {}

/// Splits an image into vertical strips of whole columns.
///
/// Every column belongs to exactly one block: the stride is
/// `image_width / block_count` and the final block stretches to the
/// image edge, absorbing the division remainder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockPartition {
    blocks: Vec<Block>,
}

impl BlockPartition {
    pub fn new(image_width: usize, block_count: usize) -> Result<Self, BlockPartitionError> {
        if block_count == 0 {
            return Err(BlockPartitionError::ZeroBlockCount);
        }

        let stride = image_width / block_count;
        let mut blocks = Vec::with_capacity(block_count);

        for id in 0..block_count {
            let col_min = id * stride;
            let col_max = if id == block_count - 1 {
                image_width
            } else {
                (id + 1) * stride
            };

            blocks.push(Block {
                id,
                col_min,
                col_max,
            });
        }

        Ok(Self { blocks })
    }

    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }
}
