use crate::params::*;
use crate::{Error, PackedBlock, Raster, Result};

/// All 8 glyphs of a frame, indexed row-major (0 = top-left, 7 =
/// bottom-right).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PackedFrame {
    blocks: [PackedBlock; BLOCKS],
}

impl PackedFrame {
    /// Packs `img`, which must have exactly the frame geometry.
    pub fn new(img: &Raster) -> Result<Self> {
        if (img.width(), img.height()) != (FRAME_WIDTH, FRAME_HEIGHT) {
            return Err(Error::GeometryMismatch {
                expected: (FRAME_WIDTH, FRAME_HEIGHT),
                actual: (img.width(), img.height()),
            });
        }

        let mut blocks = [PackedBlock::default(); BLOCKS];

        for by in 0..BLOCK_ROWS {
            for bx in 0..BLOCK_COLS {
                blocks[block_idx(bx, by)] = PackedBlock::new(img, bx, by);
            }
        }

        Ok(Self { blocks })
    }

    pub fn from_blocks(blocks: [PackedBlock; BLOCKS]) -> Self {
        Self { blocks }
    }

    pub fn block(&self, idx: usize) -> &PackedBlock {
        &self.blocks[idx]
    }

    pub fn blocks(&self) -> impl Iterator<Item = &PackedBlock> + '_ {
        self.blocks.iter()
    }

    /// The frame as it would be sent without any delta compression.
    pub fn bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.blocks().flat_map(|block| block.bytes().iter().copied())
    }
}

/// Packs a decoded frame into its 8 glyphs.
pub fn pack(img: &Raster) -> Result<PackedFrame> {
    PackedFrame::new(img)
}
