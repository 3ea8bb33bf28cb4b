//! Fixed frame geometry.
//!
//! The target display exposes 8 user-defined 5x8 glyphs laid out as two rows
//! of four, with a single blank pixel column between neighbouring glyphs.
//! None of these numbers are configurable: the player depends on them.

pub const BLOCK_WIDTH: u32 = 5;
pub const BLOCK_HEIGHT: u32 = 8;

pub const BLOCK_ROWS: u32 = 2;
pub const BLOCK_COLS: u32 = 4;

/// Blank pixel columns between two horizontally adjacent blocks.
pub const BLOCK_GAP: u32 = 1;

pub const FRAME_WIDTH: u32 = BLOCK_COLS * BLOCK_WIDTH + (BLOCK_COLS - 1) * BLOCK_GAP;
pub const FRAME_HEIGHT: u32 = BLOCK_ROWS * BLOCK_HEIGHT;

pub const BLOCKS: usize = (BLOCK_ROWS * BLOCK_COLS) as usize;
pub const BLOCK_BYTES: usize = (BLOCK_WIDTH * BLOCK_HEIGHT) as usize / 8;

/// Size of a frame if it was sent without any delta compression.
pub const FRAME_BYTES: usize = BLOCKS * BLOCK_BYTES;

pub(crate) fn block_x0(bx: u32) -> u32 {
    bx * (BLOCK_WIDTH + BLOCK_GAP)
}

pub(crate) fn block_x1(bx: u32) -> u32 {
    block_x0(bx) + BLOCK_WIDTH
}

pub(crate) fn block_y0(by: u32) -> u32 {
    by * BLOCK_HEIGHT
}

pub(crate) fn block_y1(by: u32) -> u32 {
    block_y0(by) + BLOCK_HEIGHT
}

pub(crate) fn block_idx(bx: u32, by: u32) -> usize {
    (by * BLOCK_COLS + bx) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry() {
        assert_eq!(FRAME_WIDTH, 23);
        assert_eq!(FRAME_HEIGHT, 16);
        assert_eq!(BLOCKS, 8);
        assert_eq!(BLOCK_BYTES, 5);
        assert_eq!(FRAME_BYTES, 40);
    }

    #[test]
    fn block_bounds_skip_gap_columns() {
        let xs: Vec<_> = (0..BLOCK_COLS).map(|bx| (block_x0(bx), block_x1(bx))).collect();

        assert_eq!(xs, [(0, 5), (6, 11), (12, 17), (18, 23)]);
        assert_eq!((block_y0(1), block_y1(1)), (8, 16));
        assert_eq!(block_x1(BLOCK_COLS - 1), FRAME_WIDTH);
    }

    #[test]
    fn block_indices_are_row_major() {
        assert_eq!(block_idx(0, 0), 0);
        assert_eq!(block_idx(3, 0), 3);
        assert_eq!(block_idx(0, 1), 4);
        assert_eq!(block_idx(3, 1), 7);
    }
}
