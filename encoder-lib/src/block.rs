use crate::params::*;
use crate::Raster;

/// One 5x8 glyph, a bit per pixel, row-major, MSB first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PackedBlock {
    bytes: [u8; BLOCK_BYTES],
}

impl PackedBlock {
    /// Packs block `(bx, by)` of `img`; a pixel is set when its first
    /// sample is 0.
    ///
    /// `img` must already have the frame geometry.
    pub fn new(img: &Raster, bx: u32, by: u32) -> Self {
        let mut this = Self::default();
        let (x0, y0) = (block_x0(bx), block_y0(by));

        for y in y0..block_y1(by) {
            for x in x0..block_x1(bx) {
                if img.sample(x, y) == 0 {
                    this.set(((y - y0) * BLOCK_WIDTH + (x - x0)) as usize);
                }
            }
        }

        this
    }

    pub fn from_bytes(bytes: [u8; BLOCK_BYTES]) -> Self {
        Self { bytes }
    }

    pub fn bytes(&self) -> &[u8; BLOCK_BYTES] {
        &self.bytes
    }

    /// Whether the pixel at local index `idx` (0..40) is on.
    pub fn get(&self, idx: usize) -> bool {
        (self.bytes[idx / 8] >> (7 - idx % 8)) & 1 == 1
    }

    fn set(&mut self, idx: usize) {
        self.bytes[idx / 8] |= 1 << (7 - idx % 8);
    }
}
