use crate::{PackedFrame, Stats};
use log::debug;

/// Change mask followed by the glyphs it selects.
///
/// Bit `i` of the mask is set when block `i` follows; blocks appear in
/// ascending order, 5 bytes each. Unselected blocks keep their previous
/// contents on the player's side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeltaRecord {
    mask: u8,
    body: Vec<u8>,
}

impl DeltaRecord {
    fn build(prev: &PackedFrame, curr: &PackedFrame, refresh: bool) -> Self {
        let mut mask = 0u8;
        let mut body = Vec::new();

        for (idx, (prev, curr)) in prev.blocks().zip(curr.blocks()).enumerate() {
            if refresh || prev != curr {
                mask |= 1 << idx;
                body.extend_from_slice(curr.bytes());
            }
        }

        Self { mask, body }
    }

    pub fn mask(&self) -> u8 {
        self.mask
    }

    pub fn is_changed(&self, idx: usize) -> bool {
        (self.mask >> idx) & 1 == 1
    }

    /// Bytes of the changed blocks, without the mask.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn len(&self) -> usize {
        1 + self.body.len()
    }

    pub fn serialize(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.len());

        buffer.push(self.mask);
        buffer.extend_from_slice(&self.body);
        buffer
    }
}

/// Diffs each frame against the one before it.
#[derive(Debug, Default)]
pub struct DeltaEncoder {
    prev: PackedFrame,
    stats: Stats,
}

impl DeltaEncoder {
    pub fn new() -> Self {
        Default::default()
    }

    /// Encodes `curr` against the previously encoded frame (all blank before
    /// the first call) and remembers it for the next call.
    ///
    /// `is_first_frame` forces every block into the record, so the player
    /// doesn't depend on whatever its glyphs contained before.
    pub fn encode(&mut self, curr: PackedFrame, is_first_frame: bool) -> DeltaRecord {
        let record = DeltaRecord::build(&self.prev, &curr, is_first_frame);

        self.stats.frames += 1;
        self.stats.bytes += record.len();
        self.prev = curr;

        debug!(
            "frame {}: mask={:#010b}, {} bytes",
            self.stats.frames,
            record.mask(),
            record.len()
        );

        record
    }

    /// Like [`Self::encode`], refreshing the whole screen on the first frame
    /// this encoder sees.
    pub fn push(&mut self, curr: PackedFrame) -> DeltaRecord {
        let is_first_frame = self.stats.frames == 0;

        self.encode(curr, is_first_frame)
    }

    pub fn prev(&self) -> &PackedFrame {
        &self.prev
    }

    pub fn finish(self) -> Stats {
        self.stats
    }
}
