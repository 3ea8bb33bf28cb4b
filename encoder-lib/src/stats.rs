use crate::params::FRAME_BYTES;
use std::fmt;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub frames: usize,
    pub bytes: usize,
}

impl Stats {
    /// Size of the stream if every frame was sent whole.
    pub fn raw_bytes(&self) -> usize {
        self.frames * FRAME_BYTES
    }

    pub fn ratio(&self) -> f32 {
        if self.frames == 0 {
            return 1.0;
        }

        self.bytes as f32 / self.raw_bytes() as f32
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Compressed {} frames to {} KB ({} KB raw)",
            self.frames,
            self.bytes / 1024,
            self.raw_bytes() / 1024
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report() {
        let stats = Stats {
            frames: 100,
            bytes: 2100,
        };

        assert_eq!(stats.raw_bytes(), 4000);
        assert_eq!(
            stats.to_string(),
            "Compressed 100 frames to 2 KB (3 KB raw)"
        );
        assert!((stats.ratio() - 0.525).abs() < 1e-6);
    }

    #[test]
    fn empty() {
        assert_eq!(Stats::default().ratio(), 1.0);
        assert_eq!(Stats::default().raw_bytes(), 0);
    }
}
