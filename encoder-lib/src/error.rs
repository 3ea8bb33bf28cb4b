use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that abort an encoding run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The frame file couldn't be opened or decoded.
    #[error("couldn't load frame {}", path.display())]
    DecodeFailure {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The frame doesn't have the fixed geometry.
    #[error("frame should be {}x{}, got {}x{}", expected.0, expected.1, actual.0, actual.1)]
    GeometryMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
}
