use crate::{Error, Raster, Result};
use anyhow::bail;
use image::io::Reader as ImageReader;
use image::ImageError;
use log::{info, trace, warn};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Directory of frames named `1.<ext>`, `2.<ext>`, ...
#[derive(Clone, Debug)]
pub struct Source {
    dir: PathBuf,
    ext: String,
}

impl Source {
    pub fn new(dir: impl AsRef<Path>, ext: impl Into<String>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            ext: ext.into(),
        }
    }

    pub fn path(&self, idx: usize) -> PathBuf {
        self.dir.join(format!("{}.{}", idx, self.ext))
    }

    /// Loads frame `idx` (1-based).
    pub fn load(&self, idx: usize) -> Result<Raster> {
        let path = self.path(idx);

        trace!("loading {}", path.display());

        // the decoder follows the file's contents, not its extension
        let image = ImageReader::open(&path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(ImageError::IoError)
            .and_then(|reader| reader.decode())
            .map_err(|source| Error::DecodeFailure {
                path: path.clone(),
                source,
            })?;

        Ok(Raster::from(image))
    }

    /// Counts frames present without a hole, starting from `1`.
    ///
    /// Anything past the first missing index is unreachable and only
    /// reported.
    pub fn discover(&self) -> usize {
        let dir = glob::Pattern::escape(&self.dir.to_string_lossy());
        let pattern = Path::new(&dir).join(format!("*.{}", glob::Pattern::escape(&self.ext)));

        let paths = match glob::glob(&pattern.to_string_lossy()) {
            Ok(paths) => paths,
            Err(err) => {
                warn!("couldn't search for frames: {}", err);
                return 0;
            }
        };

        let indices: BTreeSet<usize> = paths
            .flatten()
            .filter_map(|path| path.file_stem()?.to_str()?.parse().ok())
            .collect();

        let count = (1..).take_while(|idx| indices.contains(idx)).count();

        if indices.len() > count {
            warn!(
                "frame {} is missing, ignoring {} frame(s) after it",
                count + 1,
                indices.len() - count
            );
        }

        count
    }

    /// Returns `frames` when given, otherwise the number of frames
    /// discovered; finding none is an error.
    pub fn frame_count(&self, frames: Option<usize>) -> anyhow::Result<usize> {
        if let Some(frames) = frames {
            return Ok(frames);
        }

        let frames = self.discover();

        if frames == 0 {
            bail!("No frames found: expected {}", self.path(1).display());
        }

        info!("found {} frames in {}", frames, self.dir.display());

        Ok(frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{FRAME_HEIGHT, FRAME_WIDTH};
    use image::{GrayImage, ImageFormat, Luma};
    use std::fs;

    #[test]
    fn paths_are_numbered() {
        let source = Source::new("frames", "gif");

        assert_eq!(source.path(1), Path::new("frames").join("1.gif"));
        assert_eq!(source.path(120), Path::new("frames").join("120.gif"));
    }

    #[test]
    fn discover_stops_at_first_hole() {
        let dir = tempfile::tempdir().unwrap();

        for name in &["1.gif", "2.gif", "3.gif", "5.gif", "4.png", "x.gif"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }

        assert_eq!(Source::new(dir.path(), "gif").discover(), 3);
        assert_eq!(Source::new(dir.path(), "png").discover(), 0);
    }

    #[test]
    fn discover_in_dir_with_glob_characters() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("clip[1]");
        fs::create_dir(&dir).unwrap();

        for idx in 1..=3 {
            fs::write(dir.join(format!("{}.png", idx)), b"").unwrap();
        }

        assert_eq!(Source::new(&dir, "png").discover(), 3);
    }

    #[test]
    fn frame_count_prefers_explicit_count() {
        let source = Source::new("/definitely/not/here", "gif");

        assert_eq!(source.frame_count(Some(7)).unwrap(), 7);
    }

    #[test]
    fn frame_count_fails_without_frames() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("1.png"), b"").unwrap();
        fs::write(dir.path().join("2.png"), b"").unwrap();

        let err = Source::new("/definitely/not/here", "gif")
            .frame_count(None)
            .unwrap_err();

        assert!(err.to_string().contains("1.gif"));
        assert!(Source::new(dir.path(), "gif").frame_count(None).is_err());
        assert_eq!(Source::new(dir.path(), "png").frame_count(None).unwrap(), 2);
    }

    #[test]
    fn format_follows_contents_not_extension() {
        let dir = tempfile::tempdir().unwrap();
        let mut img = GrayImage::from_pixel(FRAME_WIDTH, FRAME_HEIGHT, Luma([255]));
        img.put_pixel(0, 0, Luma([0]));
        img.save_with_format(dir.path().join("1.gif"), ImageFormat::Png)
            .unwrap();

        let raster = Source::new(dir.path(), "gif").load(1).unwrap();

        assert_eq!((raster.width(), raster.height()), (FRAME_WIDTH, FRAME_HEIGHT));
        assert_eq!(raster.sample(0, 0), 0);
        assert_eq!(raster.sample(1, 0), 255);
    }

    #[test]
    fn missing_file_is_a_decode_failure() {
        let dir = tempfile::tempdir().unwrap();
        let source = Source::new(dir.path(), "gif");

        match source.load(1) {
            Err(Error::DecodeFailure { path, .. }) => assert_eq!(path, source.path(1)),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn corrupt_file_is_a_decode_failure() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("1.gif"), b"definitely not a gif").unwrap();

        let err = Source::new(dir.path(), "gif").load(1).unwrap_err();

        assert!(matches!(err, Error::DecodeFailure { .. }));
        assert!(err.to_string().contains("1.gif"));
    }
}
