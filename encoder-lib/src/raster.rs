use image::{ColorType, DynamicImage, GenericImageView};

/// Decoded frame: row-major pixels, `channels` samples per pixel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    channels: u8,
    samples: Vec<u8>,
}

impl Raster {
    /// Returns `None` when `samples` doesn't hold exactly
    /// `width * height * channels` values.
    pub fn from_raw(width: u32, height: u32, channels: u8, samples: Vec<u8>) -> Option<Self> {
        let len = (width as usize) * (height as usize) * (channels as usize);

        if channels == 0 || samples.len() != len {
            return None;
        }

        Some(Self {
            width,
            height,
            channels,
            samples,
        })
    }

    /// Builds a single-channel raster by evaluating `f` for every pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> u8) -> Self {
        let mut samples = Vec::with_capacity((width * height) as usize);

        for y in 0..height {
            for x in 0..width {
                samples.push(f(x, y));
            }
        }

        Self {
            width,
            height,
            channels: 1,
            samples,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// First channel of the pixel at `(x, y)`; the rest are never looked at.
    ///
    /// Panics when `(x, y)` lies outside the raster.
    pub(crate) fn sample(&self, x: u32, y: u32) -> u8 {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) is outside of {}x{}",
            x,
            y,
            self.width,
            self.height
        );

        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * (self.channels as usize);

        self.samples[idx]
    }
}

impl From<DynamicImage> for Raster {
    fn from(img: DynamicImage) -> Self {
        let (width, height) = (img.width(), img.height());

        match img.color() {
            ColorType::L8 | ColorType::La8 | ColorType::Rgb8 | ColorType::Rgba8 => Self {
                width,
                height,
                channels: img.color().channel_count(),
                samples: img.to_bytes(),
            },

            _ => Self {
                width,
                height,
                channels: 4,
                samples: img.into_rgba8().into_raw(),
            },
        }
    }
}
