use std::{borrow::Cow, path::Path, sync::Arc};

use anyhow::Context as _;
use image::{RgbaImage, imageops::FilterType};

use crate::{
    clip::VisualClip,
    foundation::core::Canvas,
    foundation::error::{LookbookError, LookbookResult},
    foundation::math::scaled_dim,
};

/// Still image held for a fixed duration.
///
/// The resize helpers produce a new clip with resampled pixels and keep the aspect ratio.
#[derive(Clone, Debug)]
pub struct ImageClip {
    pixels: Arc<RgbaImage>,
    duration: f64,
}

impl ImageClip {
    pub fn open(path: &Path) -> LookbookResult<Self> {
        let img = image::open(path)
            .with_context(|| format!("decode image '{}'", path.display()))?
            .to_rgba8();
        Self::from_rgba(img)
    }

    pub fn from_rgba(pixels: RgbaImage) -> LookbookResult<Self> {
        if pixels.width() == 0 || pixels.height() == 0 {
            return Err(LookbookError::media("image has zero width or height"));
        }
        Ok(Self {
            pixels: Arc::new(pixels),
            duration: 0.0,
        })
    }

    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    pub fn resize_to_height(&self, height: u32) -> Self {
        let factor = f64::from(height) / f64::from(self.pixels.height());
        self.resize_exact(scaled_dim(self.pixels.width(), factor), height.max(1))
    }

    pub fn resize_to_width(&self, width: u32) -> Self {
        let factor = f64::from(width) / f64::from(self.pixels.width());
        self.resize_exact(width.max(1), scaled_dim(self.pixels.height(), factor))
    }

    pub fn resize_by(&self, factor: f64) -> Self {
        self.resize_exact(
            scaled_dim(self.pixels.width(), factor),
            scaled_dim(self.pixels.height(), factor),
        )
    }

    fn resize_exact(&self, width: u32, height: u32) -> Self {
        if width == self.pixels.width() && height == self.pixels.height() {
            return self.clone();
        }
        let resized = image::imageops::resize(self.pixels.as_ref(), width, height, FilterType::Lanczos3);
        Self {
            pixels: Arc::new(resized),
            duration: self.duration,
        }
    }
}

impl VisualClip for ImageClip {
    fn duration(&self) -> f64 {
        self.duration
    }

    fn size(&self) -> Canvas {
        Canvas::new(self.pixels.width(), self.pixels.height())
    }

    fn frame_at(&self, _t: f64) -> Cow<'_, RgbaImage> {
        Cow::Borrowed(self.pixels.as_ref())
    }
}
