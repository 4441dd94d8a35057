use std::borrow::Cow;

use image::RgbaImage;

use crate::{
    clip::VisualClip,
    foundation::core::{Canvas, Rgb8},
    foundation::error::{LookbookError, LookbookResult},
};

/// Solid opaque rectangle.
#[derive(Clone, Debug)]
pub struct ColorClip {
    color: Rgb8,
    duration: f64,
    pixels: RgbaImage,
}

impl ColorClip {
    pub fn new(size: Canvas, color: Rgb8, duration: f64) -> LookbookResult<Self> {
        if size.is_empty() {
            return Err(LookbookError::validation(format!(
                "color clip size must be positive, got {size}"
            )));
        }
        Ok(Self {
            color,
            duration,
            pixels: RgbaImage::from_pixel(size.width, size.height, color.to_rgba()),
        })
    }

    /// Like [`ColorClip::new`] but for signed sizes coming out of gap arithmetic.
    pub fn from_signed(width: i64, height: i64, color: Rgb8, duration: f64) -> LookbookResult<Self> {
        let (Ok(w), Ok(h)) = (u32::try_from(width), u32::try_from(height)) else {
            return Err(LookbookError::validation(format!(
                "color clip size must be positive, got {width}x{height}"
            )));
        };
        Self::new(Canvas::new(w, h), color, duration)
    }

    pub fn color(&self) -> Rgb8 {
        self.color
    }
}

impl VisualClip for ColorClip {
    fn duration(&self) -> f64 {
        self.duration
    }

    fn size(&self) -> Canvas {
        Canvas::new(self.pixels.width(), self.pixels.height())
    }

    fn frame_at(&self, _t: f64) -> Cow<'_, RgbaImage> {
        Cow::Borrowed(&self.pixels)
    }
}
