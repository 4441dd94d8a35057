use std::{borrow::Cow, path::Path};

use image::RgbaImage;

use crate::{
    animation::zoom::{ZOOM_PRESCALE, ZoomFn},
    clip::{ColorClip, CompositeClip, ImageClip, Layer, Position, Scale, VisualClip},
    compose::{AnimationConfig, FillBars},
    foundation::{
        core::{Canvas, FitMode, Fps},
        error::LookbookResult,
    },
};

/// One image's animated clip, ready to be concatenated.
#[derive(Clone, Debug)]
pub struct RenderedClip {
    composite: CompositeClip,
    fps: Fps,
    fitted_size: Canvas,
    fill_bars: bool,
}

impl RenderedClip {
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Size of the image at rest (t = 0).
    pub fn fitted_size(&self) -> Canvas {
        self.fitted_size
    }

    pub fn has_fill_bars(&self) -> bool {
        self.fill_bars
    }

    pub fn composite(&self) -> &CompositeClip {
        &self.composite
    }
}

impl VisualClip for RenderedClip {
    fn duration(&self) -> f64 {
        self.composite.duration()
    }

    fn size(&self) -> Canvas {
        self.composite.size()
    }

    fn frame_at(&self, t: f64) -> Cow<'_, RgbaImage> {
        self.composite.frame_at(t)
    }
}

/// Load `image_path` and build its zoom clip.
pub fn compose(image_path: &Path, cfg: &AnimationConfig) -> LookbookResult<RenderedClip> {
    cfg.validate()?;
    let image = ImageClip::open(image_path)?;
    compose_clip(image, cfg)
}

/// Build a zoom clip from already decoded pixels.
pub fn compose_image(pixels: RgbaImage, cfg: &AnimationConfig) -> LookbookResult<RenderedClip> {
    cfg.validate()?;
    compose_clip(ImageClip::from_rgba(pixels)?, cfg)
}

fn compose_clip(image: ImageClip, cfg: &AnimationConfig) -> LookbookResult<RenderedClip> {
    let duration = cfg.duration_sec;
    let background = ColorClip::new(cfg.canvas, cfg.background, duration)?;

    let mut fitted = image.resize_to_height(cfg.canvas.height);
    if cfg.fit == FitMode::Width {
        fitted = fitted.resize_to_width(cfg.canvas.width);
    }
    let fitted_size = fitted.size();

    let zoom_source = fitted.resize_by(ZOOM_PRESCALE).with_duration(duration);
    let zoom = ZoomFn::new(cfg.zoom_factor, duration);

    let mut layers = vec![
        Layer::new(background),
        Layer::new(zoom_source)
            .resized(Scale::Zoom(zoom))
            .positioned(Position::Center),
    ];

    let fill_bars = match FillBars::build(cfg.canvas, fitted_size, cfg.fit, cfg.background, duration)
    {
        Ok(bars) => {
            layers.extend(bars.layers());
            true
        }
        Err(err) => {
            tracing::warn!(
                canvas = %cfg.canvas,
                fitted = %fitted_size,
                fit = ?cfg.fit,
                "fill bars skipped: {err}"
            );
            false
        }
    };

    Ok(RenderedClip {
        composite: CompositeClip::new(cfg.canvas, duration, layers),
        fps: cfg.fps,
        fitted_size,
        fill_bars,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/compose/composer.rs"]
mod tests;
