use std::sync::Arc;

use crate::{
    clip::{ColorClip, Layer, Position, VisualClip},
    foundation::{
        core::{Canvas, FitMode, Rgb8},
        error::LookbookResult,
    },
};

/// Two background-colored bars flush against the canvas edges on the axis the fit did not match.
///
/// They sit above the zooming image, so the image never grows past its resting extent on that
/// axis.
#[derive(Clone, Debug)]
pub struct FillBars {
    bar: Arc<ColorClip>,
    offsets: [(i64, i64); 2],
}

impl FillBars {
    /// Fails when the fitted image already reaches (or passes) the canvas edges.
    pub fn build(
        canvas: Canvas,
        fitted: Canvas,
        fit: FitMode,
        color: Rgb8,
        duration: f64,
    ) -> LookbookResult<Self> {
        let (cw, ch) = (i64::from(canvas.width), i64::from(canvas.height));
        let (fw, fh) = (i64::from(fitted.width), i64::from(fitted.height));

        let (bar, offsets) = match fit {
            FitMode::Height => {
                let bar_w = (cw - fw).div_euclid(2);
                let bar = ColorClip::from_signed(bar_w, ch, color, duration)?;
                (bar, [(0, 0), (bar_w + fw, 0)])
            }
            FitMode::Width => {
                let bar_h = (ch - fh).div_euclid(2);
                let bar = ColorClip::from_signed(cw, bar_h, color, duration)?;
                (bar, [(0, 0), (0, bar_h + fh)])
            }
        };

        Ok(Self {
            bar: Arc::new(bar),
            offsets,
        })
    }

    pub fn size(&self) -> Canvas {
        self.bar.size()
    }

    pub fn offsets(&self) -> [(i64, i64); 2] {
        self.offsets
    }

    pub fn layers(&self) -> [Layer; 2] {
        self.offsets.map(|(x, y)| {
            Layer::from_shared(self.bar.clone()).positioned(Position::At { x, y })
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/fill.rs"]
mod tests;
