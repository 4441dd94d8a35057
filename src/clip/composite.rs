use std::{borrow::Cow, sync::Arc};

use image::{RgbaImage, imageops, imageops::FilterType};

use crate::{
    animation::zoom::ZoomFn,
    clip::VisualClip,
    foundation::core::Canvas,
    foundation::math::{center_offset, mul_div255, scaled_dim},
};

/// Where a layer's top-left corner lands on the composite canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position {
    /// Centered on both axes, re-evaluated every frame against the scaled size.
    Center,
    /// Fixed pixel offset from the canvas origin.
    At { x: i64, y: i64 },
}

/// Time-varying resize applied to a layer's clip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scale {
    Identity,
    Factor(f64),
    Zoom(ZoomFn),
}

impl Scale {
    pub fn at(&self, t: f64) -> f64 {
        match self {
            Self::Identity => 1.0,
            Self::Factor(f) => *f,
            Self::Zoom(z) => z.at(t),
        }
    }
}

/// Resolved on-canvas rectangle of a layer at one instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Debug)]
pub struct Layer {
    clip: Arc<dyn VisualClip>,
    position: Position,
    scale: Scale,
}

impl Layer {
    pub fn new(clip: impl VisualClip + 'static) -> Self {
        Self::from_shared(Arc::new(clip))
    }

    pub fn from_shared(clip: Arc<dyn VisualClip>) -> Self {
        Self {
            clip,
            position: Position::At { x: 0, y: 0 },
            scale: Scale::Identity,
        }
    }

    pub fn resized(mut self, scale: Scale) -> Self {
        self.scale = scale;
        self
    }

    pub fn positioned(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn clip(&self) -> &dyn VisualClip {
        self.clip.as_ref()
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn scale(&self) -> Scale {
        self.scale
    }

    pub fn placement(&self, t: f64, canvas: Canvas) -> Placement {
        let size = self.clip.size();
        let s = self.scale.at(t);
        let (width, height) = if s == 1.0 {
            (size.width, size.height)
        } else {
            (scaled_dim(size.width, s), scaled_dim(size.height, s))
        };
        let (x, y) = match self.position {
            Position::Center => (
                center_offset(canvas.width, width),
                center_offset(canvas.height, height),
            ),
            Position::At { x, y } => (x, y),
        };
        Placement {
            x,
            y,
            width,
            height,
        }
    }

    fn draw(&self, t: f64, dst: &mut RgbaImage) {
        let local_t = t.clamp(0.0, self.clip.duration().max(0.0));
        let src = self.clip.frame_at(local_t);
        let p = self.placement(t, Canvas::new(dst.width(), dst.height()));

        if p.width == src.width() && p.height == src.height() {
            blit_over(dst, &src, p.x, p.y);
        } else {
            let resized = imageops::resize(&*src, p.width, p.height, FilterType::Triangle);
            blit_over(dst, &resized, p.x, p.y);
        }
    }
}

/// Source-over blend of straight-alpha `src` onto `dst` with its top-left at (`x`, `y`).
fn blit_over(dst: &mut RgbaImage, src: &RgbaImage, x: i64, y: i64) {
    let (dw, dh) = (i64::from(dst.width()), i64::from(dst.height()));
    let (sw, sh) = (i64::from(src.width()), i64::from(src.height()));

    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + sw).min(dw);
    let y1 = (y + sh).min(dh);
    if x0 >= x1 || y0 >= y1 {
        return;
    }

    for dy in y0..y1 {
        for dx in x0..x1 {
            let s = src.get_pixel((dx - x) as u32, (dy - y) as u32).0;
            let sa = u16::from(s[3]);
            if sa == 0 {
                continue;
            }
            let d = dst.get_pixel_mut(dx as u32, dy as u32);
            if sa == 255 {
                d.0 = s;
                continue;
            }

            let da = mul_div255(u16::from(d.0[3]), 255 - sa);
            let out_a = sa + da;
            for c in 0..3 {
                let num = u32::from(s[c]) * u32::from(sa) + u32::from(d.0[c]) * u32::from(da);
                d.0[c] = ((num + u32::from(out_a) / 2) / u32::from(out_a)).min(255) as u8;
            }
            d.0[3] = out_a.min(255) as u8;
        }
    }
}

/// Layers drawn bottom to top onto a fixed-size canvas; anything outside the canvas is clipped.
#[derive(Clone, Debug)]
pub struct CompositeClip {
    canvas: Canvas,
    duration: f64,
    layers: Vec<Layer>,
}

impl CompositeClip {
    pub fn new(canvas: Canvas, duration: f64, layers: Vec<Layer>) -> Self {
        Self {
            canvas,
            duration,
            layers,
        }
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn push_layer(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    pub fn render(&self, t: f64) -> RgbaImage {
        let mut out = RgbaImage::new(self.canvas.width, self.canvas.height);
        for layer in &self.layers {
            layer.draw(t, &mut out);
        }
        out
    }
}

impl VisualClip for CompositeClip {
    fn duration(&self) -> f64 {
        self.duration
    }

    fn size(&self) -> Canvas {
        self.canvas
    }

    fn frame_at(&self, t: f64) -> Cow<'_, RgbaImage> {
        Cow::Owned(self.render(t))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/clip/composite.rs"]
mod tests;
