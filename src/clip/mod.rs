//! Time-based visual clips.
//!
//! A clip answers three questions: how long it lasts, how large it is at rest and what its
//! pixels look like at time `t`. Resizing and positioning over time are not clip concerns; they
//! are attached by wrapping a clip in a [`Layer`] and composing layers into a [`CompositeClip`].

mod color;
mod composite;
mod sequence;
mod still;

use std::{borrow::Cow, fmt};

use image::RgbaImage;

use crate::foundation::core::Canvas;

pub use color::ColorClip;
pub use composite::{CompositeClip, Layer, Placement, Position, Scale};
pub use sequence::ClipSequence;
pub use still::ImageClip;

/// Capability shared by every clip the composer and assembler work with.
pub trait VisualClip: fmt::Debug + Send + Sync {
    /// Length in seconds.
    fn duration(&self) -> f64;
    /// Pixel size of an unscaled frame.
    fn size(&self) -> Canvas;
    /// Straight-alpha RGBA8 pixels at clip-local time `t` (seconds).
    fn frame_at(&self, t: f64) -> Cow<'_, RgbaImage>;
}
