//! Per-image clip composition: fit, zoom, center and pad one still onto the canvas.

mod composer;
mod config;
mod fill;

pub use composer::{RenderedClip, compose, compose_image};
pub use config::AnimationConfig;
pub use fill::FillBars;
