//! Batch assembly: order images, compose one clip each, concatenate, lay music and a
//! watermark over the result, and encode it.

mod assembler;
mod config;
mod plan;
mod progress;

pub use assembler::{BatchAssembler, SkipReason, SkippedImage, next_output_path};
pub use config::{MusicConfig, WatermarkConfig};
pub use plan::{MusicSelection, SlideshowPlan};
pub use progress::{NoOpProgress, ProgressCallback, ProgressInfo, Stage};
