//! Lookbook turns a directory of still images into a zooming slideshow video.
//!
//! Each image is fitted to the canvas, slowly zoomed and padded with background-colored bars;
//! the clips are concatenated, laid over looped background music and stamped with an optional
//! watermark. Pixels are composed on the CPU and the system `ffmpeg` encodes the result.
//!
//! - [`session::run`] handles one full request (grouping, one video per group)
//! - [`BatchAssembler`] turns one image list into one video
//! - [`compose`] builds the animated clip of a single image
#![forbid(unsafe_code)]

mod foundation;

pub mod animation;
pub mod assemble;
pub mod assets;
pub mod audio;
pub mod clip;
pub mod compose;
pub mod encode;
pub mod session;

pub use crate::foundation::core::{Canvas, FitMode, Fps, FrameIndex, Rgb8};
pub use crate::foundation::error::{LookbookError, LookbookResult, UserFacingError};

pub use crate::assemble::{
    BatchAssembler, MusicConfig, ProgressCallback, ProgressInfo, SlideshowPlan, Stage,
    WatermarkConfig,
};
pub use crate::compose::{AnimationConfig, RenderedClip, compose, compose_image};
pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, is_ffmpeg_on_path};
pub use crate::encode::sink::{AudioInputConfig, FrameSink, InMemorySink, SinkConfig};
pub use crate::session::{RunOutput, RunRequest, VideoOutput, run};
