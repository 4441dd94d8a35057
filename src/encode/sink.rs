use std::path::PathBuf;

use image::RgbaImage;

use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{LookbookError, LookbookResult};

/// Configuration provided to a [`FrameSink`] before the first frame.
#[derive(Debug, Clone)]
pub struct SinkConfig {
    pub width: u32,
    pub height: u32,
    pub fps: Fps,
    /// Optional raw PCM audio muxed next to the frames.
    pub audio: Option<AudioInputConfig>,
}

/// Raw PCM audio input for sinks that support audio.
#[derive(Debug, Clone)]
pub struct AudioInputConfig {
    /// Path to interleaved `f32le` PCM data.
    pub path: PathBuf,
    pub sample_rate: u32,
    pub channels: u16,
}

/// Consumer of composed frames.
///
/// `push_frame` is called in strictly increasing [`FrameIndex`] order between `begin` and `end`.
pub trait FrameSink {
    fn begin(&mut self, cfg: SinkConfig) -> LookbookResult<()>;
    fn push_frame(&mut self, idx: FrameIndex, frame: &RgbaImage) -> LookbookResult<()>;
    fn end(&mut self) -> LookbookResult<()>;
}

/// Sink that keeps every frame in memory, for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, RgbaImage)>,
    finished: bool,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self) -> Option<&SinkConfig> {
        self.cfg.as_ref()
    }

    pub fn frames(&self) -> &[(FrameIndex, RgbaImage)] {
        &self.frames
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> LookbookResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.finished = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &RgbaImage) -> LookbookResult<()> {
        if self.cfg.is_none() {
            return Err(LookbookError::encode("in-memory sink not started"));
        }
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> LookbookResult<()> {
        self.finished = true;
        Ok(())
    }
}
