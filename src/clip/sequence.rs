use std::{borrow::Cow, sync::Arc};

use image::RgbaImage;

use crate::{
    clip::VisualClip,
    foundation::core::Canvas,
    foundation::error::{LookbookError, LookbookResult},
};

/// Clips played back to back; the sequence lasts the sum of their durations.
#[derive(Clone, Debug)]
pub struct ClipSequence {
    clips: Vec<Arc<dyn VisualClip>>,
    starts: Vec<f64>,
    duration: f64,
}

impl ClipSequence {
    pub fn new(clips: Vec<Arc<dyn VisualClip>>) -> LookbookResult<Self> {
        if clips.is_empty() {
            return Err(LookbookError::input("cannot concatenate an empty clip list"));
        }

        let mut starts = Vec::with_capacity(clips.len());
        let mut acc = 0.0f64;
        for clip in &clips {
            starts.push(acc);
            acc += clip.duration();
        }

        Ok(Self {
            clips,
            starts,
            duration: acc,
        })
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    pub fn clips(&self) -> &[Arc<dyn VisualClip>] {
        &self.clips
    }

    pub fn start_of(&self, idx: usize) -> Option<f64> {
        self.starts.get(idx).copied()
    }

    /// Index of the clip playing at `t` and the clip-local time; `t` is clamped to the sequence.
    pub fn locate(&self, t: f64) -> (usize, f64) {
        let t = t.clamp(0.0, self.duration);
        let idx = self
            .starts
            .partition_point(|&start| start <= t)
            .saturating_sub(1);
        (idx, t - self.starts[idx])
    }
}

impl VisualClip for ClipSequence {
    fn duration(&self) -> f64 {
        self.duration
    }

    fn size(&self) -> Canvas {
        self.clips[0].size()
    }

    fn frame_at(&self, t: f64) -> Cow<'_, RgbaImage> {
        let (idx, local_t) = self.locate(t);
        self.clips[idx].frame_at(local_t)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/clip/sequence.rs"]
mod tests;
