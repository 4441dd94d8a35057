use std::path::Path;

use crate::{
    audio::decode::AudioPcm,
    foundation::error::{LookbookError, LookbookResult},
};

/// How one music track is stretched over a video: tiled `repeats` times, cut to `duration_sec`
/// and faded out over the last `fade_out_sec`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct MusicBed {
    pub repeats: u32,
    pub duration_sec: f64,
    pub fade_out_sec: f64,
}

impl MusicBed {
    /// With `fit_to_music` the clip durations were already derived from the track, so the track
    /// is used once and untrimmed.
    pub fn plan(track_sec: f64, video_sec: f64, fit_to_music: bool, fadeout_sec: f64) -> Self {
        if track_sec <= 0.0 || !track_sec.is_finite() {
            return Self {
                repeats: 0,
                duration_sec: 0.0,
                fade_out_sec: 0.0,
            };
        }

        let (repeats, duration_sec) = if fit_to_music {
            (1, track_sec)
        } else {
            let whole = (video_sec.max(0.0) / track_sec).floor();
            (whole.min(f64::from(u32::MAX - 1)) as u32 + 1, video_sec.max(0.0))
        };

        Self {
            repeats,
            duration_sec,
            fade_out_sec: fadeout_sec.max(0.0).min(duration_sec),
        }
    }

    pub fn is_silent(&self) -> bool {
        self.repeats == 0 || self.duration_sec <= 0.0
    }

    /// Linear fade-out gain at bed time `t`.
    pub fn gain_at(&self, t: f64) -> f32 {
        if self.fade_out_sec <= 0.0 {
            return 1.0;
        }
        ((self.duration_sec - t) / self.fade_out_sec).clamp(0.0, 1.0) as f32
    }
}

/// Tile, trim and fade `pcm` according to `bed`; output keeps the source rate and channels.
pub fn render_music_bed(pcm: &AudioPcm, bed: &MusicBed) -> Vec<f32> {
    let channels = usize::from(pcm.channels);
    let src_frames = pcm.frames();
    if bed.is_silent() || src_frames == 0 || channels == 0 {
        return Vec::new();
    }

    let wanted = (bed.duration_sec * f64::from(pcm.sample_rate)).round() as usize;
    let available = src_frames.saturating_mul(bed.repeats as usize);
    let frames = wanted.min(available);

    let mut out = Vec::with_capacity(frames * channels);
    for frame in 0..frames {
        let src = (frame % src_frames) * channels;
        let t = frame as f64 / f64::from(pcm.sample_rate);
        let gain = bed.gain_at(t);
        out.extend(
            pcm.interleaved_f32[src..src + channels]
                .iter()
                .map(|s| s * gain),
        );
    }
    out
}

pub fn write_pcm_f32le(samples_interleaved: &[f32], out_path: &Path) -> LookbookResult<()> {
    if let Some(parent) = out_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            LookbookError::media(format!(
                "failed to create audio output directory '{}': {e}",
                parent.display()
            ))
        })?;
    }

    let mut bytes = Vec::<u8>::with_capacity(samples_interleaved.len() * 4);
    for &sample in samples_interleaved {
        bytes.extend_from_slice(&sample.to_le_bytes());
    }
    std::fs::write(out_path, bytes).map_err(|e| {
        LookbookError::media(format!(
            "failed to write music bed '{}': {e}",
            out_path.display()
        ))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/audio/bed.rs"]
mod tests;
