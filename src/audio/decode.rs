use std::path::Path;

use crate::foundation::error::{LookbookError, LookbookResult};

/// Sample rate music is decoded and mixed at.
pub const MIX_SAMPLE_RATE: u32 = 48_000;

#[derive(Clone, Debug, PartialEq)]
pub struct AudioPcm {
    pub sample_rate: u32,
    pub channels: u16,
    pub interleaved_f32: Vec<f32>,
}

impl AudioPcm {
    pub fn frames(&self) -> usize {
        if self.channels == 0 {
            return 0;
        }
        self.interleaved_f32.len() / usize::from(self.channels)
    }

    pub fn duration_sec(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.frames() as f64 / f64::from(self.sample_rate)
    }
}

/// Decodes a music file into interleaved stereo `f32` PCM.
pub trait AudioDecoder: Send + Sync {
    fn decode(&self, path: &Path, sample_rate: u32) -> LookbookResult<AudioPcm>;
}

/// Decoder backed by the system `ffmpeg` binary.
#[derive(Clone, Copy, Debug, Default)]
pub struct FfmpegAudioDecoder;

impl AudioDecoder for FfmpegAudioDecoder {
    fn decode(&self, path: &Path, sample_rate: u32) -> LookbookResult<AudioPcm> {
        let out = std::process::Command::new("ffmpeg")
            .args(["-v", "error", "-i"])
            .arg(path)
            .args([
                "-vn",
                "-f",
                "f32le",
                "-acodec",
                "pcm_f32le",
                "-ac",
                "2",
                "-ar",
                &sample_rate.to_string(),
                "pipe:1",
            ])
            .output()
            .map_err(|e| {
                LookbookError::media(format!("failed to run ffmpeg for audio decode: {e}"))
            })?;

        if !out.status.success() {
            return Err(LookbookError::media(format!(
                "ffmpeg audio decode failed for '{}': {}",
                path.display(),
                String::from_utf8_lossy(&out.stderr).trim()
            )));
        }

        Ok(AudioPcm {
            sample_rate,
            channels: 2,
            interleaved_f32: f32le_to_samples(&out.stdout)?,
        })
    }
}

fn f32le_to_samples(bytes: &[u8]) -> LookbookResult<Vec<f32>> {
    if !bytes.len().is_multiple_of(4) {
        return Err(LookbookError::media(
            "decoded audio byte length is not aligned to f32 samples",
        ));
    }
    Ok(bytes
        .chunks_exact(4)
        .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}
