use std::{path::PathBuf, sync::Arc};

use crate::{
    assemble::{ProgressCallback, ProgressInfo, SkippedImage, Stage},
    audio::{
        bed::{MusicBed, render_music_bed, write_pcm_f32le},
        decode::AudioPcm,
    },
    clip::{ClipSequence, CompositeClip, Layer, VisualClip},
    encode::sink::{AudioInputConfig, FrameSink, SinkConfig},
    foundation::{
        core::{Canvas, Fps, FrameIndex},
        error::LookbookResult,
    },
};

/// The music track picked for a batch and how it will be laid under the video.
#[derive(Clone, Debug)]
pub struct MusicSelection {
    pub path: PathBuf,
    pub pcm: Arc<AudioPcm>,
    pub bed: MusicBed,
}

/// Everything one output video is made of, before any frame is encoded.
#[derive(Clone, Debug)]
pub struct SlideshowPlan {
    canvas: Canvas,
    fps: Fps,
    clip_duration_sec: f64,
    images: Vec<PathBuf>,
    skipped: Vec<SkippedImage>,
    sequence: Arc<ClipSequence>,
    music: Option<MusicSelection>,
    watermark: Option<Layer>,
    composite: CompositeClip,
}

impl SlideshowPlan {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        canvas: Canvas,
        fps: Fps,
        clip_duration_sec: f64,
        images: Vec<PathBuf>,
        skipped: Vec<SkippedImage>,
        sequence: ClipSequence,
        music: Option<MusicSelection>,
        watermark: Option<Layer>,
    ) -> Self {
        let sequence = Arc::new(sequence);
        let mut layers = vec![Layer::from_shared(sequence.clone())];
        layers.extend(watermark.clone());
        let composite = CompositeClip::new(canvas, sequence.duration(), layers);

        Self {
            canvas,
            fps,
            clip_duration_sec,
            images,
            skipped,
            sequence,
            music,
            watermark,
            composite,
        }
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Per-image duration used for this batch (fixed, or derived from the music track).
    pub fn clip_duration_sec(&self) -> f64 {
        self.clip_duration_sec
    }

    /// Composed images in playback order.
    pub fn images(&self) -> &[PathBuf] {
        &self.images
    }

    pub fn skipped(&self) -> &[SkippedImage] {
        &self.skipped
    }

    pub fn sequence(&self) -> &ClipSequence {
        &self.sequence
    }

    pub fn music(&self) -> Option<&MusicSelection> {
        self.music.as_ref()
    }

    pub fn watermark(&self) -> Option<&Layer> {
        self.watermark.as_ref()
    }

    /// Final layer stack: the concatenated clips, then the watermark when present.
    pub fn composite(&self) -> &CompositeClip {
        &self.composite
    }

    pub fn duration(&self) -> f64 {
        self.sequence.duration()
    }

    pub fn frame_count(&self) -> u64 {
        self.fps.secs_to_frames_round(self.duration())
    }

    /// Interleaved PCM of the music bed, if a track was selected.
    pub fn render_music(&self) -> Option<(u32, u16, Vec<f32>)> {
        let music = self.music.as_ref()?;
        if music.bed.is_silent() {
            return None;
        }
        let samples = render_music_bed(&music.pcm, &music.bed);
        Some((music.pcm.sample_rate, music.pcm.channels, samples))
    }

    /// Render every frame into `sink`, with the music bed attached when there is one.
    pub fn encode_into(
        &self,
        sink: &mut dyn FrameSink,
        progress: &dyn ProgressCallback,
    ) -> LookbookResult<()> {
        let mut bed_file = TempFileGuard(None);
        let audio = match self.render_music() {
            Some((sample_rate, channels, samples)) if !samples.is_empty() => {
                let path = temp_bed_path();
                bed_file.0 = Some(path.clone());
                write_pcm_f32le(&samples, &path)?;
                Some(AudioInputConfig {
                    path,
                    sample_rate,
                    channels,
                })
            }
            _ => None,
        };

        sink.begin(SinkConfig {
            width: self.canvas.width,
            height: self.canvas.height,
            fps: self.fps,
            audio,
        })?;

        let total = self.frame_count();
        for k in 0..total {
            let t = self.fps.frames_to_secs(k);
            let frame = self.composite.render(t);
            sink.push_frame(FrameIndex(k), &frame)?;
            progress.on_progress(&ProgressInfo {
                stage: Stage::Encode,
                current: k + 1,
                total,
                item: None,
            });
        }

        sink.end()?;
        drop(bed_file);
        Ok(())
    }
}

fn temp_bed_path() -> PathBuf {
    std::env::temp_dir().join(format!(
        "lookbook_music_bed_{}_{}.f32le",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0)
    ))
}

struct TempFileGuard(Option<PathBuf>);

impl Drop for TempFileGuard {
    fn drop(&mut self) {
        if let Some(path) = self.0.take() {
            let _ = std::fs::remove_file(path);
        }
    }
}
