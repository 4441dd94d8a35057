use std::{
    fmt,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context as _;
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

use crate::{
    assemble::{
        MusicConfig, MusicSelection, NoOpProgress, ProgressCallback, ProgressInfo, SlideshowPlan,
        Stage, WatermarkConfig,
    },
    assets::discover::{is_image_file, is_sound_file, list_files},
    audio::{
        bed::MusicBed,
        decode::{AudioDecoder, AudioPcm, FfmpegAudioDecoder, MIX_SAMPLE_RATE},
    },
    clip::{ClipSequence, ImageClip, Layer, Position, VisualClip},
    compose::{AnimationConfig, RenderedClip, compose},
    encode::{
        ffmpeg::{FfmpegSink, FfmpegSinkOpts, validate_sink_config},
        sink::{FrameSink, SinkConfig},
    },
    foundation::{
        core::Rgb8,
        error::{LookbookError, LookbookResult},
    },
};

/// Why one image was left out of a batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    UnsupportedExtension,
    Load(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedExtension => f.write_str("unsupported image extension"),
            Self::Load(msg) => write!(f, "failed to load: {msg}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedImage {
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// Turns one list of images into one slideshow video.
///
/// Configuration is applied uniformly to every image of a batch and may be changed between
/// batches. Shuffling and the music pick draw from the assembler's own RNG; seed it with
/// [`BatchAssembler::with_seed`] for reproducible output.
pub struct BatchAssembler {
    anim: AnimationConfig,
    watermark: WatermarkConfig,
    music: MusicConfig,
    rng: StdRng,
    decoder: Arc<dyn AudioDecoder>,
    progress: Arc<dyn ProgressCallback>,
}

impl BatchAssembler {
    pub fn new(anim: AnimationConfig) -> Self {
        Self {
            anim,
            watermark: WatermarkConfig::default(),
            music: MusicConfig::default(),
            rng: StdRng::from_entropy(),
            decoder: Arc::new(FfmpegAudioDecoder),
            progress: Arc::new(NoOpProgress),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn with_decoder(mut self, decoder: Arc<dyn AudioDecoder>) -> Self {
        self.decoder = decoder;
        self
    }

    pub fn animation(&self) -> &AnimationConfig {
        &self.anim
    }

    pub fn watermark(&self) -> &WatermarkConfig {
        &self.watermark
    }

    pub fn music(&self) -> &MusicConfig {
        &self.music
    }

    pub fn set_watermark(&mut self, watermark: WatermarkConfig) {
        self.watermark = watermark;
    }

    pub fn set_background_color(&mut self, hex: &str) -> LookbookResult<()> {
        self.anim.background = Rgb8::from_hex(hex)?;
        Ok(())
    }

    pub fn set_fadeout(&mut self, secs: f64) -> LookbookResult<()> {
        let music = MusicConfig {
            fadeout_sec: secs,
            ..self.music
        };
        music.validate()?;
        self.music = music;
        Ok(())
    }

    pub fn set_fit_duration_to_music(&mut self, enabled: bool) {
        self.music.fit_duration_to_music = enabled;
    }

    pub fn set_progress(&mut self, progress: Arc<dyn ProgressCallback>) {
        self.progress = progress;
    }

    /// Build the whole batch in memory: music pick, ordering, one clip per image, concatenation,
    /// music bed and watermark. Nothing is written to disk.
    ///
    /// `images` are file names relative to `source_dir`.
    pub fn plan(
        &mut self,
        music_dir: Option<&Path>,
        images: Vec<String>,
        source_dir: &Path,
        randomize: bool,
    ) -> LookbookResult<SlideshowPlan> {
        self.anim.validate()?;
        self.music.validate()?;
        validate_sink_config(&SinkConfig {
            width: self.anim.canvas.width,
            height: self.anim.canvas.height,
            fps: self.anim.fps,
            audio: None,
        })?;

        let track = self.select_music(music_dir)?;
        let ordered = self.order_images(images, randomize);
        if ordered.is_empty() {
            return Err(LookbookError::input("no images to assemble"));
        }

        let anim = self.resolve_animation(&ordered, track.as_ref().map(|(_, pcm)| pcm));

        let total = ordered.len() as u64;
        let mut clips: Vec<Arc<dyn VisualClip>> = Vec::with_capacity(ordered.len());
        let mut composed = Vec::with_capacity(ordered.len());
        let mut skipped = Vec::new();
        for (i, name) in ordered.iter().enumerate() {
            let path = source_dir.join(name);
            match compose_one(&path, &anim) {
                Ok(clip) => {
                    tracing::debug!(image = %path.display(), fitted = %clip.fitted_size(), "composed");
                    clips.push(Arc::new(clip));
                    composed.push(path.clone());
                }
                Err(reason) => {
                    tracing::warn!(image = %path.display(), "skipping image: {reason}");
                    skipped.push(SkippedImage {
                        path: path.clone(),
                        reason,
                    });
                }
            }
            self.progress.on_progress(&ProgressInfo {
                stage: Stage::Compose,
                current: i as u64 + 1,
                total,
                item: Some(path),
            });
        }

        if clips.is_empty() {
            return Err(LookbookError::input(format!(
                "none of the {total} images could be composed"
            )));
        }

        let sequence = ClipSequence::new(clips)?;
        let video_sec = sequence.duration();

        let music = track.map(|(path, pcm)| {
            let bed = MusicBed::plan(
                pcm.duration_sec(),
                video_sec,
                self.music.fit_duration_to_music,
                self.music.fadeout_sec,
            );
            tracing::info!(
                track = %path.display(),
                repeats = bed.repeats,
                duration_sec = bed.duration_sec,
                fade_out_sec = bed.fade_out_sec,
                "music bed planned"
            );
            MusicSelection {
                path,
                pcm: Arc::new(pcm),
                bed,
            }
        });

        let watermark = match self.watermark.active_path() {
            Some(path) => {
                let clip = ImageClip::open(path)?.with_duration(video_sec);
                Some(Layer::new(clip).positioned(Position::At {
                    x: self.watermark.x,
                    y: self.watermark.y,
                }))
            }
            None => None,
        };

        Ok(SlideshowPlan::new(
            anim.canvas,
            anim.fps,
            anim.duration_sec,
            composed,
            skipped,
            sequence,
            music,
            watermark,
        ))
    }

    /// Render every frame of `plan` into `sink`.
    pub fn encode_plan(&self, plan: &SlideshowPlan, sink: &mut dyn FrameSink) -> LookbookResult<()> {
        plan.encode_into(sink, self.progress.as_ref())
    }

    /// Plan the batch and encode it to `<output_dir>/video-<unix seconds>.mp4`.
    pub fn assemble(
        &mut self,
        music_dir: Option<&Path>,
        images: Vec<String>,
        source_dir: &Path,
        randomize: bool,
        output_dir: &Path,
    ) -> LookbookResult<PathBuf> {
        std::fs::create_dir_all(output_dir)
            .with_context(|| format!("create output directory '{}'", output_dir.display()))?;

        let plan = self.plan(music_dir, images, source_dir, randomize)?;
        let out_path = next_output_path(output_dir, unix_now());
        tracing::info!(
            out = %out_path.display(),
            images = plan.images().len(),
            skipped = plan.skipped().len(),
            duration_sec = plan.duration(),
            frames = plan.frame_count(),
            "encoding slideshow"
        );

        let mut sink = FfmpegSink::new(FfmpegSinkOpts::new(&out_path));
        self.encode_plan(&plan, &mut sink)?;
        Ok(out_path)
    }

    fn select_music(&mut self, music_dir: Option<&Path>) -> LookbookResult<Option<(PathBuf, AudioPcm)>> {
        let Some(dir) = music_dir else {
            return Ok(None);
        };

        let candidates = list_files(dir)?
            .into_iter()
            .filter(|name| is_sound_file(Path::new(name)))
            .collect::<Vec<_>>();
        let Some(name) = candidates.choose(&mut self.rng) else {
            tracing::info!(dir = %dir.display(), "no music found, video will be silent");
            return Ok(None);
        };

        let path = dir.join(name);
        let pcm = self.decoder.decode(&path, MIX_SAMPLE_RATE)?;
        tracing::info!(
            track = %path.display(),
            duration_sec = pcm.duration_sec(),
            "music selected"
        );
        Ok(Some((path, pcm)))
    }

    fn order_images(&mut self, mut images: Vec<String>, randomize: bool) -> Vec<String> {
        if randomize {
            images.shuffle(&mut self.rng);
        } else {
            images.sort();
        }
        images
    }

    fn resolve_animation(&self, ordered: &[String], track: Option<&AudioPcm>) -> AnimationConfig {
        if !self.music.fit_duration_to_music {
            return self.anim;
        }
        let Some(pcm) = track else {
            tracing::warn!("fit-to-music requested without a music track, keeping fixed duration");
            return self.anim;
        };

        let count = ordered
            .iter()
            .filter(|name| is_image_file(Path::new(name)))
            .count();
        let per_image = pcm.duration_sec() / count.max(1) as f64;
        if count == 0 || !per_image.is_finite() || per_image <= 0.0 {
            tracing::warn!(
                track_sec = pcm.duration_sec(),
                images = count,
                "cannot fit clips to music, keeping fixed duration"
            );
            return self.anim;
        }
        self.anim.with_duration(per_image)
    }
}

fn compose_one(path: &Path, anim: &AnimationConfig) -> Result<RenderedClip, SkipReason> {
    if !is_image_file(path) {
        return Err(SkipReason::UnsupportedExtension);
    }
    compose(path, anim).map_err(|e| SkipReason::Load(e.to_string()))
}

/// First free `video-<epoch>.mp4` in `dir`, counting up from `epoch_secs`.
pub fn next_output_path(dir: &Path, epoch_secs: u64) -> PathBuf {
    let mut epoch = epoch_secs;
    loop {
        let candidate = dir.join(format!("video-{epoch}.mp4"));
        if !candidate.exists() {
            return candidate;
        }
        epoch += 1;
    }
}

fn unix_now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
#[path = "../../tests/unit/assemble/assembler.rs"]
mod tests;
