//! Presentation-layer entry point: one request in, one video per image group out.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::{
    assemble::{BatchAssembler, NoOpProgress, ProgressCallback, WatermarkConfig},
    assets::{
        discover::list_files,
        seed::{SeedGroups, group_by_seed, single_group},
    },
    compose::AnimationConfig,
    foundation::{
        core::{Canvas, FitMode, Fps, Rgb8},
        error::{LookbookError, LookbookResult, UserFacingError},
    },
};

/// Every parameter of one run, as collected by a form or the CLI.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RunRequest {
    pub width: u32,
    pub height: u32,
    pub image_dir: PathBuf,
    pub randomize: bool,
    pub music_dir: Option<PathBuf>,
    pub duration_sec: f64,
    pub zoom_factor: f64,
    pub fit: FitMode,
    pub output_dir: PathBuf,
    pub fadeout_sec: f64,
    pub background_hex: String,
    pub watermark_path: Option<PathBuf>,
    pub watermark_x: i64,
    pub watermark_y: i64,
    pub fit_to_music: bool,
    pub one_video_per_seed: bool,
    /// Fixes shuffle order and music pick; entropy-seeded when unset.
    pub seed: Option<u64>,
}

impl Default for RunRequest {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            image_dir: PathBuf::new(),
            randomize: false,
            music_dir: None,
            duration_sec: 4.0,
            zoom_factor: 1.0,
            fit: FitMode::Height,
            output_dir: PathBuf::from("output"),
            fadeout_sec: 4.0,
            background_hex: "#000000".to_owned(),
            watermark_path: None,
            watermark_x: -1,
            watermark_y: -1,
            fit_to_music: false,
            one_video_per_seed: false,
            seed: None,
        }
    }
}

impl RunRequest {
    pub fn animation(&self) -> LookbookResult<AnimationConfig> {
        let cfg = AnimationConfig {
            canvas: Canvas::new(self.width, self.height),
            duration_sec: self.duration_sec,
            fit: self.fit,
            zoom_factor: self.zoom_factor,
            background: Rgb8::from_hex(&self.background_hex)?,
            fps: Fps::SLIDESHOW,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// An assembler carrying this request's watermark, fadeout and fit options.
    pub fn build_assembler(&self) -> LookbookResult<BatchAssembler> {
        let mut asm = BatchAssembler::new(self.animation()?);
        if let Some(seed) = self.seed {
            asm = asm.with_seed(seed);
        }
        if let Some(path) = &self.watermark_path {
            asm.set_watermark(WatermarkConfig::new(
                path.clone(),
                self.watermark_x,
                self.watermark_y,
            ));
        }
        asm.set_fadeout(self.fadeout_sec)?;
        asm.set_fit_duration_to_music(self.fit_to_music);
        Ok(asm)
    }

    /// The music directory, with an empty or blank path meaning none.
    pub fn music_dir(&self) -> Option<&Path> {
        self.music_dir
            .as_deref()
            .filter(|p| !p.to_string_lossy().trim().is_empty())
    }
}

/// One written video and the seed group it was built from.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct VideoOutput {
    pub seed: String,
    pub path: PathBuf,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct RunOutput {
    pub videos: Vec<VideoOutput>,
}

impl RunOutput {
    /// The first group's video.
    pub fn primary(&self) -> Option<&Path> {
        self.videos.first().map(|v| v.path.as_path())
    }
}

/// File names of `dir` grouped by seed, or all in one group when `one_per_seed` is off.
pub fn collect_groups(dir: &Path, one_per_seed: bool) -> LookbookResult<SeedGroups> {
    let files = list_files(dir)?;
    if !one_per_seed {
        return Ok(single_group(files));
    }

    let groups = group_by_seed(files);
    if groups.is_empty() {
        return Err(LookbookError::input(format!(
            "no file in '{}' matches <number>-<seed>.<ext>",
            dir.display()
        )));
    }
    Ok(groups)
}

/// Run a whole request; every failure is turned into a [`UserFacingError`].
pub fn run(
    req: &RunRequest,
    progress: Arc<dyn ProgressCallback>,
) -> Result<RunOutput, UserFacingError> {
    let result = req.build_assembler().and_then(|mut asm| {
        asm.set_progress(progress);
        run_with(req, &mut asm)
    });
    result.map_err(|err| {
        tracing::error!("run failed: {err}");
        UserFacingError::from(err)
    })
}

/// Like [`run`] without progress reporting.
pub fn run_quiet(req: &RunRequest) -> Result<RunOutput, UserFacingError> {
    run(req, Arc::new(NoOpProgress))
}

/// Run every image group of `req` through an already configured assembler.
pub fn run_with(req: &RunRequest, asm: &mut BatchAssembler) -> LookbookResult<RunOutput> {
    let groups = collect_groups(&req.image_dir, req.one_video_per_seed)?;
    tracing::info!(
        images = %req.image_dir.display(),
        groups = groups.len(),
        canvas = %asm.animation().canvas,
        "starting run"
    );

    let mut out = RunOutput::default();
    for (seed, files) in groups {
        tracing::info!(seed = %seed, files = files.len(), "assembling group");
        let path = asm.assemble(
            req.music_dir(),
            files.into_iter().collect(),
            &req.image_dir,
            req.randomize,
            &req.output_dir,
        )?;
        tracing::info!(seed = %seed, out = %path.display(), "video written");
        out.videos.push(VideoOutput { seed, path });
    }
    Ok(out)
}
