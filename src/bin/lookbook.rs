use std::{
    path::PathBuf,
    sync::{Arc, Mutex},
};

use clap::{Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use lookbook::{
    FitMode, ProgressCallback, ProgressInfo, RunRequest, Stage,
    assemble::NoOpProgress,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "lookbook", version)]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a slideshow MP4 from a directory of images (requires `ffmpeg` on PATH).
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Directory holding the source images.
    #[arg(long)]
    images: PathBuf,

    /// Output directory; created when missing.
    #[arg(long)]
    out: PathBuf,

    #[arg(long, default_value_t = 1920)]
    width: u32,

    #[arg(long, default_value_t = 1080)]
    height: u32,

    /// Directory to pick background music (.wav/.mp3) from.
    #[arg(long)]
    music: Option<PathBuf>,

    /// Seconds each image is shown.
    #[arg(long, default_value_t = 4.0)]
    duration: f64,

    /// Scale reached at the end of each image.
    #[arg(long, default_value_t = 1.0)]
    zoom: f64,

    #[arg(long, value_enum, default_value_t = FitChoice::Height)]
    fit: FitChoice,

    /// Shuffle images instead of sorting them by name.
    #[arg(long)]
    shuffle: bool,

    /// Music fade-out in seconds.
    #[arg(long, default_value_t = 4.0)]
    fadeout: f64,

    /// Background and fill-bar color as #RRGGBB.
    #[arg(long, default_value = "#000000")]
    bg_color: String,

    /// Image stamped over the whole video.
    #[arg(long)]
    watermark: Option<PathBuf>,

    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    watermark_x: i64,

    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    watermark_y: i64,

    /// Derive each image's duration from the music track length.
    #[arg(long)]
    fit_to_music: bool,

    /// Write one video per `<number>-<seed>.<ext>` seed.
    #[arg(long)]
    per_seed: bool,

    /// Seed for shuffling and music selection.
    #[arg(long)]
    seed: Option<u64>,

    /// Print a JSON summary of the written videos.
    #[arg(long)]
    json: bool,

    #[arg(long)]
    no_progress: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FitChoice {
    Height,
    Width,
}

impl From<FitChoice> for FitMode {
    fn from(c: FitChoice) -> Self {
        match c {
            FitChoice::Height => FitMode::Height,
            FitChoice::Width => FitMode::Width,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "lookbook=debug" } else { "lookbook=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let req = RunRequest {
        width: args.width,
        height: args.height,
        image_dir: args.images,
        randomize: args.shuffle,
        music_dir: args.music,
        duration_sec: args.duration,
        zoom_factor: args.zoom,
        fit: args.fit.into(),
        output_dir: args.out,
        fadeout_sec: args.fadeout,
        background_hex: args.bg_color,
        watermark_path: args.watermark,
        watermark_x: args.watermark_x,
        watermark_y: args.watermark_y,
        fit_to_music: args.fit_to_music,
        one_video_per_seed: args.per_seed,
        seed: args.seed,
    };

    let bar = if args.no_progress {
        None
    } else {
        Some(Arc::new(BarProgress::new()?))
    };
    let progress: Arc<dyn ProgressCallback> = match &bar {
        Some(bar) => bar.clone() as Arc<dyn ProgressCallback>,
        None => Arc::new(NoOpProgress),
    };

    let result = lookbook::run(&req, progress);
    if let Some(bar) = &bar {
        bar.finish();
    }
    let output = result?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for video in &output.videos {
            println!("{}", video.path.display());
        }
    }
    Ok(())
}

/// Terminal progress bar that restarts whenever the batch moves to another stage.
struct BarProgress {
    bar: ProgressBar,
    stage: Mutex<Option<Stage>>,
}

impl BarProgress {
    fn new() -> anyhow::Result<Self> {
        let bar = ProgressBar::new(0);
        let style = ProgressStyle::with_template(
            "{spinner:.green} {msg:>8} {bar:40.cyan/blue} {pos}/{len}",
        )?;
        bar.set_style(style.progress_chars("##-"));
        Ok(Self {
            bar,
            stage: Mutex::new(None),
        })
    }

    fn finish(&self) {
        self.bar.finish_with_message("done");
    }
}

impl ProgressCallback for BarProgress {
    fn on_progress(&self, info: &ProgressInfo) {
        if let Ok(mut stage) = self.stage.lock()
            && *stage != Some(info.stage)
        {
            *stage = Some(info.stage);
            self.bar.reset();
            self.bar.set_message(match info.stage {
                Stage::Compose => "compose",
                Stage::Encode => "encode",
            });
        }
        self.bar.set_length(info.total);
        self.bar.set_position(info.current);
    }
}
