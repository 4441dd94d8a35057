use super::*;

fn cfg(width: u32, height: u32) -> SinkConfig {
    SinkConfig {
        width,
        height,
        fps: Fps::SLIDESHOW,
        audio: None,
    }
}

#[test]
fn config_validation_catches_bad_values() {
    assert!(validate_sink_config(&cfg(0, 10)).is_err());
    assert!(validate_sink_config(&cfg(10, 0)).is_err());
    assert!(validate_sink_config(&cfg(10, 10)).is_ok());

    let mut zero_fps = cfg(10, 10);
    zero_fps.fps = Fps { num: 0, den: 1 };
    assert!(validate_sink_config(&zero_fps).is_err());

    let mut bad_audio = cfg(10, 10);
    bad_audio.audio = Some(crate::encode::sink::AudioInputConfig {
        path: PathBuf::from("bed.f32le"),
        sample_rate: 0,
        channels: 2,
    });
    assert!(validate_sink_config(&bad_audio).is_err());
}

#[test]
fn push_before_begin_is_rejected() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new("target/never.mp4"));
    let frame = RgbaImage::new(2, 2);
    assert!(sink.push_frame(FrameIndex(0), &frame).is_err());
    assert!(sink.end().is_err());
}

#[test]
fn encodes_small_clip_when_ffmpeg_is_available() {
    if !is_ffmpeg_on_path() {
        return;
    }
    let out = std::env::temp_dir().join(format!(
        "lookbook_sink_{}_{}.mp4",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new(&out));
    sink.begin(cfg(16, 16)).unwrap();
    let frame = RgbaImage::from_pixel(16, 16, image::Rgba([40, 80, 120, 255]));
    for i in 0..3 {
        sink.push_frame(FrameIndex(i), &frame).unwrap();
    }
    assert!(sink.push_frame(FrameIndex(1), &frame).is_err());
    sink.end().unwrap();
    assert!(out.exists());
    std::fs::remove_file(&out).ok();
}

#[test]
fn odd_dimensions_are_accepted_with_full_chroma() {
    assert!(validate_sink_config(&cfg(33, 16)).is_ok());
    assert!(validate_sink_config(&cfg(32, 17)).is_ok());
    assert!(validate_sink_config(&cfg(1, 1)).is_ok());

    assert_eq!(output_pix_fmt(32, 16), "yuv420p");
    assert_eq!(output_pix_fmt(33, 16), "yuv444p");
    assert_eq!(output_pix_fmt(32, 17), "yuv444p");
    assert_eq!(output_pix_fmt(1081, 1921), "yuv444p");
}

#[test]
fn encodes_odd_canvas_when_ffmpeg_is_available() {
    if !is_ffmpeg_on_path() {
        return;
    }
    let out = std::env::temp_dir().join(format!(
        "lookbook_sink_odd_{}_{}.mp4",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new(&out));
    sink.begin(cfg(33, 17)).unwrap();
    let frame = RgbaImage::from_pixel(33, 17, image::Rgba([200, 40, 10, 255]));
    for i in 0..3 {
        sink.push_frame(FrameIndex(i), &frame).unwrap();
    }
    sink.end().unwrap();
    assert!(out.exists());
    std::fs::remove_file(&out).ok();
}
