use std::sync::Mutex;

use super::*;

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "lookbook_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn silence(seconds: f64) -> AudioPcm {
    let sample_rate = 4;
    let frames = (seconds * f64::from(sample_rate)).round() as usize;
    AudioPcm {
        sample_rate,
        channels: 2,
        interleaved_f32: vec![0.0; frames * 2],
    }
}

#[derive(Default)]
struct RecordingDecoder {
    decoded: Mutex<Vec<PathBuf>>,
}

impl AudioDecoder for RecordingDecoder {
    fn decode(&self, path: &Path, _sample_rate: u32) -> LookbookResult<AudioPcm> {
        self.decoded.lock().unwrap().push(path.to_path_buf());
        Ok(silence(6.0))
    }
}

#[test]
fn skip_reason_rejects_unlisted_extensions_before_loading() {
    let anim = AnimationConfig::default();
    let err = compose_one(Path::new("/nowhere/readme.txt"), &anim).unwrap_err();
    assert_eq!(err, SkipReason::UnsupportedExtension);

    let err = compose_one(Path::new("/nowhere/missing.png"), &anim).unwrap_err();
    assert!(matches!(err, SkipReason::Load(_)));
    assert!(err.to_string().starts_with("failed to load:"));
}

#[test]
fn ordering_is_lexicographic_without_randomize() {
    let mut asm = BatchAssembler::new(AnimationConfig::default());
    let ordered = asm.order_images(names(&["c.png", "a.png", "b.png"]), false);
    assert_eq!(ordered, names(&["a.png", "b.png", "c.png"]));
}

#[test]
fn seeded_shuffle_is_reproducible() {
    let input = names(&["1.png", "2.png", "3.png", "4.png", "5.png", "6.png", "7.png", "8.png"]);

    let mut a = BatchAssembler::new(AnimationConfig::default()).with_seed(7);
    let mut b = BatchAssembler::new(AnimationConfig::default()).with_seed(7);
    let first = a.order_images(input.clone(), true);
    let second = b.order_images(input.clone(), true);
    assert_eq!(first, second);

    let mut sorted = first.clone();
    sorted.sort();
    assert_eq!(sorted, input);
}

#[test]
fn fit_to_music_divides_track_by_image_count() {
    let mut asm = BatchAssembler::new(AnimationConfig::default());
    asm.set_fit_duration_to_music(true);

    let track = silence(12.0);
    let ordered = names(&["a.png", "b.png", "c.jpg", "d.webp", "notes.txt"]);
    let anim = asm.resolve_animation(&ordered, Some(&track));
    assert!((anim.duration_sec - 3.0).abs() < 1e-12);
}

#[test]
fn fit_to_music_without_track_keeps_fixed_duration() {
    let mut asm = BatchAssembler::new(AnimationConfig::default());
    asm.set_fit_duration_to_music(true);
    let anim = asm.resolve_animation(&names(&["a.png"]), None);
    assert_eq!(anim.duration_sec, 4.0);

    asm.set_fit_duration_to_music(false);
    let anim = asm.resolve_animation(&names(&["a.png"]), Some(&silence(12.0)));
    assert_eq!(anim.duration_sec, 4.0);
}

#[test]
fn music_pick_only_considers_sound_files_and_follows_the_seed() {
    let dir = temp_dir("music_pick");
    std::fs::create_dir_all(&dir).unwrap();
    for name in ["b.mp3", "a.wav", "cover.png", "c.MP3"] {
        std::fs::write(dir.join(name), b"x").unwrap();
    }

    let pick = |seed: u64| {
        let decoder = Arc::new(RecordingDecoder::default());
        let mut asm = BatchAssembler::new(AnimationConfig::default())
            .with_seed(seed)
            .with_decoder(decoder.clone());
        let (path, pcm) = asm.select_music(Some(&dir)).unwrap().unwrap();
        assert_eq!(pcm.duration_sec(), 6.0);
        assert_eq!(decoder.decoded.lock().unwrap().as_slice(), &[path.clone()]);
        path
    };

    let first = pick(11);
    assert!(is_sound_file(&first));
    assert_eq!(first, pick(11));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn music_dir_without_tracks_is_silent_not_an_error() {
    let dir = temp_dir("music_empty");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("readme.txt"), b"x").unwrap();

    let mut asm = BatchAssembler::new(AnimationConfig::default());
    assert!(asm.select_music(Some(&dir)).unwrap().is_none());
    assert!(asm.select_music(None).unwrap().is_none());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn empty_image_list_is_an_input_error() {
    let dir = temp_dir("empty_plan");
    let mut asm = BatchAssembler::new(AnimationConfig::default());
    let err = asm.plan(None, Vec::new(), &dir, false).unwrap_err();
    assert!(matches!(err, LookbookError::Input(_)));
}

#[test]
fn mutators_validate_their_input() {
    let mut asm = BatchAssembler::new(AnimationConfig::default());

    asm.set_background_color("#102030").unwrap();
    assert_eq!(asm.animation().background, Rgb8::new(16, 32, 48));
    assert!(asm.set_background_color("blue").is_err());
    assert_eq!(asm.animation().background, Rgb8::new(16, 32, 48));

    asm.set_fadeout(2.5).unwrap();
    assert_eq!(asm.music().fadeout_sec, 2.5);
    assert!(asm.set_fadeout(-1.0).is_err());
    assert_eq!(asm.music().fadeout_sec, 2.5);

    asm.set_watermark(WatermarkConfig::new("wm.png", 4, 8));
    assert_eq!(asm.watermark().active_path(), Some(Path::new("wm.png")));
}

#[test]
fn output_name_bumps_epoch_when_taken() {
    let dir = temp_dir("naming");
    std::fs::create_dir_all(&dir).unwrap();

    assert_eq!(next_output_path(&dir, 1_700_000_000), dir.join("video-1700000000.mp4"));

    std::fs::write(dir.join("video-1700000000.mp4"), b"").unwrap();
    std::fs::write(dir.join("video-1700000001.mp4"), b"").unwrap();
    assert_eq!(next_output_path(&dir, 1_700_000_000), dir.join("video-1700000002.mp4"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn bad_output_config_fails_before_music_is_decoded() {
    let dir = temp_dir("early_validation");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("a.wav"), b"x").unwrap();

    let decoder = Arc::new(RecordingDecoder::default());
    let anim = AnimationConfig {
        canvas: crate::foundation::core::Canvas::new(0, 16),
        ..AnimationConfig::default()
    };
    let mut asm = BatchAssembler::new(anim).with_decoder(decoder.clone());
    let err = asm
        .plan(Some(&dir), names(&["a.png"]), &dir, false)
        .unwrap_err();
    assert!(matches!(err, LookbookError::Validation(_)));
    assert!(decoder.decoded.lock().unwrap().is_empty());

    let _ = std::fs::remove_dir_all(&dir);
}
