use super::*;
use crate::foundation::core::Rgb8;

fn rgba(w: u32, h: u32, px: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(w, h, image::Rgba(px))
}

fn cfg(canvas: Canvas, fit: FitMode, zoom_factor: f64) -> AnimationConfig {
    AnimationConfig {
        canvas,
        duration_sec: 2.0,
        fit,
        zoom_factor,
        background: Rgb8::new(0, 0, 0),
        fps: Fps::SLIDESHOW,
    }
}

#[test]
fn clip_keeps_configured_duration_and_fps() {
    for duration in [0.1, 1.0, 4.0, 7.5] {
        let c = AnimationConfig {
            duration_sec: duration,
            ..cfg(Canvas::new(64, 36), FitMode::Height, 1.2)
        };
        let clip = compose_image(rgba(30, 30, [200, 10, 10, 255]), &c).unwrap();
        assert_eq!(clip.duration(), duration);
        assert_eq!(clip.fps(), Fps::SLIDESHOW);
        assert_eq!(clip.size(), Canvas::new(64, 36));
    }
}

#[test]
fn height_fit_matches_canvas_height() {
    let clip = compose_image(
        rgba(40, 20, [1, 1, 1, 255]),
        &cfg(Canvas::new(100, 40), FitMode::Height, 1.0),
    )
    .unwrap();
    assert_eq!(clip.fitted_size(), Canvas::new(80, 40));
}

#[test]
fn width_fit_rematches_width_after_height() {
    let clip = compose_image(
        rgba(40, 20, [1, 1, 1, 255]),
        &cfg(Canvas::new(60, 60), FitMode::Width, 1.0),
    )
    .unwrap();
    assert_eq!(clip.fitted_size(), Canvas::new(60, 30));
    assert!(clip.has_fill_bars());
}

#[test]
fn resting_frame_shows_fitted_image_between_bars() {
    let canvas = Canvas::new(40, 20);
    let clip = compose_image(
        rgba(10, 10, [255, 255, 255, 255]),
        &cfg(canvas, FitMode::Height, 1.5),
    )
    .unwrap();
    let layers = clip.composite().layers();
    assert_eq!(layers.len(), 4);

    let zoom = layers[1].placement(0.0, canvas);
    assert_eq!((zoom.width, zoom.height), (20, 20));
    assert_eq!((zoom.x, zoom.y), (10, 0));

    let end = layers[1].placement(2.0, canvas);
    assert_eq!((end.width, end.height), (30, 30));

    let frame = clip.frame_at(0.0);
    assert_eq!(frame.get_pixel(0, 10).0, [0, 0, 0, 255]);
    assert!(frame.get_pixel(20, 10).0.iter().all(|&c| c >= 250));
    assert_eq!(frame.get_pixel(39, 10).0, [0, 0, 0, 255]);

    // Bars keep the zoomed image inside its resting columns.
    let late = clip.frame_at(2.0);
    assert_eq!(late.get_pixel(5, 10).0, [0, 0, 0, 255]);
    assert_eq!(late.get_pixel(35, 10).0, [0, 0, 0, 255]);
}

#[test]
fn exact_fit_composes_without_fill_bars() {
    let clip = compose_image(
        rgba(16, 9, [5, 5, 5, 255]),
        &cfg(Canvas::new(32, 18), FitMode::Height, 1.1),
    )
    .unwrap();
    assert!(!clip.has_fill_bars());
    assert_eq!(clip.composite().layers().len(), 2);
}

#[test]
fn wider_than_canvas_still_composes() {
    let clip = compose_image(
        rgba(100, 10, [5, 5, 5, 255]),
        &cfg(Canvas::new(32, 18), FitMode::Height, 1.0),
    )
    .unwrap();
    assert!(!clip.has_fill_bars());
    assert_eq!(clip.frame_at(1.0).dimensions(), (32, 18));
}

#[test]
fn zoom_factor_one_is_static() {
    let canvas = Canvas::new(40, 20);
    let clip = compose_image(
        rgba(10, 10, [9, 9, 9, 255]),
        &cfg(canvas, FitMode::Height, 1.0),
    )
    .unwrap();
    let zoom = &clip.composite().layers()[1];
    assert_eq!(zoom.placement(0.0, canvas), zoom.placement(2.0, canvas));
}

#[test]
fn invalid_config_is_rejected() {
    let bad = AnimationConfig {
        duration_sec: 0.0,
        ..cfg(Canvas::new(10, 10), FitMode::Height, 1.0)
    };
    assert!(compose_image(rgba(2, 2, [0, 0, 0, 255]), &bad).is_err());
}

#[test]
fn missing_file_is_an_error() {
    let c = cfg(Canvas::new(10, 10), FitMode::Height, 1.0);
    assert!(compose(Path::new("/definitely/not/here.png"), &c).is_err());
}
