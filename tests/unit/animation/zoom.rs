use super::*;

#[test]
fn visual_scale_spans_one_to_zoom_factor() {
    for zoom in [1.0, 1.05, 1.3, 2.0] {
        let z = ZoomFn::new(zoom, 4.0);
        assert!((z.visual_scale(0.0) - 1.0).abs() < 1e-12);
        assert!((z.visual_scale(4.0) - zoom).abs() < 1e-12);
    }
}

#[test]
fn applied_factor_compensates_prescale() {
    let z = ZoomFn::new(1.6, 2.0);
    assert!((z.at(0.0) - (1.0 / 1.5)).abs() < 1e-12);
    assert!((z.at(1.0) - (1.3 / 1.5)).abs() < 1e-12);
    assert!((z.at(2.0) - (1.6 / 1.5)).abs() < 1e-12);
}

#[test]
fn zoom_factor_one_is_static() {
    let z = ZoomFn::new(1.0, 3.0);
    assert!(z.is_static());
    assert_eq!(z.visual_scale(0.0), z.visual_scale(3.0));
}

#[test]
fn time_outside_clip_is_clamped() {
    let z = ZoomFn::new(2.0, 1.0);
    assert!((z.visual_scale(-0.5) - 1.0).abs() < 1e-12);
    assert!((z.visual_scale(5.0) - 2.0).abs() < 1e-12);
}
