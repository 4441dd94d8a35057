use crate::foundation::math::lerp;

/// Factor the zoom source is enlarged by before animating, so the per-frame resize only ever
/// shrinks towards (or up to) the fitted size.
pub const ZOOM_PRESCALE: f64 = 1.5;

/// Linear zoom from the fitted size (`1.0`) to `zoom_factor` over `duration_sec`.
///
/// [`ZoomFn::visual_scale`] is the size relative to the fitted image; [`ZoomFn::at`] is the
/// factor applied to the pre-scaled clip, i.e. the visual scale divided by [`ZOOM_PRESCALE`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomFn {
    pub zoom_factor: f64,
    pub duration_sec: f64,
    pub prescale: f64,
}

impl ZoomFn {
    pub fn new(zoom_factor: f64, duration_sec: f64) -> Self {
        Self {
            zoom_factor,
            duration_sec,
            prescale: ZOOM_PRESCALE,
        }
    }

    pub fn visual_scale(&self, t: f64) -> f64 {
        if self.duration_sec <= 0.0 {
            return 1.0;
        }
        lerp(1.0, self.zoom_factor, t / self.duration_sec)
    }

    pub fn at(&self, t: f64) -> f64 {
        self.visual_scale(t) / self.prescale
    }

    pub fn is_static(&self) -> bool {
        (self.zoom_factor - 1.0).abs() < f64::EPSILON
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/zoom.rs"]
mod tests;
