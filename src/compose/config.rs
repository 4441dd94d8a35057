use crate::foundation::{
    core::{Canvas, FitMode, Fps, Rgb8},
    error::{LookbookError, LookbookResult},
};

/// Animation parameters shared by every image of one run.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationConfig {
    pub canvas: Canvas,
    pub duration_sec: f64,
    pub fit: FitMode,
    /// Visual scale reached at the end of each clip; values below 1.0 shrink and are accepted.
    pub zoom_factor: f64,
    pub background: Rgb8,
    pub fps: Fps,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::new(1920, 1080),
            duration_sec: 4.0,
            fit: FitMode::Height,
            zoom_factor: 1.0,
            background: Rgb8::BLACK,
            fps: Fps::SLIDESHOW,
        }
    }
}

impl AnimationConfig {
    pub fn validate(&self) -> LookbookResult<()> {
        if self.canvas.is_empty() {
            return Err(LookbookError::validation(format!(
                "canvas width/height must be non-zero, got {}",
                self.canvas
            )));
        }
        if !self.duration_sec.is_finite() || self.duration_sec <= 0.0 {
            return Err(LookbookError::validation(format!(
                "clip duration must be a positive number of seconds, got {}",
                self.duration_sec
            )));
        }
        if !self.zoom_factor.is_finite() || self.zoom_factor <= 0.0 {
            return Err(LookbookError::validation(format!(
                "zoom factor must be positive, got {}",
                self.zoom_factor
            )));
        }
        Fps::new(self.fps.num, self.fps.den)?;
        Ok(())
    }

    /// Copy of this config with a different per-image duration.
    pub fn with_duration(self, duration_sec: f64) -> Self {
        Self {
            duration_sec,
            ..self
        }
    }
}
